use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Division by zero")]
    DivideByZero { position: usize },

    #[error("Unknown operator `{lexeme}` at position {position}")]
    UnknownOperator { lexeme: String, position: usize },
}

impl EvalError {
    pub fn position(&self) -> usize {
        match self {
            EvalError::DivideByZero { position } => *position,
            EvalError::UnknownOperator { position, .. } => *position,
        }
    }
}
