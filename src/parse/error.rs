use thiserror::Error;

use super::context::MAX_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unexpected character `{character}`")]
pub struct LexError {
    pub character: char,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unexpected token {}", describe_lexeme(.lexeme))]
    UnexpectedToken { lexeme: String, position: usize },

    #[error("Expected `)` but found {}", describe_lexeme(.lexeme))]
    UnclosedGroup { lexeme: String, position: usize },

    #[error("Parse have leftover tokens start with {}", describe_lexeme(.lexeme))]
    Unfinished { lexeme: String, position: usize },

    #[error("Unable to parse `{lexeme}` to number")]
    ParseToNumber { lexeme: String, position: usize },

    #[error("Token stream is not terminated by an end-of-input token")]
    MissingEndOfInput { position: usize },

    #[error("Expression nests deeper than {} levels", MAX_DEPTH)]
    TooDeep { position: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
        use ParseError::*;
        match self {
            UnexpectedToken { position, .. } => *position,
            UnclosedGroup { position, .. } => *position,
            Unfinished { position, .. } => *position,
            ParseToNumber { position, .. } => *position,
            MissingEndOfInput { position } => *position,
            TooDeep { position } => *position,
        }
    }
}

fn describe_lexeme(lexeme: &str) -> String {
    if lexeme.is_empty() {
        "end of input".to_string()
    } else {
        format!("`{}`", lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_lexeme() {
        let err = ParseError::UnexpectedToken {
            lexeme: ")".to_string(),
            position: 4,
        };
        assert_eq!(err.to_string(), "Unexpected token `)`");
        assert_eq!(err.position(), 4);

        let err = ParseError::UnclosedGroup {
            lexeme: String::new(),
            position: 4,
        };
        assert_eq!(err.to_string(), "Expected `)` but found end of input");
    }

    #[test]
    fn lex_error_message() {
        let err = LexError {
            character: '#',
            position: 2,
        };
        assert_eq!(err.to_string(), "Unexpected character `#`");
    }
}
