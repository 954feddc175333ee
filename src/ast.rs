use crate::token::Token;

/// Owning expression tree. Operator tokens keep their lexeme and position
/// so later stages can point back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(f64),
    Unary(Token, Box<Expression>),
    Binary(Box<Expression>, Token, Box<Expression>),
}

impl Expression {
    pub fn unary(operator: Token, operand: Expression) -> Self {
        Expression::Unary(operator, Box::new(operand))
    }

    pub fn binary(left: Expression, operator: Token, right: Expression) -> Self {
        Expression::Binary(Box::new(left), operator, Box::new(right))
    }
}
