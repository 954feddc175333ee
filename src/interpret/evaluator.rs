use log::trace;

use super::error::EvalError;
use crate::ast::Expression;
use crate::token::{Token, TokenKind};

/// Reduces `expr` to a number. Infinities and NaN pass through untouched;
/// only a divisor equal to exactly zero is an error.
pub fn evaluate(expr: &Expression) -> Result<f64, EvalError> {
    match expr {
        Expression::Literal(value) => Ok(*value),
        Expression::Unary(op, operand) => evaluate_unary(op, operand),
        Expression::Binary(lhs, op, rhs) => evaluate_binary(lhs, op, rhs),
    }
}

fn evaluate_unary(op: &Token, operand: &Expression) -> Result<f64, EvalError> {
    let value = evaluate(operand)?;
    match op.kind {
        TokenKind::Minus => Ok(-value),
        _ => Err(unknown_operator(op)),
    }
}

fn evaluate_binary(lhs: &Expression, op: &Token, rhs: &Expression) -> Result<f64, EvalError> {
    let l = evaluate(lhs)?;
    let r = evaluate(rhs)?;
    trace!("{} {} {}", l, op.lexeme, r);

    match op.kind {
        TokenKind::Plus => Ok(l + r),
        TokenKind::Minus => Ok(l - r),
        TokenKind::Star => Ok(l * r),
        TokenKind::Slash => divide(l, r, op),
        _ => Err(unknown_operator(op)),
    }
}

fn divide(l: f64, r: f64, op: &Token) -> Result<f64, EvalError> {
    // -0.0 compares equal to 0.0
    if r == 0.0 {
        return Err(EvalError::DivideByZero {
            position: op.position,
        });
    }
    Ok(l / r)
}

fn unknown_operator(op: &Token) -> EvalError {
    EvalError::UnknownOperator {
        lexeme: op.lexeme.clone(),
        position: op.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse, tokenize};
    use rstest::rstest;

    fn eval_str(input: &str) -> Result<f64, EvalError> {
        let tokens = tokenize(input).unwrap();
        evaluate(&parse(&tokens).unwrap())
    }

    #[rstest]
    #[case("2+3*4", 14.0)]
    #[case("(2+3)*4", 20.0)]
    #[case("--5", 5.0)]
    #[case("-5", -5.0)]
    #[case("10-3-2", 5.0)]
    #[case("8/4/2", 1.0)]
    #[case("0/4", 0.0)]
    #[case("7/2", 3.5)]
    #[case("-(1+2)*-3", 9.0)]
    #[case(" 1 + 2 ", 3.0)]
    fn evaluates_arithmetic(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(eval_str(input).unwrap(), expected);
    }

    #[rstest]
    #[case("4/0", 1)]
    #[case("1/(2-2)", 1)]
    #[case("1+ 3/-0", 4)]
    fn zero_divisor_fails(#[case] input: &str, #[case] position: usize) {
        assert_eq!(eval_str(input), Err(EvalError::DivideByZero { position }));
    }

    #[test]
    fn tiny_divisor_is_not_zero() {
        let expr = Expression::binary(
            Expression::Literal(1.0),
            Token::new(TokenKind::Slash, "/", 1),
            Expression::Literal(f64::MIN_POSITIVE),
        );
        assert_eq!(evaluate(&expr), Ok(1.0 / f64::MIN_POSITIVE));

        let expr = Expression::binary(
            Expression::Literal(1.0),
            Token::new(TokenKind::Slash, "/", 1),
            Expression::Literal(1e-320),
        );
        assert_eq!(evaluate(&expr), Ok(f64::INFINITY));
    }

    #[test]
    fn nan_flows_through() {
        let expr = Expression::unary(
            Token::new(TokenKind::Minus, "-", 0),
            Expression::Literal(f64::NAN),
        );
        assert!(evaluate(&expr).unwrap().is_nan());
    }

    #[test]
    fn hand_built_operator_outside_grammar() {
        let expr = Expression::binary(
            Expression::Literal(1.0),
            Token::new(TokenKind::LeftParen, "(", 1),
            Expression::Literal(2.0),
        );
        assert_eq!(
            evaluate(&expr),
            Err(EvalError::UnknownOperator {
                lexeme: "(".into(),
                position: 1
            })
        );

        let expr = Expression::unary(
            Token::new(TokenKind::Plus, "+", 0),
            Expression::Literal(2.0),
        );
        assert!(matches!(
            evaluate(&expr),
            Err(EvalError::UnknownOperator { .. })
        ));
    }
}
