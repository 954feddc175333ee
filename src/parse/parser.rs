use log::trace;

use crate::ast::Expression;
use crate::token::{Token, TokenKind};

use super::context::Context;
use super::error::ParseError;

// expression := term (("+"|"-") term)*
// term       := unary (("*"|"/") unary)*
// unary      := "-" unary | primary
// primary    := NUMBER | "(" expression ")"
pub fn parse(items: &[Token]) -> Result<Expression, ParseError> {
    let mut state = Context::new(items);
    let expr = parse_expr(&mut state)?;

    if !state.is_at_end() {
        let t = state.get_curr()?;
        return Err(ParseError::Unfinished {
            lexeme: t.lexeme.clone(),
            position: t.position,
        });
    }

    trace!("{:?}", expr);
    Ok(expr)
}

fn parse_expr(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[TokenKind::Plus, TokenKind::Minus], parse_term)
}

fn parse_term(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[TokenKind::Star, TokenKind::Slash], parse_unary)
}

fn parse_recursive_binary<F>(
    state: &mut Context,
    match_kinds: &'static [TokenKind],
    lower_fn: F,
) -> Result<Expression, ParseError>
where
    F: Fn(&mut Context) -> Result<Expression, ParseError>,
{
    let start_depth = state.depth();
    let mut lhs = lower_fn(state)?;

    // every operator puts the chain built so far one level further down
    while let Some(op) = state.next_if(match_kinds) {
        state.descend(op.position)?;
        let rhs = lower_fn(state)?;
        lhs = Expression::binary(lhs, op.clone(), rhs);
    }

    state.restore_depth(start_depth);
    Ok(lhs)
}

fn parse_unary(state: &mut Context) -> Result<Expression, ParseError> {
    match state.next_if(&[TokenKind::Minus]) {
        Some(op) => {
            state.descend(op.position)?;
            let operand = parse_unary(state)?;
            state.restore_depth(state.depth() - 1);
            Ok(Expression::unary(op.clone(), operand))
        }
        None => parse_primary(state),
    }
}

fn parse_primary(state: &mut Context) -> Result<Expression, ParseError> {
    let t = state.get_curr()?;

    match t.kind {
        TokenKind::Number => parse_number(state),
        TokenKind::LeftParen => parse_group(state),
        _ => Err(ParseError::UnexpectedToken {
            lexeme: t.lexeme.clone(),
            position: t.position,
        }),
    }
}

fn parse_group(state: &mut Context) -> Result<Expression, ParseError> {
    let open = state.get_curr()?;
    state.descend(open.position)?;
    state.advance(); // consume '('
    let expr = parse_expr(state)?;
    state.restore_depth(state.depth() - 1);

    if !state.peek(&[TokenKind::RightParen]) {
        let t = state.get_curr()?;
        return Err(ParseError::UnclosedGroup {
            lexeme: t.lexeme.clone(),
            position: t.position,
        });
    }

    state.advance();
    Ok(expr)
}

fn parse_number(state: &mut Context) -> Result<Expression, ParseError> {
    let t = state.get_curr()?;
    state.advance();

    match t.lexeme.parse::<f64>() {
        Err(_) => Err(ParseError::ParseToNumber {
            lexeme: t.lexeme.clone(),
            position: t.position,
        }),
        Ok(num) => Ok(Expression::Literal(num)),
    }
}
