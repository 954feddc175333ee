use crate::token::{Token, TokenKind};

use super::error::ParseError;

/// Deepest tree the parser builds. Groups, negations and each operator of a
/// binary chain count one level, which keeps every later recursive walk of
/// the tree (evaluation, rendering, drop) within the stack.
pub const MAX_DEPTH: usize = 256;

/// Read cursor over a token slice.
pub struct Context<'a> {
    items: &'a [Token],
    curr_pos: usize,
    depth: usize,
}

impl<'a> Context<'a> {
    pub fn new(items: &'a [Token]) -> Self {
        Self {
            items,
            curr_pos: 0,
            depth: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Goes one level deeper on behalf of the token at `position`.
    pub fn descend(&mut self, position: usize) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { position });
        }
        self.depth += 1;
        Ok(())
    }

    pub fn restore_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    pub fn is_at_end(&self) -> bool {
        self.items
            .get(self.curr_pos)
            .map(|t| t.is_end())
            .unwrap_or(true)
    }

    pub fn advance(&mut self) {
        self.curr_pos += 1;
    }

    pub fn peek(&self, match_kinds: &'static [TokenKind]) -> bool {
        self.items
            .get(self.curr_pos)
            .map(|t| match_kinds.contains(&t.kind))
            .unwrap_or(false)
    }

    /// Consumes the current token when its kind is one of `match_kinds`.
    pub fn next_if(&mut self, match_kinds: &'static [TokenKind]) -> Option<&'a Token> {
        let items = self.items;
        match items.get(self.curr_pos) {
            Some(t) if match_kinds.contains(&t.kind) => {
                self.advance();
                Some(t)
            }
            _ => None,
        }
    }

    pub fn get_curr(&self) -> Result<&'a Token, ParseError> {
        let items = self.items;
        match items.get(self.curr_pos) {
            Some(t) => Ok(t),
            None => Err(ParseError::MissingEndOfInput {
                position: self.end_position(),
            }),
        }
    }

    // where the input would end if the stream had been terminated
    fn end_position(&self) -> usize {
        self.items
            .last()
            .map(|t| t.position + t.lexeme.chars().count())
            .unwrap_or(0)
    }
}
