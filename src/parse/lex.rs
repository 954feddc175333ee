use log::trace;

use super::error::LexError;
use crate::token::{Token, TokenKind};

fn single_char_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        _ => return None,
    };
    Some(kind)
}

/// Splits `input` into tokens in a single left to right pass.
///
/// Positions are char offsets. The returned list always ends with exactly
/// one `EndOfInput` token positioned at `input.chars().count()`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let chars = input.chars().collect::<Vec<char>>();
    let mut curr_offset = 0;
    let mut result = vec![];

    while let Some(&c) = chars.get(curr_offset) {
        if c.is_whitespace() {
            curr_offset += 1;
        } else if c.is_ascii_digit() {
            result.push(lex_number(&chars, &mut curr_offset));
        } else if let Some(kind) = single_char_kind(c) {
            result.push(Token::new(kind, c.to_string(), curr_offset));
            curr_offset += 1;
        } else {
            return Err(LexError {
                character: c,
                position: curr_offset,
            });
        }
    }

    result.push(Token::end_of_input(chars.len()));
    trace!("lexed {} tokens", result.len());

    Ok(result)
}

// consumes the maximal digit run starting at `offset`
fn lex_number(chars: &[char], offset: &mut usize) -> Token {
    let start_offset = *offset;

    while let Some(c) = chars.get(*offset) {
        if !c.is_ascii_digit() {
            break;
        }
        *offset += 1;
    }

    let lexeme = chars[start_offset..*offset].iter().collect::<String>();
    Token::new(TokenKind::Number, lexeme, start_offset)
}
