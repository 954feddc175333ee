pub mod ast;
pub mod interpret;
pub mod parse;
pub mod printer;
pub mod token;

use thiserror::Error;

pub use ast::Expression;
pub use interpret::{evaluate, EvalError};
pub use parse::{parse, tokenize, LexError, ParseError, MAX_DEPTH};
pub use printer::{render, write_tree};
pub use token::{format_tokens, Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Lex error at position {}: {0}", .0.position)]
    Lex(#[from] LexError),

    #[error("Parse error at position {}: {0}", .0.position())]
    Parse(#[from] ParseError),

    #[error("Runtime error: {0}")]
    Eval(#[from] EvalError),
}
