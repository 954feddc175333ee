mod context;
mod error;
mod lex;
mod parser;

pub use context::MAX_DEPTH;
pub use error::{LexError, ParseError};
pub use lex::tokenize;
pub use parser::parse;
