use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenKind {
    #[display("NUMBER")]
    Number,

    #[display("PLUS")]
    Plus,
    #[display("MINUS")]
    Minus,
    #[display("STAR")]
    Star,
    #[display("SLASH")]
    Slash,

    #[display("LPAREN")]
    LeftParen,
    #[display("RPAREN")]
    RightParen,

    #[display("EOF")]
    EndOfInput,
}

/// A lexeme together with its kind and the char offset of its first character.
/// `EndOfInput` has an empty lexeme and sits one past the last character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    pub fn end_of_input(position: usize) -> Self {
        Token::new(TokenKind::EndOfInput, "", position)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "{}@{}", self.kind, self.position),
            _ => write!(f, "{}('{}' @{})", self.kind, self.lexeme, self.position),
        }
    }
}

pub fn format_tokens(tokens: &[Token]) -> String {
    let items = tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<String>>();
    format!("[{}]", items.join(", "))
}
