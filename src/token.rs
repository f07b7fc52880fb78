use std::fmt;

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Opening brace `{`.
    LeftBrace,
    /// Closing brace `}`.
    RightBrace,
    /// Opening bracket `[`.
    LeftBracket,
    /// Closing bracket `]`.
    RightBracket,
    /// Key separator `:`.
    Colon,
    /// Element separator `,`.
    Comma,
    /// Double-quoted string (`"..."`).
    String,
    /// Numeric literal, optionally negative and fractional.
    Number,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
    /// Terminal token, emitted exactly once.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::EndOfInput => "end of input",
        };
        f.pad(name)
    }
}

/// Value carried by a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Number(f64),
    /// Raw text between the quotes. Escape sequences are kept as written.
    String(String),
}

/// A single token with its kind, source text, and line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text consumed for this token.
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// Line on which the token's last byte was consumed.
    pub line: usize,
}

impl Token {
    /// The boolean payload, if this is a `Boolean` token.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self.literal {
            Some(Literal::Bool(b)) => Some(b),
            _ => None,
        }
    }

    /// The numeric payload, if this is a `Number` token.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self.literal {
            Some(Literal::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// The raw string payload, if this is a `String` token.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::String(s)) => Some(s),
            _ => None,
        }
    }
}
