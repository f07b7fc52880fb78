use std::fmt;

use crate::Error;
use crate::token::{Literal, Token, TokenKind};

/// Classifies a lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// Input ended before the closing quote of a string.
    UnterminatedString,
    /// Lone `-` or a numeric span that does not parse as `f64`.
    InvalidNumber,
    /// Run of letters other than `true`, `false`, or `null`.
    UnexpectedKeyword(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "Unexpected character: {ch}")
            }
            Self::UnterminatedString => {
                write!(f, "Unterminated string")
            }
            Self::InvalidNumber => {
                write!(f, "Invalid number")
            }
            Self::UnexpectedKeyword(word) => {
                write!(f, "Unexpected keyword: {word}")
            }
        }
    }
}

/// Error collected during a scan pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error at line {line}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Line the scanner was on when the error was detected.
    pub line: usize,
}

/// Tokens and errors produced by one scan pass, both in discovery order.
///
/// `tokens` always ends with a single [`TokenKind::EndOfInput`].
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Scan {
    /// True when no lexical error was collected.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The first collected error, in discovery order.
    #[must_use]
    pub fn first_error(&self) -> Option<&LexError> {
        self.errors.first()
    }

    /// Token kinds in order, including the trailing `EndOfInput`.
    #[must_use]
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Convert into the tokens, or an [`Error`] holding every
    /// collected lexical error.
    pub fn into_result(self) -> Result<Vec<Token>, Error> {
        match Error::from_errors(self.errors) {
            Some(err) => Err(err),
            None => Ok(self.tokens),
        }
    }
}

/// Scan a source string into tokens, collecting every lexical error.
///
/// Never fails: recognition errors are recorded and scanning resumes
/// at the next unconsumed byte.
#[must_use]
pub fn scan(input: &str) -> Scan {
    Scanner::new(input).run()
}

/// Scan raw bytes. Invalid UTF-8 sequences become U+FFFD and are
/// reported as unexpected characters.
#[must_use]
pub fn scan_bytes(input: &[u8]) -> Scan {
    scan(&String::from_utf8_lossy(input))
}

/// Result of one dispatch from the "between tokens" state.
enum Outcome {
    Emit(Token),
    Skip,
    Fail(LexError),
}

struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    const fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    fn run(mut self) -> Scan {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        while !self.is_at_end() {
            self.start = self.current;
            match self.scan_token() {
                Outcome::Emit(token) => tokens.push(token),
                Outcome::Fail(err) => errors.push(err),
                Outcome::Skip => {}
            }
        }

        self.start = self.current;
        tokens.push(self.make_token(TokenKind::EndOfInput, None));

        Scan { tokens, errors }
    }

    const fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.bytes.get(self.current + 1).copied()
    }

    /// Consume one byte. The line counter moves past a newline only
    /// after it has been consumed.
    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.current += 1;
        if byte == b'\n' {
            self.line += 1;
        }
        Some(byte)
    }

    fn slice(&self, from: usize, to: usize) -> &'a str {
        self.source.get(from..to).unwrap_or_default()
    }

    fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        Token {
            kind,
            lexeme: self.slice(self.start, self.current).to_owned(),
            literal,
            line: self.line,
        }
    }

    const fn error(&self, kind: LexErrorKind) -> Outcome {
        Outcome::Fail(LexError {
            kind,
            line: self.line,
        })
    }

    fn scan_token(&mut self) -> Outcome {
        let Some(byte) = self.advance() else {
            return Outcome::Skip;
        };

        match byte {
            b' ' | b'\r' | b'\t' | b'\n' => Outcome::Skip,
            b'{' => Outcome::Emit(self.make_token(TokenKind::LeftBrace, None)),
            b'}' => Outcome::Emit(self.make_token(TokenKind::RightBrace, None)),
            b'[' => Outcome::Emit(self.make_token(TokenKind::LeftBracket, None)),
            b']' => Outcome::Emit(self.make_token(TokenKind::RightBracket, None)),
            b':' => Outcome::Emit(self.make_token(TokenKind::Colon, None)),
            b',' => Outcome::Emit(self.make_token(TokenKind::Comma, None)),
            b'"' => self.read_string(),
            b'-' | b'0'..=b'9' => self.read_number(byte),
            b'a'..=b'z' | b'A'..=b'Z' => self.read_keyword(),
            _ => self.unexpected_character(),
        }
    }

    fn read_string(&mut self) -> Outcome {
        loop {
            match self.peek() {
                None => return self.error(LexErrorKind::UnterminatedString),
                Some(b'"') => break,
                Some(b'\\') => {
                    // the escaped byte is taken as-is, whatever it is
                    self.advance();
                    self.advance();
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        self.advance(); // closing quote

        let value = self.slice(self.start + 1, self.current - 1).to_owned();
        Outcome::Emit(self.make_token(TokenKind::String, Some(Literal::String(value))))
    }

    fn read_number(&mut self, first: u8) -> Outcome {
        if first == b'-' && !is_digit(self.peek()) {
            return self.error(LexErrorKind::InvalidNumber);
        }

        self.consume_digits();

        if self.peek() == Some(b'.') && is_digit(self.peek_next()) {
            self.advance();
            self.consume_digits();
        }

        match self.slice(self.start, self.current).parse::<f64>() {
            Ok(value) if value.is_finite() => {
                Outcome::Emit(self.make_token(TokenKind::Number, Some(Literal::Number(value))))
            }
            // out-of-range spans parse as infinity
            _ => self.error(LexErrorKind::InvalidNumber),
        }
    }

    fn consume_digits(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }
    }

    fn read_keyword(&mut self) -> Outcome {
        while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.advance();
        }

        match self.slice(self.start, self.current) {
            "true" => Outcome::Emit(self.make_token(TokenKind::Boolean, Some(Literal::Bool(true)))),
            "false" => {
                Outcome::Emit(self.make_token(TokenKind::Boolean, Some(Literal::Bool(false))))
            }
            "null" => Outcome::Emit(self.make_token(TokenKind::Null, None)),
            word => self.error(LexErrorKind::UnexpectedKeyword(word.to_owned())),
        }
    }

    /// Report the character starting at `start` and step over all of
    /// its UTF-8 bytes.
    fn unexpected_character(&mut self) -> Outcome {
        let ch = self
            .source
            .get(self.start..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.current = self.current.max(self.start + ch.len_utf8());
        self.error(LexErrorKind::UnexpectedCharacter(ch))
    }
}

fn is_digit(byte: Option<u8>) -> bool {
    byte.is_some_and(|b| b.is_ascii_digit())
}
