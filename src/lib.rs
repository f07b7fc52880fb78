//! Lexical scanner for JSON-like documents.
//!
//! Turns a source string into a flat sequence of typed tokens
//! (braces, brackets, colons, commas, strings, numbers, booleans,
//! `null`) terminated by a single end-of-input token. Lexical
//! errors do not stop the scan: every error in the input is
//! collected in one pass.
//!
//! # Quick start
//!
//! ## Scan and inspect every token
//!
//! ```
//! use jsonc_rs::{TokenKind, scan};
//!
//! let result = scan("{\"a\": [1, true]}");
//! assert!(result.is_ok());
//! assert_eq!(result.tokens[1].kind, TokenKind::String);
//! assert_eq!(result.tokens.last().unwrap().kind, TokenKind::EndOfInput);
//! ```
//!
//! ## Collect all errors at once
//!
//! ```
//! use jsonc_rs::{LexErrorKind, scan};
//!
//! let result = scan("@true#");
//! assert_eq!(result.errors.len(), 2);
//! assert_eq!(result.errors[0].kind, LexErrorKind::UnexpectedCharacter('@'));
//! assert_eq!(result.errors[1].to_string(), "Error at line 1: Unexpected character: #");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod scanner;
pub mod token;

pub use scanner::{LexError, LexErrorKind, Scan, scan, scan_bytes};
pub use token::{Literal, Token, TokenKind};

/// Every lexical error collected from a failed scan.
///
/// Displays as the first error plus a count of the remaining ones.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("scanning failed: {first}{}", remainder(.rest.len()))]
pub struct Error {
    first: LexError,
    rest: Vec<LexError>,
}

impl Error {
    /// Build from collected errors; `None` when there are none.
    pub(crate) fn from_errors(errors: Vec<LexError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let first = errors.next()?;
        Some(Self {
            first,
            rest: errors.collect(),
        })
    }

    /// The first error, in discovery order.
    #[must_use]
    pub const fn first(&self) -> &LexError {
        &self.first
    }

    /// All errors, in discovery order.
    pub fn errors(&self) -> impl Iterator<Item = &LexError> {
        std::iter::once(&self.first).chain(&self.rest)
    }

    /// Number of collected errors (at least one).
    #[must_use]
    pub fn count(&self) -> usize {
        self.rest.len() + 1
    }

    /// Consume into all errors, in discovery order.
    #[must_use]
    pub fn into_errors(self) -> Vec<LexError> {
        let mut errors = Vec::with_capacity(self.count());
        errors.push(self.first);
        errors.extend(self.rest);
        errors
    }
}

fn remainder(more: usize) -> String {
    match more {
        0 => String::new(),
        1 => " (and 1 more error)".to_string(),
        n => format!(" (and {n} more errors)"),
    }
}

/// Scan a source string, succeeding only if no lexical error was found.
///
/// Use [`scan`] to get the tokens recognised around the errors as well.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    scan(input).into_result()
}
