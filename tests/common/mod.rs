#![allow(dead_code)]

use jsonc_rs::{Scan, Token, TokenKind, scan};

/// Scan input that must contain no lexical errors.
pub fn scan_clean(input: &str) -> Vec<Token> {
    let result = scan(input);
    assert!(
        result.is_ok(),
        "unexpected lex errors: {:?}\n--- input ---\n{input}",
        result.errors
    );
    result.tokens
}

/// Helper: scan and compare the token kind sequence, `EndOfInput` included.
pub fn assert_kinds(input: &str, expected: &[TokenKind]) {
    let result = scan(input);
    assert_eq!(
        result.kinds(),
        expected,
        "kind mismatch\n--- input ---\n{input}\n--- errors ---\n{:?}",
        result.errors
    );
}

/// Tokens other than the trailing `EndOfInput`.
pub fn content_tokens(result: &Scan) -> &[Token] {
    match result.tokens.split_last() {
        Some((last, rest)) if last.kind == TokenKind::EndOfInput => rest,
        _ => &result.tokens,
    }
}
