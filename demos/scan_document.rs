//! Scan a document and print its token stream.

use jsonc_rs::{Literal, scan};

fn main() {
    let input = "{\n\t\"name\": \"demo\",\n\t\"ratio\": -0.75,\n\t\"tags\": [\"a\", \"b\"],\n\t\"enabled\": true,\n\t\"parent\": null\n}\n";

    let result = scan(input);
    for token in &result.tokens {
        let literal = match &token.literal {
            Some(Literal::String(s)) => format!("string {s:?}"),
            Some(Literal::Number(n)) => format!("number {n}"),
            Some(Literal::Bool(b)) => format!("boolean {b}"),
            None => String::new(),
        };
        println!("{:>3}  {:<14} {:<10} {literal}", token.line, token.kind, token.lexeme);
    }

    assert!(result.is_ok());
}
