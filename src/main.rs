//! CLI tool to scan JSON-like documents and report lexical errors.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use jsonc_rs::Scan;

fn usage() -> ExitCode {
    eprintln!("Usage: jsonc [command] [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  check   Scan input(s) and report lexical errors (default)");
    eprintln!("  tokens  Scan input(s) and print the token stream");
    eprintln!();
    eprintln!("With no files, or with '-', input is read from stdin.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  jsonc < config.json");
    eprintln!("  jsonc check a.json b.json");
    eprintln!("  jsonc tokens config.json");
    ExitCode::from(2)
}

fn read_input(path: &str) -> io::Result<Vec<u8>> {
    if path == "-" {
        let mut content = Vec::new();
        io::stdin().read_to_end(&mut content)?;
        Ok(content)
    } else {
        fs::read(path)
    }
}

fn print_tokens(result: &Scan) {
    for token in &result.tokens {
        println!("{}\t{}\t{}", token.line, token.kind, token.lexeme);
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        return usage();
    }

    let (command, files) = match args.first().map(String::as_str) {
        Some("check") => ("check", &args[1..]),
        Some("tokens") => ("tokens", &args[1..]),
        _ => ("check", &args[..]),
    };

    let stdin = ["-".to_string()];
    let inputs = if files.is_empty() { &stdin[..] } else { files };
    let labelled = inputs.len() > 1;

    let mut had_error = false;

    for path in inputs {
        let content = match read_input(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        let result = jsonc_rs::scan_bytes(&content);

        if command == "tokens" {
            print_tokens(&result);
        }

        for err in &result.errors {
            if labelled {
                eprintln!("{path}: {err}");
            } else {
                eprintln!("{err}");
            }
        }

        if !result.is_ok() {
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
