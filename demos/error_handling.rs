//! Demonstrate error collection for malformed input.

fn main() {
    // Several independent problems: all of them are reported.
    let input = "{\n\t\"port\": -,\n\t\"debug\": yes,\n\t\"name\": @\"svc\"\n}\n";
    let result = jsonc_rs::scan(input);

    println!("{} token(s), {} error(s)", result.tokens.len(), result.errors.len());
    for err in &result.errors {
        println!("{err}");
        println!("  Kind: {:?}", err.kind);
    }

    println!();

    // Unterminated string: the rest of the input is swallowed.
    match jsonc_rs::tokenize("[1, \"open, 2, 3]") {
        Ok(tokens) => println!("Scanned {} tokens (unexpected)", tokens.len()),
        Err(e) => {
            println!("{e}");
            for err in e.errors() {
                println!("  line {}: {}", err.line, err.kind);
            }
        }
    }
}
