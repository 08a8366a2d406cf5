//! Debug commands: `tokens` and `code` for inspecting compiler internals.

use xamlc::{compile, tokenize, CompileOptions};

use super::{read_source, report_and_exit};

/// Lex a file and display the token stream.
pub fn tokens_file(path: &str) {
    let source = read_source(path);
    match tokenize(&source, &CompileOptions::default()) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            print!("{tokens}");
        }
        Err(e) => report_and_exit(&e, &source, path),
    }
}

/// Parse a file and display the program it compiles to.
pub fn code_file(path: &str) {
    let source = read_source(path);
    match compile(&source, &CompileOptions::default()) {
        Ok(program) => print!("{program}"),
        Err(e) => report_and_exit(&e, &source, path),
    }
}
