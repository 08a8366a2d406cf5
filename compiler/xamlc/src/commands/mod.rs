//! Command handlers for the `xaml` CLI.
//!
//! Each submodule implements one command. Reading the source file and
//! reporting a compile error live here since every command needs them.

use std::io::IsTerminal;

use xaml_diagnostic::emitter::{ColorMode, TerminalEmitter};
use xamlc::XamlError;

mod compile;
mod debug;
mod explain;

pub use compile::{compile_file, parse_compile_options};
pub use debug::{code_file, tokens_file};
pub use explain::explain_error;

/// Read a source file as raw bytes, exiting with a message on failure.
///
/// Decoding is left to the compiler so `!!! coding` pragmas are honoured.
pub(crate) fn read_source(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Print `error` with the offending source line, then exit.
pub(crate) fn report_and_exit(error: &XamlError, source: &[u8], path: &str) -> ! {
    let text = String::from_utf8_lossy(source);
    let stderr = std::io::stderr();
    let is_tty = stderr.is_terminal();
    let mut emitter = TerminalEmitter::<std::io::Stderr>::stderr(ColorMode::Auto, is_tty);
    emitter.emit(error, Some(&text), Some(path));
    emitter.flush();
    std::process::exit(1);
}
