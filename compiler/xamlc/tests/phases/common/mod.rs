//! Shared helpers for phase tests.

use xamlc::{render, Args, CompileOptions, DocType, Document, XamlError};

/// Join fixture lines with `\n`, no trailing newline.
pub fn lines(list: &[&str]) -> String {
    list.join("\n")
}

pub fn document(source: &str) -> Document {
    render(source, &CompileOptions::default(), &Args::new()).unwrap()
}

/// Render text output with the default options.
pub fn string(source: &str) -> String {
    document(source).string().unwrap()
}

/// Render text output with a caller doc type override.
pub fn string_as(source: &str, doc_type: DocType) -> String {
    let options = CompileOptions::new().with_doc_type(doc_type);
    render(source, &options, &Args::new())
        .unwrap()
        .string()
        .unwrap()
}

/// Render encoded output from a byte source.
pub fn bytes(source: &[u8]) -> Vec<u8> {
    render(source, &CompileOptions::default(), &Args::new())
        .unwrap()
        .bytes()
        .unwrap()
}

/// Render text output with arguments.
pub fn string_with(source: &str, args: &Args) -> String {
    render(source, &CompileOptions::default(), args)
        .unwrap()
        .string()
        .unwrap()
}

/// The error from compiling and evaluating `source`.
pub fn render_err(source: &str) -> XamlError {
    render(source, &CompileOptions::default(), &Args::new()).unwrap_err()
}
