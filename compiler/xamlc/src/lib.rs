//! xaml Compiler
//!
//! Entry points tying the phases together:
//!
//! ```text
//! source (text or bytes)
//!     │
//!     ▼
//! tokenize() ──► TokenList
//!     │
//!     ▼
//! compile() ──► Program          (reusable, never mutated)
//!     │
//!     ▼
//! evaluate(args) ──► Document
//!     │
//!     ▼
//! Document::string() / Document::bytes()
//! ```

use std::sync::Once;

use tracing::debug;
use xaml_lexer_core::SourceStream;

pub use xaml_diagnostic::{ErrorCode, Result, XamlError};
pub use xaml_dom::{Content, Document};
pub use xaml_eval::{evaluate, Args, Value};
pub use xaml_ir::{DocType, HtmlVersion, Ml, Program, Token, TokenKind, TokenList};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=xaml_lexer=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Source handed to the compiler: decoded text or raw bytes.
///
/// Bytes are decoded with the encoding named by a `!!! coding` pragma, or
/// with [`CompileOptions::default_encoding`] when there is none.
#[derive(Copy, Clone, Debug)]
pub enum Source<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Source::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Source<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Source::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Source<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Source::Bytes(bytes)
    }
}

/// Caller configuration for one compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Output type override. A type matching the source's `!!!` declaration
    /// keeps it; a conflicting one drops it.
    pub doc_type: Option<DocType>,
    /// Encoding for byte sources without a `!!! coding` pragma.
    pub default_encoding: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            doc_type: None,
            default_encoding: Ml::DEFAULT_ENCODING.to_owned(),
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_doc_type(mut self, doc_type: DocType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    #[must_use]
    pub fn with_default_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.default_encoding = encoding.into();
        self
    }
}

fn stream(source: Source<'_>, options: &CompileOptions) -> Result<SourceStream> {
    match source {
        Source::Text(text) => SourceStream::from_text(text),
        Source::Bytes(bytes) => SourceStream::from_bytes(bytes, &options.default_encoding),
    }
}

/// Lex `source` into its token list.
pub fn tokenize<'a>(source: impl Into<Source<'a>>, options: &CompileOptions) -> Result<TokenList> {
    xaml_lexer::lex(stream(source.into(), options)?, options.doc_type)
}

/// Lex and parse `source` into a [`Program`].
pub fn compile<'a>(source: impl Into<Source<'a>>, options: &CompileOptions) -> Result<Program> {
    let tokens = tokenize(source, options)?;
    let program = xaml_parse::parse(&tokens, options.doc_type)?;
    debug!(
        tokens = tokens.len(),
        doc_type = %program.ml.doc_type,
        "compiled"
    );
    Ok(program)
}

/// Compile and evaluate in one step.
pub fn render<'a>(
    source: impl Into<Source<'a>>,
    options: &CompileOptions,
    args: &Args,
) -> Result<Document> {
    evaluate(&compile(source, options)?, args)
}
