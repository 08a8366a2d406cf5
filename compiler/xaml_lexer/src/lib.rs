//! Lexer for xaml.
//!
//! Turns a decoded [`SourceStream`] into a flat [`TokenList`]. The notation is
//! line oriented: each line's leading sigil decides what it is, and changes
//! in leading whitespace become `INDENT`/`DEDENT` tokens.
//!
//! # Token stream shape
//!
//! - Blank lines are held back until the next content line's indentation has
//!   been processed, so a `BLANK_LINE` always belongs to the outer level.
//! - `script`/`style` bodies and `:filter` blocks are captured verbatim and
//!   never lexed.
//! - The stream always ends with one `DEDENT` per open level, any trailing
//!   blank lines, and a final sentinel `DEDENT`.

mod attrs;
mod capture;
mod indent;
mod lexer;
mod line_kind;
mod meta;

use xaml_diagnostic::Result;
use xaml_ir::{DocType, TokenList};
use xaml_lexer_core::SourceStream;

use crate::lexer::Lexer;

/// Lex a source stream.
///
/// `doc_type` is the caller's output type override. It decides whether
/// HTML-only notation such as `.class` lines is accepted before any `!!!`
/// declaration is seen.
pub fn lex(stream: SourceStream, doc_type: Option<DocType>) -> Result<TokenList> {
    Lexer::new(stream, doc_type).run()
}

/// Lex already-decoded text.
pub fn lex_str(text: &str, doc_type: Option<DocType>) -> Result<TokenList> {
    lex(SourceStream::from_text(text)?, doc_type)
}
