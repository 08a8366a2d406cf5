//! Source access for the xaml lexer.
//!
//! - [`SourceStream`]: decoded characters with an unbounded pushback stack
//! - [`pragma`]: `!!! coding: <name>` detection and encoding label lookup
//!
//! Nothing here knows about tokens; the lexer crate builds on these reads.

pub mod pragma;
mod source_stream;

pub use pragma::Pragma;
pub use source_stream::SourceStream;
