//! Document model and serializer for xaml.
//!
//! The evaluator builds a [`Document`]; [`Document::string`] and
//! [`Document::bytes`] write it out as XML or HTML.
//!
//! # Modules
//!
//! - [`document`]: the resolved node tree
//! - [`emitter`]: output sink used by the serializer
//! - [`escape`]: entity escaping for text and attribute values
//! - [`html5`]: void and raw-text element classes, `head` injection
//! - `layout`: blank line normalisation applied when a document is built
//! - `serialize`: the line writer

pub mod document;
pub mod emitter;
pub mod escape;
pub mod html5;
mod layout;
mod serialize;

pub use document::{Content, Document, Element, Raw, Text};
pub use emitter::{Emitter, StringEmitter, INDENT_WIDTH};
pub use html5::{is_raw_text_element, is_void_element};
