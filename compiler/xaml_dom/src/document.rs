//! The evaluated document tree.
//!
//! A [`Document`] holds only resolved values: every binding, loop and
//! reference of the program has been replaced by plain strings and nodes.
//! It is immutable once built.

use encoding_rs::Encoding;
use tracing::debug;
use xaml_diagnostic::{Result, XamlError};
use xaml_ir::{FilterKind, HtmlVersion, Location, Ml};
use xaml_lexer_core::pragma;

use crate::html5;
use crate::layout;
use crate::serialize::{self, Preamble};

/// One node of the document tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Element(Element),
    Text(Text),
    /// A `//` comment block, one entry per line.
    Comment(Vec<String>),
    Raw(Raw),
    Blank,
}

impl Content {
    pub fn is_blank(&self) -> bool {
        matches!(self, Content::Blank)
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Content::Element(element) => Some(element),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Content>,
    pub location: Location,
}

impl Element {
    /// An element with no attributes, text or children.
    pub fn new(tag: impl Into<String>, location: Location) -> Self {
        Element {
            tag: tag.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
            location,
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` when there is neither text nor a non-blank child.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.iter().all(Content::is_blank)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    /// May span several lines; each is indented on output.
    pub value: String,
    pub escape: bool,
    /// Extra nesting levels.
    pub indent: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raw {
    pub kind: FilterKind,
    pub lines: Vec<String>,
}

/// An evaluated document, ready to serialize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    ml: Ml,
    nodes: Vec<Content>,
}

impl Document {
    /// Build a document. HTML5 documents rooted at `html` get their `head`
    /// and charset `meta` put in place, and blank lines are laid out.
    pub fn new(ml: Ml, mut nodes: Vec<Content>) -> Self {
        if ml.html_version() == Some(HtmlVersion::Html5) {
            html5::ensure_head(&mut nodes, &ml.encoding);
        }
        layout::arrange_document(&mut nodes);
        Document { ml, nodes }
    }

    pub fn ml(&self) -> &Ml {
        &self.ml
    }

    pub fn nodes(&self) -> &[Content] {
        &self.nodes
    }

    /// Serialize to text. The XML preamble carries no encoding.
    pub fn string(&self) -> Result<String> {
        serialize::render(self, Preamble::Text)
    }

    /// Serialize and encode with the document's encoding. The XML preamble
    /// names that encoding.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        let text = serialize::render(self, Preamble::Bytes)?;
        let encoding = self.encoding()?;
        let (bytes, used, replaced) = encoding.encode(&text);
        if replaced {
            debug!(
                encoding = used.name(),
                "unmappable characters written as character references"
            );
        }
        Ok(bytes.into_owned())
    }

    fn encoding(&self) -> Result<&'static Encoding> {
        pragma::resolve_label(&self.ml.encoding).ok_or_else(|| {
            XamlError::malformed_pragma(
                format!("unknown encoding `{}`", self.ml.encoding),
                Location::GENERATED,
            )
        })
    }
}
