//! Doctype descriptors.

use std::fmt;

/// Document kind: what markup language is produced.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum DocType {
    #[default]
    Xml,
    Html,
}

impl DocType {
    /// Name used for output file extensions (`xml`, `html`).
    pub const fn name(self) -> &'static str {
        match self {
            DocType::Xml => "xml",
            DocType::Html => "html",
        }
    }

    /// Version used when a document of this type does not name one.
    pub const fn default_version(self) -> &'static str {
        match self {
            DocType::Xml => "1.0",
            DocType::Html => "5",
        }
    }

    /// Parse a caller-supplied type name (`xml` or `html`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "xml" => Some(DocType::Xml),
            "html" => Some(DocType::Html),
            _ => None,
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The HTML flavours with distinct doctype preambles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HtmlVersion {
    Html5,
    Html4Strict,
    Html4Transitional,
}

impl HtmlVersion {
    /// Version string stored in [`Ml::version`].
    pub const fn as_str(self) -> &'static str {
        match self {
            HtmlVersion::Html5 => "5",
            HtmlVersion::Html4Strict => "4-strict",
            HtmlVersion::Html4Transitional => "4-transitional",
        }
    }

    /// Parse a stored version string. `4` is shorthand for strict.
    pub fn parse(version: &str) -> Option<Self> {
        match version {
            "" | "5" => Some(HtmlVersion::Html5),
            "4" | "4-strict" => Some(HtmlVersion::Html4Strict),
            "4-transitional" => Some(HtmlVersion::Html4Transitional),
            _ => None,
        }
    }
}

/// Resolved doctype descriptor for a document.
///
/// `declared` is `true` only when the source carried a `!!!` doctype line
/// that the caller did not override with a different type; the serializer
/// emits a preamble only for declared documents.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ml {
    pub doc_type: DocType,
    pub version: String,
    pub encoding: String,
    pub declared: bool,
}

impl Ml {
    /// Encoding label used when none is declared.
    pub const DEFAULT_ENCODING: &'static str = "utf-8";

    /// Undeclared descriptor with default version and encoding.
    pub fn implicit(doc_type: DocType) -> Self {
        Ml {
            doc_type,
            version: doc_type.default_version().to_owned(),
            encoding: Self::DEFAULT_ENCODING.to_owned(),
            declared: false,
        }
    }

    /// Descriptor for an explicit `!!!` declaration.
    pub fn declared(doc_type: DocType, version: impl Into<String>, encoding: Option<String>) -> Self {
        Ml {
            doc_type,
            version: version.into(),
            encoding: encoding.unwrap_or_else(|| Self::DEFAULT_ENCODING.to_owned()),
            declared: true,
        }
    }

    /// Apply a caller override: a matching type keeps the declaration,
    /// a conflicting one replaces it with an undeclared default.
    #[must_use]
    pub fn with_override(self, doc_type: Option<DocType>) -> Self {
        match doc_type {
            Some(requested) if requested != self.doc_type => Ml::implicit(requested),
            _ => self,
        }
    }

    pub fn is_html(&self) -> bool {
        self.doc_type == DocType::Html
    }

    /// HTML flavour, or `None` for XML documents.
    pub fn html_version(&self) -> Option<HtmlVersion> {
        if self.is_html() {
            HtmlVersion::parse(&self.version)
        } else {
            None
        }
    }
}

impl Default for Ml {
    fn default() -> Self {
        Ml::implicit(DocType::Xml)
    }
}
