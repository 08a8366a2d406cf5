//! `!!!` lines: doctype declarations and discarded editor/encoding hints.

use xaml_diagnostic::{Result, XamlError};
use xaml_ir::{DocType, HtmlVersion, Location, MetaDecl};
use xaml_lexer_core::pragma;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MetaLine {
    Doctype(MetaDecl),
    /// Produces no token.
    Discard,
}

/// Parse the text after `!!!`.
///
/// `pragma_line` is true when this line is the encoding pragma the source
/// stream already acted on.
pub(crate) fn parse(body: &str, location: Location, pragma_line: bool) -> Result<MetaLine> {
    let body = body.trim();
    if body.starts_with("vim:") {
        return Ok(MetaLine::Discard);
    }
    if is_coding(body) {
        if pragma_line {
            return Ok(MetaLine::Discard);
        }
        return Err(XamlError::parse(
            "encoding pragma must be on the first or second line",
            location,
        ));
    }

    let mut words = body.split_whitespace();
    let Some(kind) = words.next() else {
        return Err(XamlError::parse("empty doctype declaration", location));
    };
    let lower = kind.to_ascii_lowercase();
    let mut rest: Vec<&str> = words.collect();

    let (doc_type, version) = if let Some(version) = lower.strip_prefix("xml") {
        let version = if version.is_empty() {
            match rest.first() {
                Some(word) if word.starts_with(|c: char| c.is_ascii_digit()) => {
                    rest.remove(0).to_owned()
                }
                _ => DocType::Xml.default_version().to_owned(),
            }
        } else {
            version.to_owned()
        };
        if !version.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(XamlError::parse(
                format!("unrecognised doctype `{kind}`"),
                location,
            ));
        }
        (DocType::Xml, version)
    } else if let Some(flavour) = lower.strip_prefix("html") {
        let version = HtmlVersion::parse(flavour).ok_or_else(|| {
            XamlError::parse(format!("unknown HTML version `{kind}`"), location)
        })?;
        (DocType::Html, version.as_str().to_owned())
    } else {
        return Err(XamlError::parse(
            format!("unrecognised doctype `{kind}`"),
            location,
        ));
    };

    let mut encoding = None;
    for word in rest {
        let Some(value) = word.strip_prefix("encoding=") else {
            return Err(XamlError::parse(
                format!("unexpected `{word}` in doctype declaration"),
                location,
            ));
        };
        let label = value.trim_matches(|c| c == '"' || c == '\'');
        if pragma::resolve_label(label).is_none() {
            return Err(XamlError::malformed_pragma(
                format!("unknown encoding `{label}`"),
                location,
            ));
        }
        encoding = Some(label.to_owned());
    }

    Ok(MetaLine::Doctype(MetaDecl {
        doc_type,
        version,
        encoding,
    }))
}

fn is_coding(body: &str) -> bool {
    body.strip_prefix("coding").is_some_and(|after| {
        after.is_empty() || after.starts_with(|c: char| c == ':' || c == '=' || c.is_whitespace())
    })
}
