//! Encoding pragma detection.
//!
//! The first two source lines may carry `!!! coding: <name>` (or
//! `!!! coding = <name>`). The pragma is ASCII, so it is recognised on the
//! raw bytes before any decoding happens.

use encoding_rs::Encoding;
use xaml_diagnostic::{Result, XamlError};
use xaml_ir::Location;

/// Number of leading lines inspected for a pragma.
const PRAGMA_LINES: usize = 2;

/// A detected `!!! coding` pragma.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pragma {
    /// 1-based line the pragma was written on.
    pub line: u32,
    /// The label as written.
    pub label: String,
    pub encoding: &'static Encoding,
}

/// Resolve an encoding label (`cp1252`, `latin-1`, `utf_8`, ...).
///
/// Tries the WHATWG label table first, then again with `-` and `_` removed.
pub fn resolve_label(label: &str) -> Option<&'static Encoding> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    Encoding::for_label(label.as_bytes()).or_else(|| {
        let squashed: String = label.chars().filter(|c| !matches!(c, '-' | '_')).collect();
        Encoding::for_label(squashed.as_bytes())
    })
}

/// Scan the first two lines of `source` for an encoding pragma.
pub fn detect(source: &[u8]) -> Result<Option<Pragma>> {
    for (index, raw) in source.split(|b| *b == b'\n').take(PRAGMA_LINES).enumerate() {
        let line = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let text = String::from_utf8_lossy(raw);
        if let Some(pragma) = parse_line(&text, line)? {
            return Ok(Some(pragma));
        }
    }
    Ok(None)
}

fn parse_line(text: &str, line: u32) -> Result<Option<Pragma>> {
    let Some(rest) = text.trim().strip_prefix("!!!") else {
        return Ok(None);
    };
    let Some(after) = rest.trim_start().strip_prefix("coding") else {
        return Ok(None);
    };
    let after = after.trim_start();
    let location = Location::line_start(line);
    let label = if let Some(label) = after.strip_prefix([':', '=']) {
        label.trim()
    } else if after.is_empty() {
        ""
    } else {
        // `!!! codingsomething` is not a pragma
        return Ok(None);
    };
    if label.is_empty() {
        return Err(XamlError::malformed_pragma(
            "encoding pragma names no encoding",
            location,
        ));
    }
    let encoding = resolve_label(label).ok_or_else(|| {
        XamlError::malformed_pragma(format!("unknown encoding `{label}`"), location)
    })?;
    Ok(Some(Pragma {
        line,
        label: label.to_owned(),
        encoding,
    }))
}
