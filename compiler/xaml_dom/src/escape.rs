//! Entity escaping.

use std::borrow::Cow;

/// Escape text content: `&`, `<` and `>`.
pub fn text(value: &str) -> Cow<'_, str> {
    escape(value, false)
}

/// Escape an attribute value: `&`, `<`, `>` and `"`.
pub fn attr(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

fn escape(value: &str, quote: bool) -> Cow<'_, str> {
    let needs = |c: char| matches!(c, '&' | '<' | '>') || (quote && c == '"');
    if !value.contains(needs) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quote => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
