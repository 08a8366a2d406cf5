//! Statement and expression mini-language.
//!
//! Grammar:
//!
//! ```text
//! statement  = binding | for_header .
//! binding    = identifier "=" expr .
//! for_header = "for" identifier "in" expr ":" .
//! expr       = path | string | int | float .
//! path       = identifier { "." identifier } .
//! string     = "'" { any } "'" | '"' { any } '"' .
//! ```
//!
//! Nothing else is representable; any other `-` line is rejected.

use xaml_diagnostic::{Result, XamlError};
use xaml_ir::{Expr, Location};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Statement {
    Bind { name: String, expr: Expr },
    For { var: String, source: Expr },
}

pub(crate) fn parse_statement(code: &str, location: Location) -> Result<Statement> {
    let code = code.trim();
    if let Some(header) = for_header(code) {
        let Some(header) = header.strip_suffix(':') else {
            return Err(XamlError::parse(
                "`for` header must end with `:`",
                location,
            ));
        };
        let Some((var, source)) = header.split_once(" in ") else {
            return Err(XamlError::parse(
                "`for` header must have the form `for <name> in <expr>:`",
                location,
            ));
        };
        let var = identifier(var.trim(), location)?;
        let source = parse_expr(source, location)?;
        return Ok(Statement::For { var, source });
    }
    if let Some((name, expr)) = code.split_once('=') {
        let name = identifier(name.trim(), location)?;
        let expr = parse_expr(expr, location)?;
        return Ok(Statement::Bind { name, expr });
    }
    Err(XamlError::parse(
        format!("unsupported statement `{code}`"),
        location,
    ))
}

/// The text after `for` when `code` is a loop header.
fn for_header(code: &str) -> Option<&str> {
    let rest = code.strip_prefix("for")?;
    rest.starts_with(char::is_whitespace).then(|| rest.trim_start())
}

pub(crate) fn parse_expr(text: &str, location: Location) -> Result<Expr> {
    let text = text.trim();
    if text.is_empty() {
        return Err(XamlError::parse("missing expression", location));
    }
    if let Some(value) = quoted(text) {
        return Ok(Expr::Str(value.to_owned()));
    }
    if is_number(text) {
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Expr::Int(n));
        }
        if let Ok(x) = text.parse::<f64>() {
            return Ok(Expr::Float(x));
        }
    }
    let mut parts = text.split('.');
    let root = parts.next().unwrap_or_default();
    if is_identifier(root) {
        let segments: Vec<String> = parts.map(str::to_owned).collect();
        if segments.iter().all(|s| is_identifier(s)) {
            return Ok(Expr::Path {
                root: root.to_owned(),
                segments,
            });
        }
    }
    Err(XamlError::parse(
        format!("invalid expression `{text}`"),
        location,
    ))
}

fn quoted(text: &str) -> Option<&str> {
    let quote = text.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    let inner = text[1..].strip_suffix(quote)?;
    (!inner.contains(quote)).then_some(inner)
}

fn is_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    digits.starts_with(|c: char| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn identifier(text: &str, location: Location) -> Result<String> {
    if is_identifier(text) {
        Ok(text.to_owned())
    } else {
        Err(XamlError::parse(
            format!("`{text}` is not a valid name"),
            location,
        ))
    }
}

pub(crate) fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}
