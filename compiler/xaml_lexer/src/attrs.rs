//! Attribute fragment scanning.
//!
//! Everything after an element head is a run of fragments: shortcut sigils,
//! `key=value` pairs, parentheses for multi-line lists, and an optional `:`
//! that ends the list and starts inline data.

use logos::Logos;
use xaml_diagnostic::{Result, XamlError};
use xaml_ir::{AttrOrigin, Location, ShortcutKind, Token, TokenKind};

/// Raw fragment from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
enum Fragment {
    #[regex(r"@[^\s:()=]+")]
    Name,

    #[regex(r"#[^\s:()=]+")]
    Id,

    #[regex(r"\$[^\s:()=]+")]
    String,

    #[regex(r"\.[^\s:()=.]+")]
    Class,

    #[regex(r"[A-Za-z_][A-Za-z0-9_.:-]*='[^']*'")]
    SingleQuoted,

    #[regex(r#"[A-Za-z_][A-Za-z0-9_.:-]*="[^"]*""#)]
    DoubleQuoted,

    #[regex(r#"[A-Za-z_][A-Za-z0-9_.:-]*=[^\s'"():]+"#)]
    Bare,

    #[token(":")]
    Colon,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

/// Text after an attribute-ending `:`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct InlineData {
    /// Untrimmed remainder of the line.
    pub(crate) text: String,
    /// Location of the `:`.
    pub(crate) colon: Location,
}

/// Scan one physical line of fragments, pushing attribute tokens to `out`.
///
/// `start` is the location of `text`'s first character. `in_parens` carries
/// an open `(` across lines. Returns the inline data when a `:` is found.
pub(crate) fn scan(
    text: &str,
    start: Location,
    in_parens: &mut bool,
    out: &mut Vec<Token>,
) -> Result<Option<InlineData>> {
    let mut lexer = Fragment::lexer(text);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let location = start.offset(text[..span.start].chars().count());
        let Ok(fragment) = result else {
            let bad: String = text[span.start..]
                .chars()
                .take_while(|c| !c.is_whitespace())
                .collect();
            return Err(XamlError::parse(
                format!("malformed attribute `{bad}`"),
                location,
            ));
        };
        match fragment {
            Fragment::Name => out.push(shortcut(ShortcutKind::Name, &slice[1..], location)),
            Fragment::Id => out.push(shortcut(ShortcutKind::Id, &slice[1..], location)),
            Fragment::String => {
                out.push(shortcut(ShortcutKind::String, &slice[1..].replace('_', " "), location));
            }
            Fragment::Class => out.push(shortcut(ShortcutKind::Class, &slice[1..], location)),
            Fragment::SingleQuoted | Fragment::DoubleQuoted => {
                let (name, quoted) = split_pair(slice);
                let value = &quoted[1..quoted.len() - 1];
                out.push(Token::new(
                    TokenKind::StrAttr {
                        name: name.to_owned(),
                        value: value.to_owned(),
                        origin: AttrOrigin::Explicit,
                    },
                    location,
                ));
            }
            Fragment::Bare => {
                let (name, expr) = split_pair(slice);
                out.push(Token::new(
                    TokenKind::CodeAttr {
                        name: name.to_owned(),
                        expr: expr.to_owned(),
                    },
                    location,
                ));
            }
            Fragment::LParen => {
                if *in_parens {
                    return Err(XamlError::parse("nested `(` in attribute list", location));
                }
                *in_parens = true;
            }
            Fragment::RParen => {
                if !*in_parens {
                    return Err(XamlError::parse("unmatched `)` in attribute list", location));
                }
                *in_parens = false;
            }
            Fragment::Colon => {
                if *in_parens {
                    return Err(XamlError::parse(
                        "inline data cannot start inside `( )`",
                        location,
                    ));
                }
                return Ok(Some(InlineData {
                    text: text[span.end..].to_owned(),
                    colon: location,
                }));
            }
        }
    }
    Ok(None)
}

fn shortcut(kind: ShortcutKind, value: &str, location: Location) -> Token {
    Token::new(
        TokenKind::StrAttr {
            name: kind.attr_name().to_owned(),
            value: value.to_owned(),
            origin: AttrOrigin::Shortcut(kind),
        },
        location,
    )
}

/// Split `key=value` at the first `=`. The regexes guarantee one exists.
fn split_pair(slice: &str) -> (&str, &str) {
    slice.split_once('=').unwrap_or((slice, ""))
}
