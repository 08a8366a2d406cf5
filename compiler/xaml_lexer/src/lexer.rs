//! The line-driven lexer.

use tracing::{debug, trace};
use xaml_diagnostic::{Result, XamlError};
use xaml_ir::{
    AttrOrigin, DocType, FilterKind, Location, ShortcutKind, Token, TokenKind, TokenList,
};
use xaml_lexer_core::SourceStream;

use crate::attrs::{self, InlineData};
use crate::capture;
use crate::indent::{IndentChange, IndentStack};
use crate::line_kind::LineKind;
use crate::meta::{self, MetaLine};

/// Tags whose indented body is captured verbatim.
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

pub(crate) struct Lexer {
    stream: SourceStream,
    indents: IndentStack,
    tokens: TokenList,
    /// Blank lines waiting for the next content line's indentation.
    pending_blanks: Vec<Location>,
    doc_type: Option<DocType>,
    html: bool,
    meta_seen: bool,
    content_seen: bool,
}

/// A captured verbatim block.
struct Captured {
    first_line: u32,
    lines: Vec<String>,
}

impl Lexer {
    pub(crate) fn new(stream: SourceStream, doc_type: Option<DocType>) -> Self {
        Lexer {
            stream,
            indents: IndentStack::new(),
            tokens: TokenList::new(),
            pending_blanks: Vec::new(),
            doc_type,
            html: doc_type == Some(DocType::Html),
            meta_seen: false,
            content_seen: false,
        }
    }

    pub(crate) fn run(mut self) -> Result<TokenList> {
        loop {
            let line = self.stream.line();
            let Some(raw) = self.stream.get_line() else {
                break;
            };
            self.line(&raw, line)?;
        }
        self.finish();
        debug!(tokens = self.tokens.len(), "lexed source");
        Ok(self.tokens)
    }

    fn line(&mut self, raw: &str, line: u32) -> Result<()> {
        let text = raw.trim_end_matches(['\n', '\r']);
        if capture::is_blank(text) {
            self.pending_blanks.push(Location::line_start(line));
            return Ok(());
        }
        let content = text.trim_start_matches([' ', '\t']).trim_end();
        let leading = &text[..text.len() - text.trim_start_matches([' ', '\t']).len()];
        let width = leading.chars().count();
        let location = Location::new(line, 1).offset(width);
        let kind = LineKind::classify(content);
        trace!(line, ?kind, "line");

        let meta = if kind == LineKind::Meta {
            let pragma_line = self.stream.pragma().is_some_and(|p| p.line == line);
            match meta::parse(&content[3..], location, pragma_line)? {
                MetaLine::Discard => return Ok(()),
                MetaLine::Doctype(decl) => Some(decl),
            }
        } else {
            None
        };

        if self.indents.check_unit(leading).is_err() {
            return Err(XamlError::indentation(
                "indentation mixes tabs and spaces",
                Location::line_start(line),
            ));
        }
        self.indent_to(width, location)?;
        self.flush_blanks();

        if let Some(decl) = meta {
            if self.meta_seen {
                return Err(XamlError::parse("duplicate doctype declaration", location));
            }
            if self.content_seen {
                return Err(XamlError::parse(
                    "doctype declaration must come before any content",
                    location,
                ));
            }
            self.meta_seen = true;
            self.html = match self.doc_type {
                Some(requested) => requested == DocType::Html,
                None => decl.doc_type == DocType::Html,
            };
            self.tokens.push(Token::verbatim(TokenKind::Meta(decl), location));
            return Ok(());
        }
        self.content_seen = true;

        match kind {
            LineKind::Element => self.element(content, location, width),
            LineKind::Field => self.shortcut_element(content, location, "field", ShortcutKind::Name),
            LineKind::Div => {
                if !self.html {
                    return Err(XamlError::parse(
                        "`.class` lines are only allowed in HTML documents",
                        location,
                    ));
                }
                self.shortcut_element(content, location, "div", ShortcutKind::Class)
            }
            LineKind::Comment => {
                let text = content[2..].trim().to_owned();
                self.tokens.push(Token::new(TokenKind::Comment(text), location));
                Ok(())
            }
            LineKind::Filter => self.filter(content, location, width),
            LineKind::Statement => {
                let code = nonempty(&content[1..], "empty `-` statement", location)?;
                self.tokens.push(Token::new(TokenKind::Python(code), location));
                Ok(())
            }
            LineKind::CodeData => {
                let expr = nonempty(&content[1..], "missing expression after `=`", location)?;
                self.tokens.push(Token::new(TokenKind::CodeData(expr), location));
                Ok(())
            }
            LineKind::Text => {
                self.tokens.push(Token::new(TokenKind::StrData(content.to_owned()), location));
                Ok(())
            }
            LineKind::Meta => Ok(()),
        }
    }

    fn indent_to(&mut self, width: usize, location: Location) -> Result<()> {
        match self.indents.change(width) {
            Ok(IndentChange::Same) => {}
            Ok(IndentChange::Indent) => self.tokens.push(Token::marker(TokenKind::Indent, location)),
            Ok(IndentChange::Dedent(levels)) => {
                for _ in 0..levels {
                    self.tokens.push(Token::marker(TokenKind::Dedent, location));
                }
            }
            Err(_) => {
                return Err(XamlError::indentation(
                    "dedent does not match any outer indentation level",
                    location,
                ));
            }
        }
        Ok(())
    }

    fn flush_blanks(&mut self) {
        for location in self.pending_blanks.drain(..) {
            self.tokens.push(Token::marker(TokenKind::BlankLine, location));
        }
    }

    fn finish(&mut self) {
        let end = Location::line_start(self.stream.line());
        for _ in 0..self.indents.close() {
            self.tokens.push(Token::marker(TokenKind::Dedent, end));
        }
        self.flush_blanks();
        self.tokens.push(Token::marker(TokenKind::Dedent, end));
    }

    // Element heads

    fn element(&mut self, content: &str, location: Location, width: usize) -> Result<()> {
        let name = head_name(&content[1..]);
        validate_name(name, "tag", location.offset(1))?;
        self.tokens.push(Token::new(TokenKind::Element(name.to_owned()), location));
        let rest = &content[1 + name.len()..];
        let start = location.offset(1 + name.chars().count());
        let inline = self.head(rest, start)?;
        if !inline && RAW_TEXT_TAGS.contains(&name) {
            self.raw_body(width)?;
        }
        Ok(())
    }

    fn shortcut_element(
        &mut self,
        content: &str,
        location: Location,
        tag: &str,
        kind: ShortcutKind,
    ) -> Result<()> {
        let name = head_name(&content[1..]);
        if name.is_empty() {
            return Err(XamlError::parse(
                format!("missing {} after sigil", kind.attr_name()),
                location,
            ));
        }
        self.tokens.push(Token::new(TokenKind::Element(tag.to_owned()), location));
        self.tokens.push(Token::new(
            TokenKind::StrAttr {
                name: kind.attr_name().to_owned(),
                value: name.to_owned(),
                origin: AttrOrigin::Shortcut(kind),
            },
            location,
        ));
        let rest = &content[1 + name.len()..];
        self.head(rest, location.offset(1 + name.chars().count()))?;
        Ok(())
    }

    /// Scan attribute fragments, following `(` onto later lines. Returns
    /// whether inline data was found.
    fn head(&mut self, rest: &str, start: Location) -> Result<bool> {
        let mut in_parens = false;
        let mut text = rest.to_owned();
        let mut start = start;
        loop {
            let mut found = Vec::new();
            let inline = attrs::scan(&text, start, &mut in_parens, &mut found)?;
            for token in found {
                self.tokens.push(token);
            }
            if let Some(inline) = inline {
                self.inline_data(inline)?;
                return Ok(true);
            }
            if !in_parens {
                return Ok(false);
            }
            let line = self.stream.line();
            let Some(next) = self.stream.get_line() else {
                return Err(XamlError::parse("unclosed `(` in attribute list", start));
            };
            text = next.trim_end_matches(['\n', '\r']).to_owned();
            start = Location::line_start(line);
        }
    }

    fn inline_data(&mut self, inline: InlineData) -> Result<()> {
        let head_line = self
            .tokens
            .as_slice()
            .last()
            .map_or(inline.colon.line, |t| t.location.line);
        if head_line != inline.colon.line {
            return Err(XamlError::parse(
                "inline data must share a line with the element or its last attribute",
                inline.colon,
            ));
        }
        let trimmed = inline.text.trim_start();
        let location = inline
            .colon
            .offset(1 + inline.text.chars().count() - trimmed.chars().count());
        let data = trimmed.trim_end();
        if data.is_empty() {
            return Err(XamlError::parse("`:` must be followed by data", inline.colon));
        }
        let kind = match data.strip_prefix('=') {
            Some(expr) => {
                TokenKind::CodeData(nonempty(expr, "missing expression after `=`", location)?)
            }
            None => TokenKind::StrData(data.to_owned()),
        };
        self.tokens.push(Token::new(kind, location));
        Ok(())
    }

    // Verbatim blocks

    fn filter(&mut self, content: &str, location: Location, width: usize) -> Result<()> {
        let name = content[1..].trim();
        let kind = FilterKind::from_name(name)
            .ok_or_else(|| XamlError::parse(format!("unknown filter `{name}`"), location))?;
        let lines = self.capture(width).map(|c| c.lines).unwrap_or_default();
        self.tokens.push(Token::verbatim(TokenKind::Filter { kind, lines }, location));
        Ok(())
    }

    fn raw_body(&mut self, width: usize) -> Result<()> {
        let Some(captured) = self.capture(width) else {
            return Ok(());
        };
        let location = Location::line_start(captured.first_line).offset(width + 1);
        self.tokens.push(Token::marker(TokenKind::Indent, location));
        self.tokens.push(Token::verbatim(
            TokenKind::StrData(captured.lines.join("\n")),
            location,
        ));
        self.tokens.push(Token::marker(TokenKind::Dedent, location));
        Ok(())
    }

    /// Read every following line that is blank or indented deeper than
    /// `width`. Returns `None`, with the lines given back, when the block has
    /// no content. Trailing blank lines of a non-empty block are consumed.
    fn capture(&mut self, width: usize) -> Option<Captured> {
        let mut raw: Vec<(u32, String)> = Vec::new();
        loop {
            let line = self.stream.line();
            let Some(next) = self.stream.peek_line() else {
                break;
            };
            let text = next.trim_end_matches(['\n', '\r']);
            if !capture::is_blank(text) && capture::leading_width(text) <= width {
                break;
            }
            if let Some(taken) = self.stream.get_line() {
                raw.push((line, taken));
            }
        }
        let Some(first_line) = raw
            .iter()
            .find(|(_, text)| !capture::is_blank(text))
            .map(|(line, _)| *line)
        else {
            for (_, blank) in raw.iter().rev() {
                self.stream.push_line(blank);
            }
            return None;
        };
        let texts: Vec<String> = raw
            .into_iter()
            .map(|(_, text)| text.trim_end_matches(['\n', '\r']).to_owned())
            .collect();
        Some(Captured {
            first_line,
            lines: capture::normalize(&texts),
        })
    }
}

/// The name directly after a head sigil, up to whitespace or one of `:(.#$@`.
fn head_name(text: &str) -> &str {
    let end = text
        .find(|c: char| c.is_whitespace() || matches!(c, ':' | '(' | ')' | '.' | '#' | '$' | '@'))
        .unwrap_or(text.len());
    &text[..end]
}

fn validate_name(name: &str, what: &str, location: Location) -> Result<()> {
    let Some(first) = name.chars().next() else {
        return Err(XamlError::parse(format!("missing {what} name"), location));
    };
    if !first.is_alphabetic() {
        return Err(XamlError::parse(
            format!("{what} name `{name}` must start with a letter"),
            location,
        ));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, '_' | '-')))
    {
        return Err(XamlError::parse(
            format!("invalid character `{bad}` in {what} name `{name}`"),
            location,
        ));
    }
    Ok(())
}

fn nonempty(text: &str, message: &str, location: Location) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        Err(XamlError::parse(message, location))
    } else {
        Ok(text.to_owned())
    }
}
