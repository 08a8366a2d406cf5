//! Grammar productions.
//!
//! A block is the run of tokens between an `INDENT` and its matching
//! `DEDENT` (or, at the root, up to the sentinel `DEDENT`). What an `INDENT`
//! opens depends on the node before it:
//!
//! - element: its children,
//! - text, comment or raw block: further text, one level deeper,
//! - `for` header: the loop body.
//!
//! Anything else before an `INDENT` is an error.

mod attr;
mod stmt;

use tracing::trace;
use xaml_diagnostic::{Result, XamlError};
use xaml_ir::{
    AttrOrigin, AttrValue, Binding, ElementNode, Location, Loop, Node, RawBlock, TextNode,
    TextValue, Token, TokenKind,
};

use crate::Parser;
use attr::RawAttr;
use stmt::Statement;

/// What a block may contain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Level {
    /// Element children, loop bodies and the document root.
    Children,
    /// Text nested under text, `n` levels deep.
    Text(u32),
}

impl Parser<'_> {
    /// Parse nodes up to and including the closing `DEDENT`.
    pub(crate) fn block(&mut self, level: Level) -> Result<Vec<Node>> {
        let mut nodes: Vec<Node> = Vec::new();
        while let Some(token) = self.cursor.advance() {
            match &token.kind {
                TokenKind::Dedent => return Ok(nodes),
                TokenKind::Indent => self.nested(&mut nodes, level, token.location)?,
                TokenKind::BlankLine => nodes.push(Node::Blank),
                TokenKind::Comment(line) => {
                    self.content_seen = true;
                    match nodes.last_mut() {
                        Some(Node::CommentBlock { lines }) => lines.push(line.clone()),
                        _ => nodes.push(Node::CommentBlock {
                            lines: vec![line.clone()],
                        }),
                    }
                }
                TokenKind::StrData(_) | TokenKind::CodeData(_) => {
                    self.content_seen = true;
                    let indent = match level {
                        Level::Children => 0,
                        Level::Text(depth) => depth,
                    };
                    nodes.push(Node::Text(text_node(token, indent)?));
                }
                TokenKind::Meta(decl) => {
                    if self.meta.is_some() {
                        return Err(XamlError::parse(
                            "duplicate doctype declaration",
                            token.location,
                        ));
                    }
                    if self.content_seen {
                        return Err(XamlError::parse(
                            "doctype declaration must come before any content",
                            token.location,
                        ));
                    }
                    self.meta = Some(decl.clone());
                }
                _ if matches!(level, Level::Text(_)) => {
                    return Err(XamlError::parse(
                        format!(
                            "{} cannot be nested under text",
                            token.kind.name().to_ascii_lowercase()
                        ),
                        token.location,
                    ));
                }
                TokenKind::Element(_) => {
                    self.content_seen = true;
                    let element = self.element(token)?;
                    nodes.push(Node::Element(element));
                }
                TokenKind::Filter { kind, lines } => {
                    self.content_seen = true;
                    nodes.push(Node::RawBlock(RawBlock {
                        kind: *kind,
                        lines: lines.clone(),
                        location: token.location,
                    }));
                }
                TokenKind::Python(code) => {
                    self.content_seen = true;
                    nodes.push(self.statement(code, token.location)?);
                }
                TokenKind::StrAttr { .. } | TokenKind::CodeAttr { .. } => {
                    return Err(XamlError::parse(
                        "attribute outside an element head",
                        token.location,
                    ));
                }
            }
        }
        Ok(nodes)
    }

    /// Attach the block opened by an `INDENT` to the preceding node.
    fn nested(&mut self, nodes: &mut Vec<Node>, level: Level, location: Location) -> Result<()> {
        let depth = match level {
            Level::Children => 0,
            Level::Text(depth) => depth,
        };
        match nodes.last() {
            Some(Node::Element(_)) => {
                let children = self.block(Level::Children)?;
                if let Some(Node::Element(element)) = nodes.last_mut() {
                    trace!(tag = %element.tag, children = children.len(), "children");
                    element.children = children;
                }
            }
            Some(Node::Text(_) | Node::CommentBlock { .. } | Node::RawBlock(_)) => {
                let nested = self.block(Level::Text(depth + 1))?;
                nodes.extend(nested);
            }
            Some(Node::Binding(_)) => {
                return Err(XamlError::parse(
                    "unexpected indentation after a binding",
                    location,
                ));
            }
            Some(Node::Loop(_)) => {
                return Err(XamlError::parse(
                    "unexpected indentation after a loop body",
                    location,
                ));
            }
            None | Some(Node::Blank) => {
                if !self.at_document_start(nodes) {
                    return Err(XamlError::parse("unexpected indentation", location));
                }
                let nested = self.block(level)?;
                nodes.extend(nested);
            }
        }
        Ok(())
    }

    /// An indented document start is tolerated: nothing but blank lines and
    /// a doctype came before it.
    fn at_document_start(&self, nodes: &[Node]) -> bool {
        !self.content_seen && nodes.iter().all(Node::is_blank)
    }

    fn element(&mut self, head: &Token) -> Result<ElementNode> {
        let TokenKind::Element(tag) = &head.kind else {
            return Err(XamlError::parse("expected an element", head.location));
        };
        validate_tag(tag, head.location)?;

        let mut raw = Vec::new();
        let mut last_line = head.location.line;
        while let Some(token) = self
            .cursor
            .eat_if(|k| matches!(k, TokenKind::StrAttr { .. } | TokenKind::CodeAttr { .. }))
        {
            last_line = token.location.line;
            raw.push(raw_attr(token)?);
        }
        let attrs = attr::canonicalize(raw)?;

        let text = match self.cursor.peek() {
            Some(token)
                if token.location.line == last_line
                    && matches!(token.kind, TokenKind::StrData(_) | TokenKind::CodeData(_)) =>
            {
                self.cursor.advance();
                Some(data_value(token)?)
            }
            _ => None,
        };

        Ok(ElementNode {
            tag: tag.clone(),
            attrs,
            text,
            children: Vec::new(),
            location: head.location,
        })
    }

    fn statement(&mut self, code: &str, location: Location) -> Result<Node> {
        match stmt::parse_statement(code, location)? {
            Statement::Bind { name, expr } => Ok(Node::Binding(Binding {
                name,
                expr,
                location,
            })),
            Statement::For { var, source } => {
                if self.cursor.eat_if(|k| *k == TokenKind::Indent).is_none() {
                    return Err(XamlError::parse("loop header without a body", location));
                }
                let body = self.block(Level::Children)?;
                if body.iter().all(Node::is_blank) {
                    return Err(XamlError::parse("loop header without a body", location));
                }
                Ok(Node::Loop(Loop {
                    var,
                    source,
                    body,
                    location,
                }))
            }
        }
    }
}

fn validate_tag(tag: &str, location: Location) -> Result<()> {
    let valid = tag.chars().next().is_some_and(char::is_alphabetic)
        && tag
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'));
    if valid {
        Ok(())
    } else {
        Err(XamlError::parse(format!("invalid tag name `{tag}`"), location))
    }
}

fn raw_attr(token: &Token) -> Result<RawAttr> {
    let (name, value, origin) = match &token.kind {
        TokenKind::StrAttr {
            name,
            value,
            origin,
        } => (name.clone(), AttrValue::Literal(value.clone()), *origin),
        TokenKind::CodeAttr { name, expr } => (
            name.clone(),
            AttrValue::Ref(stmt::parse_expr(expr, token.location)?),
            AttrOrigin::Explicit,
        ),
        _ => return Err(XamlError::parse("expected an attribute", token.location)),
    };
    Ok(RawAttr {
        name,
        value,
        origin,
        location: token.location,
    })
}

fn data_value(token: &Token) -> Result<TextValue> {
    match &token.kind {
        TokenKind::StrData(text) => Ok(AttrValue::Literal(text.clone())),
        TokenKind::CodeData(expr) => Ok(AttrValue::Ref(stmt::parse_expr(expr, token.location)?)),
        _ => Err(XamlError::parse("expected text", token.location)),
    }
}

fn text_node(token: &Token, indent: u32) -> Result<TextNode> {
    Ok(TextNode {
        value: data_value(token)?,
        escape: token.escape,
        indent,
        location: token.location,
    })
}
