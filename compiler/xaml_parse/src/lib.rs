//! Recursive descent parser for xaml.
//!
//! Consumes the lexer's flat [`TokenList`] and produces a [`Program`]: the
//! document skeleton with attribute order already canonical, comment lines
//! grouped into blocks, filter bodies turned into raw blocks, and `-` lines
//! parsed into bindings and loops for the evaluator.

mod cursor;
mod grammar;

pub use cursor::Cursor;

use tracing::debug;
use xaml_diagnostic::{Result, XamlError};
use xaml_ir::{DocType, MetaDecl, Ml, Program, TokenList};

use grammar::Level;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// The `!!!` declaration, once seen.
    meta: Option<MetaDecl>,
    /// Set by the first node that is not a blank line.
    content_seen: bool,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            meta: None,
            content_seen: false,
        }
    }

    /// Parse the whole token list.
    ///
    /// `doc_type` is the caller's override: a matching type keeps a
    /// declared doctype, a conflicting one replaces it with an undeclared
    /// default.
    pub fn parse_program(mut self, doc_type: Option<DocType>) -> Result<Program> {
        let nodes = self.block(Level::Children)?;
        if let Some(token) = self.cursor.peek() {
            return Err(XamlError::parse(
                format!("unexpected {} after the end of the document", token.kind.name()),
                token.location,
            ));
        }
        let ml = match self.meta {
            Some(decl) => Ml::declared(decl.doc_type, decl.version, decl.encoding)
                .with_override(doc_type),
            None => Ml::implicit(doc_type.unwrap_or_default()),
        };
        debug!(
            doc_type = %ml.doc_type,
            declared = ml.declared,
            nodes = nodes.len(),
            "parsed program"
        );
        Ok(Program::new(ml, nodes))
    }
}

/// Parse a token list into a program.
pub fn parse(tokens: &TokenList, doc_type: Option<DocType>) -> Result<Program> {
    Parser::new(tokens).parse_program(doc_type)
}

#[cfg(test)]
mod tests;
