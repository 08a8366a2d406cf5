//! Token types for the xaml lexer.
//!
//! The lexer emits a flat, ordered list of tokens. Structure is carried by
//! `Indent` / `Dedent` markers; every other kind describes one piece of a
//! source line. The list is also the diagnostic "tokens" view, so its
//! `Display` form is stable.

use std::fmt;
use std::ops::Index;

use crate::{DocType, FilterKind, Location};

/// Which attribute shortcut sigil produced an attribute.
///
/// Declaration order is the canonical serialization order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ShortcutKind {
    /// `@name`
    Name,
    /// `#id`
    Id,
    /// `$string`
    String,
    /// `.class`
    Class,
}

impl ShortcutKind {
    /// Attribute name the shortcut expands to.
    pub const fn attr_name(self) -> &'static str {
        match self {
            ShortcutKind::Name => "name",
            ShortcutKind::Id => "id",
            ShortcutKind::String => "string",
            ShortcutKind::Class => "class",
        }
    }
}

/// Where a literal attribute came from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AttrOrigin {
    Shortcut(ShortcutKind),
    Explicit,
}

/// Payload of a `!!!` doctype declaration.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MetaDecl {
    pub doc_type: DocType,
    pub version: String,
    pub encoding: Option<String>,
}

/// Token kinds, payload included.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Element opening: `~tag`, `@name` (tag `field`), `.class` (tag `div`).
    Element(String),
    /// Literal attribute value.
    StrAttr {
        name: String,
        value: String,
        origin: AttrOrigin,
    },
    /// Attribute whose value is an expression: `key=bareword`.
    CodeAttr { name: String, expr: String },
    /// Literal text, inline after `:` or on its own line.
    StrData(String),
    /// Text taken from an expression: `: =expr` or a `=expr` line.
    CodeData(String),
    /// `!!!` doctype declaration.
    Meta(MetaDecl),
    /// One `//` comment line.
    Comment(String),
    /// `:filter` block with its captured, de-indented body.
    Filter { kind: FilterKind, lines: Vec<String> },
    /// `-statement` line.
    Python(String),
    Indent,
    Dedent,
    BlankLine,
}

impl TokenKind {
    /// Upper-case kind name used by the token dump.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Element(_) => "ELEMENT",
            TokenKind::StrAttr { .. } => "STR_ATTR",
            TokenKind::CodeAttr { .. } => "CODE_ATTR",
            TokenKind::StrData(_) => "STR_DATA",
            TokenKind::CodeData(_) => "CODE_DATA",
            TokenKind::Meta(_) => "META",
            TokenKind::Comment(_) => "COMMENT",
            TokenKind::Filter { .. } => "FILTER",
            TokenKind::Python(_) => "PYTHON",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::BlankLine => "BLANK_LINE",
        }
    }

    /// Returns `true` for `Indent`, `Dedent` and `BlankLine`.
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::Indent | TokenKind::Dedent | TokenKind::BlankLine
        )
    }
}

/// A token with its escape flag and source location.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Whether payload text must be entity-escaped when rendered.
    pub escape: bool,
    pub location: Location,
}

impl Token {
    /// Token whose payload is escaped on output.
    #[inline]
    pub fn new(kind: TokenKind, location: Location) -> Self {
        Token {
            kind,
            escape: true,
            location,
        }
    }

    /// Token whose payload is emitted verbatim.
    #[inline]
    pub fn verbatim(kind: TokenKind, location: Location) -> Self {
        Token {
            kind,
            escape: false,
            location,
        }
    }

    /// Structural marker (`Indent`, `Dedent`, `BlankLine`).
    #[inline]
    pub fn marker(kind: TokenKind, location: Location) -> Self {
        debug_assert!(kind.is_structural());
        Token::verbatim(kind, location)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.location)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}:{:<3} {}", self.location.line, self.location.column, self.kind.name())?;
        match &self.kind {
            TokenKind::Element(tag) => write!(f, " {tag:?}")?,
            TokenKind::StrAttr {
                name,
                value,
                origin,
            } => {
                write!(f, " {name}={value:?}")?;
                if let AttrOrigin::Shortcut(kind) = origin {
                    write!(f, " ({kind:?} shortcut)")?;
                }
            }
            TokenKind::CodeAttr { name, expr } => write!(f, " {name}={expr}")?,
            TokenKind::StrData(text)
            | TokenKind::CodeData(text)
            | TokenKind::Comment(text)
            | TokenKind::Python(text) => write!(f, " {text:?}")?,
            TokenKind::Meta(meta) => {
                write!(f, " {} {}", meta.doc_type, meta.version)?;
                if let Some(encoding) = &meta.encoding {
                    write!(f, " encoding={encoding:?}")?;
                }
            }
            TokenKind::Filter { kind, lines } => write!(f, " {} ({} lines)", kind.name(), lines.len())?,
            TokenKind::Indent | TokenKind::Dedent | TokenKind::BlankLine => {}
        }
        if !self.escape && !self.kind.is_structural() {
            f.write_str(" [verbatim]")?;
        }
        Ok(())
    }
}

/// Ordered lexer output.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Token kinds only, for compact assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{token}")?;
        }
        Ok(())
    }
}
