//! Token cursor for navigating the token stream.
//!
//! Provides lookahead and consumption over a borrowed [`TokenList`].

use xaml_ir::{Location, Token, TokenKind, TokenList};

/// Cursor for navigating tokens.
///
/// Unlike a source-level cursor there is no EOF token: running off the end
/// returns `None`, which closes every open block.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    #[inline]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn peek_kind(&self) -> Option<&'a TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    /// The most recently consumed token.
    pub fn previous(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if `pred` accepts its kind.
    pub fn eat_if(&mut self, pred: impl FnOnce(&TokenKind) -> bool) -> Option<&'a Token> {
        match self.peek() {
            Some(token) if pred(&token.kind) => self.advance(),
            _ => None,
        }
    }

    /// Location for errors raised at the current position.
    pub fn location(&self) -> Location {
        self.peek()
            .or_else(|| self.previous())
            .map_or(Location::GENERATED, |token| token.location)
    }
}
