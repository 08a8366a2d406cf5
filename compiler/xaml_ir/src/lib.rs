//! xaml IR - shared data types
//!
//! This crate contains the data structures passed between compiler phases:
//! - `Location` for line/column source positions
//! - `Token` and `TokenList` for lexer output
//! - `Ml` / `DocType` doctype descriptors
//! - `Program` nodes produced by the parser and consumed by the evaluator
//!
//! Every type here is plain owned data. Nothing is interned or shared, so a
//! `Program` can be evaluated from any number of threads at once.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod location;
mod ml;
pub mod program;
mod token;

pub use location::Location;
pub use ml::{DocType, HtmlVersion, Ml};
pub use program::{
    AttrValue, Binding, ElementNode, Expr, FilterKind, Loop, Node, Program, RawBlock, TextNode,
    TextValue,
};
pub use token::{AttrOrigin, MetaDecl, ShortcutKind, Token, TokenKind, TokenList};
