//! Parser tests.
//!
//! - `program`: source text through the lexer into the IR dump
//! - `errors`: rejected inputs, from source and from hand-built token lists
