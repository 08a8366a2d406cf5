//! Error reporting for the xaml compiler.
//!
//! - [`XamlError`]: the single error type returned by every phase
//! - [`ErrorCode`]: stable `E####` codes for searchability
//! - [`emitter`]: terminal rendering with the offending source line

pub mod emitter;
mod error;
mod error_code;

pub use error::XamlError;
pub use error_code::ErrorCode;

/// Result alias used throughout the compiler crates.
pub type Result<T, E = XamlError> = std::result::Result<T, E>;
