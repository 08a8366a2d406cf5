//! The compiler's error type.
//!
//! Every phase reports failure through [`XamlError`]. All errors are terminal
//! for the call that produced them; there is no recovery or accumulation.

use xaml_ir::Location;

use crate::ErrorCode;

/// Errors raised while compiling, evaluating or rendering a document.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum XamlError {
    #[error("{message} ({location})")]
    Indentation { message: String, location: Location },

    #[error("{message} ({location})")]
    MalformedPragma { message: String, location: Location },

    #[error("source is not valid {encoding} ({location})")]
    Decode { encoding: String, location: Location },

    #[error("{message} ({location})")]
    Parse { message: String, location: Location },

    #[error("name `{name}` is not bound ({location})")]
    UnboundName { name: String, location: Location },

    #[error("{message} ({location})")]
    Type { message: String, location: Location },

    #[error("void element <{tag}> cannot have content (line {})", .location.line)]
    VoidElement { tag: String, location: Location },
}

impl XamlError {
    pub fn indentation(message: impl Into<String>, location: Location) -> Self {
        XamlError::Indentation {
            message: message.into(),
            location,
        }
    }

    pub fn malformed_pragma(message: impl Into<String>, location: Location) -> Self {
        XamlError::MalformedPragma {
            message: message.into(),
            location,
        }
    }

    pub fn decode(encoding: impl Into<String>, location: Location) -> Self {
        XamlError::Decode {
            encoding: encoding.into(),
            location,
        }
    }

    pub fn parse(message: impl Into<String>, location: Location) -> Self {
        XamlError::Parse {
            message: message.into(),
            location,
        }
    }

    pub fn unbound_name(name: impl Into<String>, location: Location) -> Self {
        XamlError::UnboundName {
            name: name.into(),
            location,
        }
    }

    pub fn type_error(message: impl Into<String>, location: Location) -> Self {
        XamlError::Type {
            message: message.into(),
            location,
        }
    }

    pub fn void_element(tag: impl Into<String>, location: Location) -> Self {
        XamlError::VoidElement {
            tag: tag.into(),
            location,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            XamlError::Indentation { .. } => ErrorCode::E0001,
            XamlError::MalformedPragma { .. } => ErrorCode::E0002,
            XamlError::Decode { .. } => ErrorCode::E0003,
            XamlError::Parse { .. } => ErrorCode::E1001,
            XamlError::UnboundName { .. } => ErrorCode::E2001,
            XamlError::Type { .. } => ErrorCode::E2002,
            XamlError::VoidElement { .. } => ErrorCode::E3001,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            XamlError::Indentation { location, .. }
            | XamlError::MalformedPragma { location, .. }
            | XamlError::Decode { location, .. }
            | XamlError::Parse { location, .. }
            | XamlError::UnboundName { location, .. }
            | XamlError::Type { location, .. }
            | XamlError::VoidElement { location, .. } => *location,
        }
    }

    /// Headline without the trailing location.
    pub fn summary(&self) -> String {
        match self {
            XamlError::Indentation { message, .. }
            | XamlError::MalformedPragma { message, .. }
            | XamlError::Parse { message, .. }
            | XamlError::Type { message, .. } => message.clone(),
            XamlError::Decode { encoding, .. } => format!("source is not valid {encoding}"),
            XamlError::UnboundName { name, .. } => format!("name `{name}` is not bound"),
            XamlError::VoidElement { tag, .. } => format!("void element <{tag}> cannot have content"),
        }
    }
}
