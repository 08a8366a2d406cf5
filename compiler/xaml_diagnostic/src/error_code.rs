use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Source and lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Evaluation errors
/// - E3xxx: Render errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Source / Lexer Errors (E0xxx)
    /// Inconsistent indentation
    E0001,
    /// Malformed encoding pragma or unknown encoding label
    E0002,
    /// Source bytes invalid in the selected encoding
    E0003,

    // Parser Errors (E1xxx)
    /// Malformed source construct
    E1001,

    // Evaluation Errors (E2xxx)
    /// Name not bound in any scope
    E2001,
    /// Value of the wrong shape for its use
    E2002,

    // Render Errors (E3xxx)
    /// Void element with content
    E3001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E3001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
        }
    }

    /// One-line explanation, shown by `xaml help <code>`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A line dedents to a width that matches no enclosing block, or its \
                 leading whitespace mixes tabs and spaces."
            }
            ErrorCode::E0002 => {
                "A `!!! coding` pragma (or a doctype `encoding=` option) names no \
                 encoding, or one that is not recognised."
            }
            ErrorCode::E0003 => "The source contains bytes that are not valid in its encoding.",
            ErrorCode::E1001 => {
                "The source could not be parsed: a dangling `:`, an unknown doctype or \
                 filter, a duplicate attribute, or an unsupported `-` statement."
            }
            ErrorCode::E2001 => "An expression names a variable that is not bound in scope.",
            ErrorCode::E2002 => {
                "A value was used in the wrong way, such as iterating a string or \
                 rendering a list as text."
            }
            ErrorCode::E3001 => {
                "An HTML void element (`br`, `img`, `meta`, ...) was given text or children."
            }
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    pub fn is_parser_error(&self) -> bool {
        matches!(self, ErrorCode::E1001)
    }

    pub fn is_eval_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002)
    }

    pub fn is_render_error(&self) -> bool {
        matches!(self, ErrorCode::E3001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
