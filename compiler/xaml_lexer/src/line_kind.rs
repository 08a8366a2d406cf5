//! Per-line dispatch on the leading sigil.

/// What a source line is, decided by its first characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum LineKind {
    /// `!!! ...`
    Meta,
    /// `~tag`
    Element,
    /// `@name`, a `field` element
    Field,
    /// `.class`, a `div` element
    Div,
    /// `// ...`
    Comment,
    /// `:filter`
    Filter,
    /// `-statement`
    Statement,
    /// `=expr`
    CodeData,
    Text,
}

impl LineKind {
    /// Classify a line with its leading whitespace already removed.
    pub(crate) fn classify(content: &str) -> Self {
        if content.starts_with("!!!") {
            return LineKind::Meta;
        }
        if content.starts_with("//") {
            return LineKind::Comment;
        }
        let mut chars = content.chars();
        let first = chars.next();
        let second = chars.next();
        match first {
            Some('~') => LineKind::Element,
            Some('@') => LineKind::Field,
            Some('.') if second.is_some_and(is_class_start) => LineKind::Div,
            Some(':') if second.is_some_and(char::is_alphabetic) => LineKind::Filter,
            Some('-') => LineKind::Statement,
            Some('=') => LineKind::CodeData,
            _ => LineKind::Text,
        }
    }
}

fn is_class_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '-'
}
