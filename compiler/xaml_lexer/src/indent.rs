//! Indentation stack.
//!
//! Widths are counted in whitespace characters. The stack starts at `[0]`
//! and is never empty. The first indented line fixes the indent character;
//! every later line must indent with that same character.

/// Result of moving to a new line's indentation width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum IndentChange {
    Same,
    Indent,
    /// Number of levels popped.
    Dedent(usize),
}

/// A dedent landed between two open levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Misaligned;

/// Leading whitespace used a different character than earlier lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct MixedIndent;

#[derive(Clone, Debug)]
pub(crate) struct IndentStack {
    widths: Vec<usize>,
    /// `' '` or `'\t'`, once a line has been indented.
    unit: Option<char>,
}

impl IndentStack {
    pub(crate) fn new() -> Self {
        IndentStack {
            widths: vec![0],
            unit: None,
        }
    }

    /// Check a line's leading whitespace against the document's indent
    /// character.
    pub(crate) fn check_unit(&mut self, leading: &str) -> Result<(), MixedIndent> {
        let Some(first) = leading.chars().next() else {
            return Ok(());
        };
        if leading.chars().any(|c| c != first) {
            return Err(MixedIndent);
        }
        match self.unit {
            Some(unit) if unit != first => Err(MixedIndent),
            Some(_) => Ok(()),
            None => {
                self.unit = Some(first);
                Ok(())
            }
        }
    }

    pub(crate) fn current(&self) -> usize {
        self.widths.last().copied().unwrap_or(0)
    }

    /// Number of levels above the base.
    pub(crate) fn depth(&self) -> usize {
        self.widths.len() - 1
    }

    pub(crate) fn change(&mut self, width: usize) -> Result<IndentChange, Misaligned> {
        let current = self.current();
        if width == current {
            return Ok(IndentChange::Same);
        }
        if width > current {
            self.widths.push(width);
            return Ok(IndentChange::Indent);
        }
        let Some(target) = self.widths.iter().rposition(|w| *w == width) else {
            return Err(Misaligned);
        };
        let popped = self.widths.len() - 1 - target;
        self.widths.truncate(target + 1);
        Ok(IndentChange::Dedent(popped))
    }

    /// Pop every open level, returning how many were open.
    pub(crate) fn close(&mut self) -> usize {
        let depth = self.depth();
        self.widths.truncate(1);
        depth
    }
}
