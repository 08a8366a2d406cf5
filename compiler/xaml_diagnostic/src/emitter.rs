//! Terminal Emitter
//!
//! Human-readable error output: a header with the error code, the offending
//! source line, and a caret under the reported column.

use std::io::{self, Write};

use crate::XamlError;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto` mode, `is_tty` decides.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes [`XamlError`]s to a terminal or any other writer.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// Emit one error. `source` is the decoded source text, used to quote the
    /// offending line; `path` names the file in the `-->` line.
    pub fn emit(&mut self, error: &XamlError, source: Option<&str>, path: Option<&str>) {
        let code = error.code();
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!("[{code}]"), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", error.summary());

        let location = error.location();
        let path = path.unwrap_or("<input>");
        if location.is_generated() {
            let _ = writeln!(self.writer, "  --> {path}");
            let _ = writeln!(self.writer);
            return;
        }
        let _ = writeln!(
            self.writer,
            "  --> {path}:{}:{}",
            location.line, location.column
        );

        let line_text = source.and_then(|src| {
            let index = usize::try_from(location.line).ok()?.checked_sub(1)?;
            src.lines().nth(index)
        });
        if let Some(text) = line_text {
            let number = location.line.to_string();
            let gutter = " ".repeat(number.len());
            self.write_colored(&format!("{gutter} |"), colors::GUTTER);
            let _ = writeln!(self.writer);
            self.write_colored(&format!("{number} |"), colors::GUTTER);
            let _ = writeln!(self.writer, " {}", text.trim_end());
            self.write_colored(&format!("{gutter} |"), colors::GUTTER);
            let column = usize::try_from(location.column.max(1)).unwrap_or(1);
            let _ = write!(self.writer, " {}", " ".repeat(column - 1));
            self.write_colored("^", colors::ERROR);
            let _ = writeln!(self.writer);
        }
        let _ = writeln!(self.writer);
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Render an error to a plain string without colors.
pub fn render(error: &XamlError, source: Option<&str>, path: Option<&str>) -> String {
    let mut out = Vec::new();
    TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false).emit(error, source, path);
    String::from_utf8_lossy(&out).into_owned()
}
