//! Decoded, pushback-capable character stream.
//!
//! The lexer reads the source a line or a character at a time and sometimes
//! has to give content back (a peeked line that belongs to the next block).
//! Returned content is kept on a LIFO stack that is drained before the
//! underlying text resumes, so a pushed character is re-read even mid-line.

use encoding_rs::{DecoderResult, Encoding, UTF_8};
use tracing::debug;
use xaml_diagnostic::{Result, XamlError};
use xaml_ir::Location;

use crate::pragma::{self, Pragma};

pub struct SourceStream {
    chars: Vec<char>,
    pos: usize,
    /// Returned characters, top of stack is read next. The flag is false
    /// for a newline `push_line` added after an unterminated line; reading
    /// it back does not advance `line`.
    pushed: Vec<(char, bool)>,
    /// 1-based number of the line the next read starts on.
    line: u32,
    pragma: Option<Pragma>,
    encoding: &'static Encoding,
}

impl SourceStream {
    /// Decode raw bytes.
    ///
    /// The encoding named by a `!!! coding` pragma wins; otherwise
    /// `default_encoding` is used.
    pub fn from_bytes(bytes: &[u8], default_encoding: &str) -> Result<Self> {
        let pragma = pragma::detect(bytes)?;
        let encoding = match &pragma {
            Some(pragma) => pragma.encoding,
            None => pragma::resolve_label(default_encoding).ok_or_else(|| {
                XamlError::malformed_pragma(
                    format!("unknown default encoding `{default_encoding}`"),
                    Location::GENERATED,
                )
            })?,
        };
        let text = decode(bytes, encoding)?;
        debug!(
            encoding = encoding.name(),
            pragma = pragma.is_some(),
            chars = text.len(),
            "decoded source"
        );
        Ok(Self::build(&text, pragma, encoding))
    }

    /// Wrap already-decoded text. A pragma, if present, is still validated.
    pub fn from_text(text: &str) -> Result<Self> {
        let pragma = pragma::detect(text.as_bytes())?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Ok(Self::build(text, pragma, UTF_8))
    }

    fn build(text: &str, pragma: Option<Pragma>, encoding: &'static Encoding) -> Self {
        SourceStream {
            chars: text.chars().collect(),
            pos: 0,
            pushed: Vec::new(),
            line: 1,
            pragma,
            encoding,
        }
    }

    /// Next character, or `None` at end of input.
    pub fn get_char(&mut self) -> Option<char> {
        let (ch, counted) = match self.pushed.pop() {
            Some(pushed) => pushed,
            None => {
                let ch = *self.chars.get(self.pos)?;
                self.pos += 1;
                (ch, true)
            }
        };
        if ch == '\n' && counted {
            self.line = self.line.saturating_add(1);
        }
        Some(ch)
    }

    /// Next line including its `\n` (absent on an unterminated last line),
    /// or `None` at end of input.
    pub fn get_line(&mut self) -> Option<String> {
        let mut line = String::new();
        while let Some(ch) = self.get_char() {
            line.push(ch);
            if ch == '\n' {
                break;
            }
        }
        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    }

    /// Return one character to the front of the stream.
    pub fn push_char(&mut self, ch: char) {
        if ch == '\n' {
            self.line = self.line.saturating_sub(1);
        }
        self.pushed.push((ch, true));
    }

    /// Return a line to the front of the stream. A newline is re-inserted
    /// after it; a trailing newline already present is not doubled.
    ///
    /// The newline added after an unterminated line is not counted, so
    /// giving back the last line of the input keeps numbering intact.
    pub fn push_line(&mut self, line: &str) {
        match line.strip_suffix('\n') {
            Some(body) => {
                self.push_char('\n');
                self.push_body(body);
            }
            None => {
                self.pushed.push(('\n', false));
                self.push_body(line);
            }
        }
    }

    fn push_body(&mut self, line: &str) {
        for ch in line.chars().rev() {
            self.push_char(ch);
        }
    }

    /// Peek at the next line without consuming it.
    pub fn peek_line(&mut self) -> Option<String> {
        let line = self.get_line()?;
        self.push_line(&line);
        Some(line)
    }

    /// The encoding pragma, when the source carried one.
    pub fn pragma(&self) -> Option<&Pragma> {
        self.pragma.as_ref()
    }

    /// 1-based number of the line the next read starts on.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

/// Strict decode: malformed input is an error naming the offending line.
fn decode(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let bytes = if encoding == UTF_8 {
        bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes)
    } else {
        bytes
    };
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len().saturating_mul(3));
    let mut text = String::with_capacity(capacity);
    let (result, read) = decoder.decode_to_string_without_replacement(bytes, &mut text, true);
    match result {
        DecoderResult::InputEmpty => Ok(text),
        DecoderResult::Malformed(..) | DecoderResult::OutputFull => {
            let newlines = bytes[..read].iter().filter(|b| **b == b'\n').count();
            let line = u32::try_from(newlines + 1).unwrap_or(u32::MAX);
            let column = text.chars().rev().take_while(|c| *c != '\n').count() + 1;
            Err(XamlError::decode(
                encoding.name(),
                Location::line_start(line).offset(column - 1),
            ))
        }
    }
}
