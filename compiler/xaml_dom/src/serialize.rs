//! Document serializer.
//!
//! Writes a laid-out [`Document`] as XML or HTML text: four spaces per
//! nesting level, one node per line, no newline after the last line. The
//! doctype preamble (declared documents only) ends with its own newline.

use tracing::{debug, trace};
use xaml_diagnostic::{Result, XamlError};
use xaml_ir::{DocType, HtmlVersion, Ml};

use crate::document::{Content, Document, Element, Raw, Text};
use crate::emitter::{Emitter, StringEmitter};
use crate::escape;
use crate::html5::{is_raw_text_element, is_void_element};

/// Which flavour of XML declaration to write.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Preamble {
    /// `<?xml version="1.0"?>`
    Text,
    /// `<?xml version="1.0" encoding="utf-8"?>`
    Bytes,
}

const HTML5_DOCTYPE: &str = "<!DOCTYPE html>";
const HTML4_STRICT_DOCTYPE: &str =
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#;
const HTML4_TRANSITIONAL_DOCTYPE: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">"#;

pub(crate) fn render(doc: &Document, preamble: Preamble) -> Result<String> {
    let ml = doc.ml();
    debug!(
        doc_type = %ml.doc_type,
        version = %ml.version,
        declared = ml.declared,
        nodes = doc.nodes().len(),
        "serializing document"
    );
    let mut serializer = Serializer::new(StringEmitter::new(), ml.is_html());
    if ml.declared {
        serializer.preamble(ml, preamble);
    }
    serializer.nodes(doc.nodes(), 0, false)?;
    Ok(serializer.finish().output())
}

/// The doctype line for a declared document, without its newline.
fn doctype_line(ml: &Ml, preamble: Preamble) -> String {
    match ml.doc_type {
        DocType::Xml => match preamble {
            Preamble::Text => format!("<?xml version=\"{}\"?>", ml.version),
            Preamble::Bytes => format!(
                "<?xml version=\"{}\" encoding=\"{}\"?>",
                ml.version, ml.encoding
            ),
        },
        DocType::Html => match ml.html_version().unwrap_or(HtmlVersion::Html5) {
            HtmlVersion::Html5 => HTML5_DOCTYPE.to_owned(),
            HtmlVersion::Html4Strict => HTML4_STRICT_DOCTYPE.to_owned(),
            HtmlVersion::Html4Transitional => HTML4_TRANSITIONAL_DOCTYPE.to_owned(),
        },
    }
}

struct Serializer<E: Emitter> {
    emitter: E,
    html: bool,
    /// Set once the first node line is written; later lines start with `\n`.
    started: bool,
}

impl<E: Emitter> Serializer<E> {
    fn new(emitter: E, html: bool) -> Self {
        Serializer {
            emitter,
            html,
            started: false,
        }
    }

    fn finish(self) -> E {
        self.emitter
    }

    fn preamble(&mut self, ml: &Ml, preamble: Preamble) {
        self.emitter.emit(&doctype_line(ml, preamble));
        self.emitter.emit_newline();
    }

    fn line(&mut self, level: usize) {
        if self.started {
            self.emitter.emit_newline();
        }
        self.started = true;
        self.emitter.emit_indent(level);
    }

    fn blank_line(&mut self) {
        if self.started {
            self.emitter.emit_newline();
        }
        self.started = true;
    }

    /// Write each line of `value` at `level`; empty lines stay empty.
    fn lines<'v>(&mut self, lines: impl Iterator<Item = &'v str>, level: usize) {
        for line in lines {
            if line.is_empty() {
                self.blank_line();
            } else {
                self.line(level);
                self.emitter.emit(line);
            }
        }
    }

    fn nodes(&mut self, nodes: &[Content], level: usize, raw_text: bool) -> Result<()> {
        for node in nodes {
            match node {
                Content::Element(element) => self.element(element, level)?,
                Content::Text(text) => self.text(text, level, raw_text),
                Content::Comment(lines) => self.comment(lines, level),
                Content::Raw(raw) => self.raw(raw, level),
                Content::Blank => self.blank_line(),
            }
        }
        Ok(())
    }

    fn open_tag(&mut self, element: &Element) {
        self.emitter.emit("<");
        self.emitter.emit(&element.tag);
        for (name, value) in &element.attrs {
            self.emitter.emit(" ");
            self.emitter.emit(name);
            self.emitter.emit("=\"");
            self.emitter.emit(&escape::attr(value));
            self.emitter.emit("\"");
        }
    }

    fn close_tag(&mut self, tag: &str) {
        self.emitter.emit("</");
        self.emitter.emit(tag);
        self.emitter.emit(">");
    }

    fn element(&mut self, element: &Element, level: usize) -> Result<()> {
        trace!(tag = %element.tag, level, "element");
        let raw_text = is_raw_text_element(&element.tag);
        if self.html && is_void_element(&element.tag) {
            if !element.is_empty() {
                return Err(XamlError::void_element(&element.tag, element.location));
            }
            self.line(level);
            self.open_tag(element);
            self.emitter.emit(">");
            return Ok(());
        }

        self.line(level);
        self.open_tag(element);
        if element.text.is_none() && element.children.is_empty() {
            if self.html {
                self.emitter.emit(">");
                self.close_tag(&element.tag);
            } else {
                self.emitter.emit("/>");
            }
            return Ok(());
        }

        self.emitter.emit(">");
        if let Some(text) = &element.text {
            if raw_text {
                self.emitter.emit(text);
            } else {
                self.emitter.emit(&escape::text(text));
            }
        }
        if !element.children.is_empty() {
            self.nodes(&element.children, level + 1, raw_text)?;
            self.line(level);
        }
        self.close_tag(&element.tag);
        Ok(())
    }

    fn text(&mut self, text: &Text, level: usize, raw_text: bool) {
        let level = level + text.indent as usize;
        if text.escape && !raw_text {
            let escaped = escape::text(&text.value);
            self.lines(escaped.split('\n'), level);
        } else {
            self.lines(text.value.split('\n'), level);
        }
    }

    fn comment(&mut self, lines: &[String], level: usize) {
        self.line(level);
        self.emitter.emit("<!--");
        for text in lines {
            self.line(level);
            self.emitter.emit(" |  ");
            self.emitter.emit(text);
        }
        self.line(level);
        self.emitter.emit("-->");
    }

    fn raw(&mut self, raw: &Raw, level: usize) {
        let (open, close) = raw.kind.delimiters();
        self.line(level);
        self.emitter.emit(open);
        self.lines(raw.lines.iter().map(String::as_str), level + 1);
        self.line(level);
        self.emitter.emit(close);
    }
}
