//! Program IR.
//!
//! The parser produces a [`Program`]: the static document skeleton plus the
//! deferred pieces (bindings, loops, expression references) that the
//! evaluator resolves once arguments are known. A `Program` is never mutated
//! after parsing.

use std::fmt::{self, Write as _};

use crate::{Location, Ml};

/// Raw block kinds selected by `:name` filter lines.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FilterKind {
    Python,
    Javascript,
    Css,
    Cdata,
    CdataPython,
}

impl FilterKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "python" => Some(FilterKind::Python),
            "javascript" => Some(FilterKind::Javascript),
            "css" => Some(FilterKind::Css),
            "cdata" => Some(FilterKind::Cdata),
            "cdata-python" => Some(FilterKind::CdataPython),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FilterKind::Python => "python",
            FilterKind::Javascript => "javascript",
            FilterKind::Css => "css",
            FilterKind::Cdata => "cdata",
            FilterKind::CdataPython => "cdata-python",
        }
    }

    /// Opening and closing lines wrapped around the block body.
    pub const fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            FilterKind::Python => ("<script type=\"text/python\">", "</script>"),
            FilterKind::Javascript => ("<script type=\"text/javascript\">", "</script>"),
            FilterKind::Css => ("<style type=\"text/css\">", "</style>"),
            FilterKind::Cdata | FilterKind::CdataPython => ("<![CDATA[", "]]>"),
        }
    }
}

/// Expressions of the template mini-language.
///
/// Names, dotted access and literals. Nothing else is representable.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `name` or `name.field.field`.
    Path { root: String, segments: Vec<String> },
    Str(String),
    Int(i64),
    Float(f64),
}

impl Expr {
    /// Single-name reference.
    pub fn name(root: impl Into<String>) -> Self {
        Expr::Path {
            root: root.into(),
            segments: Vec::new(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Path { root, segments } => {
                f.write_str(root)?;
                for segment in segments {
                    write!(f, ".{segment}")?;
                }
                Ok(())
            }
            Expr::Str(s) => write!(f, "{s:?}"),
            Expr::Int(n) => write!(f, "{n}"),
            Expr::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// An attribute or text value: known now, or looked up at evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Literal(String),
    Ref(Expr),
}

/// Text values share the attribute representation.
pub type TextValue = AttrValue;

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Literal(s) => write!(f, "{s:?}"),
            AttrValue::Ref(expr) => write!(f, "={expr}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElementNode {
    pub tag: String,
    /// Attributes in canonical order, names unique.
    pub attrs: Vec<(String, AttrValue)>,
    /// Inline data written after `:` on the element line.
    pub text: Option<TextValue>,
    pub children: Vec<Node>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub value: TextValue,
    pub escape: bool,
    /// Extra nesting levels for text indented under other text.
    pub indent: u32,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawBlock {
    pub kind: FilterKind,
    pub lines: Vec<String>,
    pub location: Location,
}

/// `-name = expr`
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub name: String,
    pub expr: Expr,
    pub location: Location,
}

/// `-for var in expr:` with its indented body.
#[derive(Clone, Debug, PartialEq)]
pub struct Loop {
    pub var: String,
    pub source: Expr,
    pub body: Vec<Node>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(ElementNode),
    Text(TextNode),
    CommentBlock { lines: Vec<String> },
    RawBlock(RawBlock),
    /// A preserved blank line.
    Blank,
    Binding(Binding),
    Loop(Loop),
}

impl Node {
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank)
    }
}

/// Parser output: the doctype plus the root-level node sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub ml: Ml,
    pub nodes: Vec<Node>,
}

impl Program {
    pub fn new(ml: Ml, nodes: Vec<Node>) -> Self {
        Program { ml, nodes }
    }
}

// IR dump

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let declared = if self.ml.declared { "declared" } else { "implicit" };
        writeln!(
            f,
            "doctype {} {} encoding={} ({declared})",
            self.ml.doc_type, self.ml.version, self.ml.encoding
        )?;
        let mut out = String::new();
        dump_nodes(&mut out, &self.nodes, 0)?;
        f.write_str(&out)
    }
}

fn dump_nodes(out: &mut String, nodes: &[Node], level: usize) -> fmt::Result {
    for node in nodes {
        dump_node(out, node, level)?;
    }
    Ok(())
}

fn dump_node(out: &mut String, node: &Node, level: usize) -> fmt::Result {
    let pad = "    ".repeat(level);
    match node {
        Node::Element(el) => {
            write!(out, "{pad}element {}", el.tag)?;
            for (name, value) in &el.attrs {
                write!(out, " {name}={value}")?;
            }
            if let Some(text) = &el.text {
                write!(out, " : {text}")?;
            }
            writeln!(out)?;
            dump_nodes(out, &el.children, level + 1)
        }
        Node::Text(text) => {
            write!(out, "{pad}text {}", text.value)?;
            if text.indent > 0 {
                write!(out, " indent={}", text.indent)?;
            }
            if !text.escape {
                out.push_str(" verbatim");
            }
            writeln!(out)
        }
        Node::CommentBlock { lines } => {
            writeln!(out, "{pad}comment")?;
            for line in lines {
                writeln!(out, "{pad}    | {line}")?;
            }
            Ok(())
        }
        Node::RawBlock(raw) => {
            writeln!(out, "{pad}raw {}", raw.kind.name())?;
            for line in &raw.lines {
                writeln!(out, "{pad}    | {line}")?;
            }
            Ok(())
        }
        Node::Blank => writeln!(out, "{pad}blank"),
        Node::Binding(binding) => writeln!(out, "{pad}let {} = {}", binding.name, binding.expr),
        Node::Loop(lp) => {
            writeln!(out, "{pad}for {} in {}", lp.var, lp.source)?;
            dump_nodes(out, &lp.body, level + 1)
        }
    }
}
