//! Tree-walking evaluator from [`Program`] nodes to document content.

use tracing::trace;
use xaml_diagnostic::{Result, XamlError};
use xaml_dom::{Content, Element, Raw, Text};
use xaml_ir::{AttrValue, ElementNode, Expr, Location, Loop, Node, TextNode};

use crate::{Args, Environment, Value};

/// Evaluation state for one program run.
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// An interpreter with `args` bound globally: each argument by name,
    /// and all of them as the map `args`.
    pub fn new(args: &Args) -> Self {
        let mut env = Environment::new();
        for (name, value) in args.iter() {
            env.define_global(name, value.clone());
        }
        env.define_global("args", args.to_value());
        Interpreter { env }
    }

    /// Run `f` in a fresh scope, popped afterwards whatever `f` returns.
    pub fn with_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.env.push_scope();
        let result = f(self);
        self.env.pop_scope();
        result
    }

    /// Evaluate a node list in the current scope.
    pub fn eval_nodes(&mut self, nodes: &[Node]) -> Result<Vec<Content>> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            self.eval_node(node, &mut out)?;
        }
        Ok(out)
    }

    fn eval_node(&mut self, node: &Node, out: &mut Vec<Content>) -> Result<()> {
        match node {
            Node::Element(element) => out.push(Content::Element(self.element(element)?)),
            Node::Text(text) => out.push(Content::Text(self.text(text)?)),
            Node::CommentBlock { lines } => out.push(Content::Comment(lines.clone())),
            Node::RawBlock(raw) => out.push(Content::Raw(Raw {
                kind: raw.kind,
                lines: raw.lines.clone(),
            })),
            Node::Blank => out.push(Content::Blank),
            Node::Binding(binding) => {
                let value = self.eval_expr(&binding.expr, binding.location)?;
                trace!(name = %binding.name, %value, "bind");
                self.env.define(binding.name.as_str(), value);
            }
            Node::Loop(lp) => self.eval_loop(lp, out)?,
        }
        Ok(())
    }

    fn element(&mut self, node: &ElementNode) -> Result<Element> {
        let mut element = Element::new(node.tag.as_str(), node.location);
        for (name, value) in &node.attrs {
            let value = self.resolve(value, node.location)?;
            element.attrs.push((name.clone(), value));
        }
        element.text = match &node.text {
            Some(text) => Some(self.resolve(text, node.location)?),
            None => None,
        };
        element.children = self.with_scope(|this| this.eval_nodes(&node.children))?;
        Ok(element)
    }

    fn text(&mut self, node: &TextNode) -> Result<Text> {
        Ok(Text {
            value: self.resolve(&node.value, node.location)?,
            escape: node.escape,
            indent: node.indent,
        })
    }

    fn eval_loop(&mut self, lp: &Loop, out: &mut Vec<Content>) -> Result<()> {
        let items = match self.eval_expr(&lp.source, lp.location)? {
            Value::List(items) => items,
            Value::Map(entries) => entries.into_iter().map(|(k, _)| Value::Str(k)).collect(),
            other => {
                return Err(XamlError::type_error(
                    format!("cannot iterate over {} `{}`", other.kind_name(), lp.source),
                    lp.location,
                ))
            }
        };
        trace!(var = %lp.var, items = items.len(), "loop");
        for item in items {
            let body = self.with_scope(|this| {
                this.env.define(lp.var.as_str(), item);
                this.eval_nodes(&lp.body)
            })?;
            out.extend(body);
        }
        Ok(())
    }

    /// Resolve an attribute or text value to its output string.
    fn resolve(&self, value: &AttrValue, location: Location) -> Result<String> {
        match value {
            AttrValue::Literal(text) => Ok(text.clone()),
            AttrValue::Ref(expr) => {
                let value = self.eval_expr(expr, location)?;
                value.render().ok_or_else(|| {
                    XamlError::type_error(
                        format!("cannot write {} `{expr}` as text", value.kind_name()),
                        location,
                    )
                })
            }
        }
    }

    pub fn eval_expr(&self, expr: &Expr, location: Location) -> Result<Value> {
        match expr {
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Int(n) => Ok(Value::Int(*n)),
            Expr::Float(x) => Ok(Value::Float(*x)),
            Expr::Path { root, segments } => {
                let mut value = self
                    .env
                    .lookup(root)
                    .ok_or_else(|| XamlError::unbound_name(root.as_str(), location))?;
                let mut path = root.clone();
                for segment in segments {
                    if !matches!(value, Value::Map(_)) {
                        return Err(XamlError::type_error(
                            format!("`{path}` is a {}, not a map", value.kind_name()),
                            location,
                        ));
                    }
                    path.push('.');
                    path.push_str(segment);
                    value = value
                        .field(segment)
                        .cloned()
                        .ok_or_else(|| XamlError::unbound_name(path.as_str(), location))?;
                }
                Ok(value)
            }
        }
    }
}
