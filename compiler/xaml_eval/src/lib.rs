//! xaml Eval - template evaluation.
//!
//! Turns a parsed [`Program`] plus caller arguments into a [`Document`]:
//! `-name = expr` bindings extend the current scope, `-for` loops repeat
//! their body per item, and `=expr` references are replaced by values.
//!
//! # Architecture
//!
//! - `Environment`: scope stack over a global scope holding the arguments
//! - `Interpreter`: walks program nodes and builds document content
//! - `Value` / `Args`: the argument values templates can see

mod environment;
mod interpreter;
mod value;

use tracing::debug;
use xaml_diagnostic::Result;
use xaml_dom::Document;
use xaml_ir::Program;

pub use environment::{Environment, LocalScope, Scope};
pub use interpreter::Interpreter;
pub use value::{Args, Value};

/// Evaluate `program` against `args`.
///
/// The program is not modified, so one program can be evaluated any number
/// of times with different arguments.
pub fn evaluate(program: &Program, args: &Args) -> Result<Document> {
    debug!(args = args.len(), nodes = program.nodes.len(), "evaluating program");
    let mut interpreter = Interpreter::new(args);
    let nodes = interpreter.with_scope(|this| this.eval_nodes(&program.nodes))?;
    Ok(Document::new(program.ml.clone(), nodes))
}
