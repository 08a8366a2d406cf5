//! Blank line layout.
//!
//! Blank lines survive from the source, but the output keeps only the
//! meaningful ones. Rules, applied per child list:
//!
//! - runs of blank lines collapse to one
//! - a comment block is set apart by one blank line on each side, unless it
//!   opens or closes the list
//! - the document drops leading and trailing blank lines
//! - an element whose children start with a blank line also ends with one
//! - an element whose children are all blank is empty

use crate::document::Content;

/// Lay out the root node list and, recursively, every element below it.
pub(crate) fn arrange_document(nodes: &mut Vec<Content>) {
    arrange(nodes);
    trim(nodes);
}

fn arrange(nodes: &mut Vec<Content>) {
    for node in nodes.iter_mut() {
        if let Content::Element(element) = node {
            arrange(&mut element.children);
            pad(&mut element.children);
        }
    }
    collapse(nodes);
    space_comments(nodes);
}

fn collapse(nodes: &mut Vec<Content>) {
    nodes.dedup_by(|next, prev| next.is_blank() && prev.is_blank());
}

fn space_comments(nodes: &mut Vec<Content>) {
    let mut out: Vec<Content> = Vec::with_capacity(nodes.len() + 2);
    let len = nodes.len();
    let mut iter = std::mem::take(nodes).into_iter().enumerate().peekable();
    while let Some((index, node)) = iter.next() {
        let is_comment = matches!(node, Content::Comment(_));
        if is_comment && index > 0 && !out.last().is_some_and(Content::is_blank) {
            out.push(Content::Blank);
        }
        out.push(node);
        let next_is_blank = iter.peek().is_some_and(|(_, next)| next.is_blank());
        if is_comment && index + 1 < len && !next_is_blank {
            out.push(Content::Blank);
        }
    }
    *nodes = out;
}

fn trim(nodes: &mut Vec<Content>) {
    while nodes.last().is_some_and(Content::is_blank) {
        nodes.pop();
    }
    let leading = nodes.iter().take_while(|n| n.is_blank()).count();
    nodes.drain(..leading);
}

fn pad(children: &mut Vec<Content>) {
    if children.iter().all(Content::is_blank) {
        children.clear();
        return;
    }
    let starts_blank = children.first().is_some_and(Content::is_blank);
    let ends_blank = children.last().is_some_and(Content::is_blank);
    if starts_blank && !ends_blank {
        children.push(Content::Blank);
    }
}
