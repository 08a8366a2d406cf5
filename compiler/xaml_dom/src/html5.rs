//! HTML element classes and the HTML5 `head` rule.

use xaml_ir::Location;

use crate::document::{Content, Element};

/// Elements that never take a closing tag or content.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text content is written without escaping.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

pub fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Give every root `html` element a leading `head` whose first child is the
/// charset `meta`.
///
/// An existing `head` or charset `meta` is moved into place rather than
/// duplicated. Leading blank lines keep their position.
pub(crate) fn ensure_head(nodes: &mut [Content], charset: &str) {
    for node in nodes {
        if let Content::Element(html) = node {
            if html.tag.eq_ignore_ascii_case("html") {
                let mut head = take_first(&mut html.children, |e| e.tag.eq_ignore_ascii_case("head"))
                    .unwrap_or_else(|| Element::new("head", Location::GENERATED));
                let meta = take_first(&mut head.children, |e| {
                    e.tag.eq_ignore_ascii_case("meta") && e.attr("charset").is_some()
                })
                .unwrap_or_else(|| {
                    Element::new("meta", Location::GENERATED).with_attr("charset", charset)
                });
                insert_first(&mut head.children, meta);
                insert_first(&mut html.children, head);
            }
        }
    }
}

fn take_first(children: &mut Vec<Content>, pred: impl Fn(&Element) -> bool) -> Option<Element> {
    let index = children
        .iter()
        .position(|c| c.as_element().is_some_and(&pred))?;
    match children.remove(index) {
        Content::Element(element) => Some(element),
        _ => None,
    }
}

/// Insert before the first non-blank child.
fn insert_first(children: &mut Vec<Content>, element: Element) {
    let index = children
        .iter()
        .position(|c| !c.is_blank())
        .unwrap_or(children.len());
    children.insert(index, Content::Element(element));
}
