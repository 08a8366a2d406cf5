//! Attribute collection and canonical ordering.
//!
//! Serialization order never depends on how attributes were written:
//! shortcut `name`, `id`, `string` and `class` come first in that order,
//! then explicit attributes in the order they were first declared.
//! Repeated `.class` shortcuts join with spaces; any other repeated name
//! is an error.

use std::collections::BTreeMap;

use xaml_diagnostic::{Result, XamlError};
use xaml_ir::{AttrOrigin, AttrValue, Location, ShortcutKind};

/// An attribute as written in an element head.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RawAttr {
    pub(crate) name: String,
    pub(crate) value: AttrValue,
    pub(crate) origin: AttrOrigin,
    pub(crate) location: Location,
}

pub(crate) fn canonicalize(raw: Vec<RawAttr>) -> Result<Vec<(String, AttrValue)>> {
    let mut shortcuts: BTreeMap<ShortcutKind, String> = BTreeMap::new();
    let mut explicit: Vec<RawAttr> = Vec::new();

    for attr in raw {
        match attr.origin {
            AttrOrigin::Shortcut(kind) => {
                let AttrValue::Literal(value) = attr.value else {
                    return Err(XamlError::parse(
                        format!("`{}` shortcut must have a literal value", kind.attr_name()),
                        attr.location,
                    ));
                };
                match shortcuts.get_mut(&kind) {
                    Some(joined) if kind == ShortcutKind::Class => {
                        joined.push(' ');
                        joined.push_str(&value);
                    }
                    Some(_) => return Err(duplicate(kind.attr_name(), attr.location)),
                    None => {
                        shortcuts.insert(kind, value);
                    }
                }
            }
            AttrOrigin::Explicit => {
                if explicit.iter().any(|seen| seen.name == attr.name) {
                    return Err(duplicate(&attr.name, attr.location));
                }
                explicit.push(attr);
            }
        }
    }

    if let Some(clash) = explicit
        .iter()
        .find(|attr| shortcuts.keys().any(|kind| kind.attr_name() == attr.name))
    {
        return Err(duplicate(&clash.name, clash.location));
    }

    let mut attrs: Vec<(String, AttrValue)> = shortcuts
        .into_iter()
        .map(|(kind, value)| (kind.attr_name().to_owned(), AttrValue::Literal(value)))
        .collect();
    attrs.extend(explicit.into_iter().map(|attr| (attr.name, attr.value)));
    Ok(attrs)
}

fn duplicate(name: &str, location: Location) -> XamlError {
    XamlError::parse(format!("duplicate attribute `{name}`"), location)
}
