//! Declaration extraction — walking a syntax tree for `Ext.define` calls.
//!
//! Extraction is a pure function over the tree. All shape narrowing is
//! internal: a candidate call node either normalizes into a complete
//! [`ComponentDecl`] or yields nothing, and a single malformed member
//! (for example a `requires` array holding a non-string element) drops
//! only that member, never the whole declaration.

use smol_str::SmolStr;
use tree_sitter::{Node, Tree};

use crate::base::Span;
use crate::syntax::{node_span, preorder, string_literal_value};

/// The namespace under which `alias` values register an xtype.
const WIDGET_NAMESPACE: &str = "widget";

/// A normalized class declaration, produced per parse and folded into
/// the index; not retained afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentDecl {
    /// Fully-qualified class name, the first `Ext.define` argument.
    pub class_name: SmolStr,
    /// Declared xtypes, in declaration order.
    pub xtypes: Vec<SmolStr>,
    /// Declared required class names, in declaration order; raw form may
    /// hold duplicates, the index deduplicates.
    pub requires: Vec<SmolStr>,
    /// Span of the `requires` array literal, kept for the ensure-require
    /// rewrite. Absent when the declaration has no valid requires member.
    pub requires_value_span: Option<Span>,
}

/// A single `xtype: "<literal>"` usage site in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XtypeUsage {
    pub xtype: SmolStr,
    /// Span narrowed to the literal's inner text (quotes excluded).
    pub span: Span,
}

/// Extract every recognized class declaration from a syntax tree.
///
/// Only the exact shape `Ext.define(<string>, <object>)` yields a
/// declaration; anything else is silently skipped.
pub fn extract_components(tree: &Tree, text: &str) -> Vec<ComponentDecl> {
    preorder(tree)
        .filter(|node| node.kind() == "call_expression")
        .filter_map(|node| component_decl(&node, text))
        .collect()
}

/// Extract every xtype usage site in a document.
///
/// This scans `pair` nodes directly, so it degrades gracefully on a
/// document that does not currently parse as a whole: pairs inside
/// well-formed regions are still found, malformed regions contribute
/// nothing.
pub fn extract_xtype_usages(tree: &Tree, text: &str) -> Vec<XtypeUsage> {
    let mut usages = Vec::new();
    for node in preorder(tree) {
        if node.kind() != "pair" {
            continue;
        }
        if pair_key_name(&node, text) != Some("xtype") {
            continue;
        }
        let Some(value) = node.child_by_field_name("value") else {
            continue;
        };
        if let Some(xtype) = string_literal_value(&value, text) {
            usages.push(XtypeUsage {
                xtype: SmolStr::new(xtype),
                span: literal_inner_span(&value),
            });
        }
    }
    usages
}

/// Normalize one candidate call node into a declaration, or nothing.
fn component_decl(call: &Node<'_>, text: &str) -> Option<ComponentDecl> {
    let callee = call.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    let object = callee.child_by_field_name("object")?;
    let property = callee.child_by_field_name("property")?;
    if object.kind() != "identifier"
        || node_text(&object, text) != Some("Ext")
        || node_text(&property, text) != Some("define")
    {
        return None;
    }

    let arguments = call.child_by_field_name("arguments")?;
    let mut cursor = arguments.walk();
    let args: Vec<Node<'_>> = arguments
        .named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect();
    let [name_arg, config_arg] = args.as_slice() else {
        return None;
    };
    let class_name = string_literal_value(name_arg, text)?;
    if config_arg.kind() != "object" {
        return None;
    }

    let mut decl = ComponentDecl {
        class_name: SmolStr::new(class_name),
        xtypes: Vec::new(),
        requires: Vec::new(),
        requires_value_span: None,
    };

    let mut cursor = config_arg.walk();
    for member in config_arg.named_children(&mut cursor) {
        if member.kind() != "pair" {
            continue;
        }
        let Some(key) = pair_key_name(&member, text) else {
            continue;
        };
        let Some(value) = member.child_by_field_name("value") else {
            continue;
        };
        match key {
            "requires" if decl.requires_value_span.is_none() => {
                if let Some(requires) = parse_requires(&value, text) {
                    decl.requires = requires;
                    decl.requires_value_span = Some(node_span(&value));
                }
            }
            "xtype" => {
                for literal in literal_values(&value, text) {
                    decl.xtypes.push(SmolStr::new(literal));
                }
            }
            "alias" => {
                for literal in literal_values(&value, text) {
                    if let Some(xtype) = widget_alias_name(literal) {
                        decl.xtypes.push(SmolStr::new(xtype));
                    }
                }
            }
            _ => {}
        }
    }

    Some(decl)
}

/// Parse a `requires` member value. Any non-string element invalidates
/// the entire member, matching the declaration syntax's contract.
fn parse_requires(value: &Node<'_>, text: &str) -> Option<Vec<SmolStr>> {
    if value.kind() != "array" {
        return None;
    }
    let mut cursor = value.walk();
    let mut requires = Vec::new();
    for element in value.named_children(&mut cursor) {
        if element.kind() == "comment" {
            continue;
        }
        requires.push(SmolStr::new(string_literal_value(&element, text)?));
    }
    Some(requires)
}

/// The string values of a member that accepts either a single string
/// literal or an array of them. Non-string array elements are skipped
/// individually here (unlike `requires`, where one poisons the member).
fn literal_values<'t>(value: &Node<'_>, text: &'t str) -> Vec<&'t str> {
    match value.kind() {
        "string" => string_literal_value(value, text).into_iter().collect(),
        "array" => {
            let mut cursor = value.walk();
            value
                .named_children(&mut cursor)
                .filter_map(|element| string_literal_value(&element, text))
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Map an `alias` value like `widget.grid` to its xtype (`grid`).
/// Values under any other namespace are discarded.
fn widget_alias_name(value: &str) -> Option<&str> {
    let (namespace, name) = value.rsplit_once('.')?;
    (namespace == WIDGET_NAMESPACE).then_some(name)
}

/// The identifier name of a pair's key. Computed and string keys are not
/// recognized as declaration members.
fn pair_key_name<'t>(pair: &Node<'_>, text: &'t str) -> Option<&'t str> {
    let key = pair.child_by_field_name("key")?;
    if key.kind() != "property_identifier" {
        return None;
    }
    node_text(&key, text)
}

fn node_text<'t>(node: &Node<'_>, text: &'t str) -> Option<&'t str> {
    text.get(node.byte_range())
}

/// Span of a string literal's contents, with the surrounding quotes
/// excluded so diagnostics underline only the tag itself.
///
/// Only called for literals whose value was sliced successfully, so both
/// trimmed endpoints are known char boundaries (the quote bytes).
fn literal_inner_span(literal: &Node<'_>) -> Span {
    let mut span = node_span(literal);
    if u32::from(span.range.len()) >= 2 {
        span.range = crate::base::TextRange::new(
            span.range.start() + crate::base::TextSize::from(1),
            span.range.end() - crate::base::TextSize::from(1),
        );
        span.start.col += 1;
        span.end.col = span.end.col.saturating_sub(1);
    }
    span
}
