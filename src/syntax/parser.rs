//! Tolerant JavaScript parsing built on tree-sitter.

use std::cell::RefCell;

use thiserror::Error;
use tree_sitter::{LanguageError, Node, Tree};

use crate::base::{LineCol, Span, TextRange, TextSize};

/// The current document text could not be turned into a syntax tree.
///
/// Callers absorb this into "no contribution for this update"; it never
/// crosses the index-maintainer boundary as a crash.
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("incompatible tree-sitter JavaScript grammar: {0}")]
    Language(#[from] LanguageError),
    #[error("parser produced no syntax tree")]
    NoTree,
}

/// Parse JavaScript source into a tree-sitter tree.
///
/// The returned tree is best-effort: malformed regions are represented
/// as `ERROR` nodes instead of failing the whole parse, so extraction
/// over a document mid-edit still sees the well-formed parts.
pub fn parse(text: &str) -> Result<Tree, ParseFailure> {
    thread_local! {
        static PARSER: RefCell<tree_sitter::Parser> =
            RefCell::new(tree_sitter::Parser::new());
    }

    PARSER.with(|parser| {
        let mut parser = parser.borrow_mut();
        parser.set_language(&tree_sitter_javascript::LANGUAGE.into())?;
        parser.parse(text, None).ok_or(ParseFailure::NoTree)
    })
}

/// Whether the tree contains any `ERROR` or missing nodes.
pub fn tree_has_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// Iterate all named nodes of a tree in source (preorder) order.
pub fn preorder(tree: &Tree) -> impl Iterator<Item = Node<'_>> {
    let mut stack = vec![tree.root_node()];
    std::iter::from_fn(move || {
        let node = stack.pop()?;
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
        Some(node)
    })
}

/// The inner value of a string literal node, without the quotes.
///
/// Returns `None` for non-string nodes and for literals too malformed to
/// carry a value. Escape sequences are kept as written; class names and
/// type tags do not use them in practice.
pub fn string_literal_value<'t>(node: &Node<'_>, text: &'t str) -> Option<&'t str> {
    if node.kind() != "string" {
        return None;
    }
    let range = node.byte_range();
    let raw = text.get(range)?;
    if raw.len() < 2 {
        return None;
    }
    // An unterminated literal recovered with a zero-width closing quote
    // ends right after its content, which may sit inside a multibyte
    // character; `get` rejects that instead of panicking.
    raw.get(1..raw.len() - 1)
}

/// The span of a syntax node: byte range plus 0-indexed line/column.
pub fn node_span(node: &Node<'_>) -> Span {
    let range = node.byte_range();
    Span::new(
        TextRange::new(
            TextSize::from(range.start as u32),
            TextSize::from(range.end as u32),
        ),
        LineCol::new(
            node.start_position().row as u32,
            node.start_position().column as u32,
        ),
        LineCol::new(
            node.end_position().row as u32,
            node.end_position().column as u32,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let tree = parse("var x = 1;").unwrap();
        assert!(!tree_has_errors(&tree));
    }

    #[test]
    fn test_parse_malformed_still_yields_tree() {
        let tree = parse("Ext.define('App.x', { xtype: ").unwrap();
        assert!(tree_has_errors(&tree));
    }

    #[test]
    fn test_string_literal_value() {
        let text = "var a = 'grid';";
        let tree = parse(text).unwrap();
        let string = preorder(&tree).find(|n| n.kind() == "string").unwrap();
        assert_eq!(string_literal_value(&string, text), Some("grid"));
    }

    #[test]
    fn test_unterminated_multibyte_literal_yields_no_value() {
        // recovery gives the literal a zero-width closing quote, so its
        // range ends inside the final character
        let text = "var a = { xtype: 'gé\n};";
        let tree = parse(text).unwrap();
        let values: Vec<&str> = preorder(&tree)
            .filter_map(|node| string_literal_value(&node, text))
            .collect();
        assert!(values.is_empty());
    }

    #[test]
    fn test_node_span_coordinates() {
        let text = "var a;\nvar b = 'x';";
        let tree = parse(text).unwrap();
        let string = preorder(&tree).find(|n| n.kind() == "string").unwrap();
        let span = node_span(&string);
        assert_eq!(span.start.line, 1);
        assert_eq!(span.start.col, 8);
        assert_eq!(u32::from(span.range.start()), 15);
    }
}
