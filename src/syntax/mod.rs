//! Syntax layer — host-language (JavaScript) parsing.
//!
//! The declaration DSL lives inside ordinary JavaScript source, so this
//! layer reuses the off-the-shelf tree-sitter JavaScript grammar rather
//! than a hand-written parser. tree-sitter trees are error-tolerant:
//! a document mid-edit still yields a tree, with `ERROR` nodes marking
//! the malformed regions, and node-local extraction keeps working.

mod parser;

pub use parser::{
    ParseFailure, node_span, parse, preorder, string_literal_value, tree_has_errors,
};
