//! # extsense-base
//!
//! Core library for indexing ExtJS-style class declarations: class,
//! xtype, and requires extraction, a live component index, and the IDE
//! features built on it.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (analysis host, diagnostics, completion, hover, goto-def)
//!   ↓
//! project   → Configuration, file identity, workspace loading
//!   ↓
//! hir       → Semantic model (declarations, index, resolution, diagnostics)
//!   ↓
//! syntax    → tree-sitter parsing, tree traversal, spans
//!   ↓
//! base      → Primitives (Span, LineCol)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → hir → project → ide)
// ============================================================================

/// Foundation types: Span, LineCol
pub mod base;

/// Syntax: tree-sitter parsing, traversal helpers, node spans
pub mod syntax;

/// High-level IR: declarations, component index, resolution, diagnostics
pub mod hir;

/// Project management: configuration, file identity, workspace loading
pub mod project;

/// IDE features: analysis host, diagnostics, completion, hover, goto-definition
pub mod ide;

// Re-export foundation types
pub use base::{LineCol, Span, TextRange, TextSize};

// Re-export the primary entry points
pub use ide::{Analysis, AnalysisHost, DocumentDiagnostics, FileEvent};
