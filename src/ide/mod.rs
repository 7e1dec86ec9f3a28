//! IDE features — high-level APIs for an editor host.
//!
//! This module is the interface between the semantic model and whatever
//! editor surface consumes it. Each function returns plain data; LSP (or
//! other host) types are converted at the host boundary, never here.
//!
//! The recommended entry point is [`AnalysisHost`]: it owns all mutable
//! state, consumes file events in delivery order, and hands out
//! [`Analysis`] snapshots for querying.

mod analysis;
mod completion;
mod ensure_require;
mod goto;
mod hover;

pub use analysis::{Analysis, AnalysisHost, DocumentDiagnostics, FileEvent};
pub use completion::{CompletionItem, known_xtype_names, xtype_completions};
pub use ensure_require::{RequiresEdit, ensure_requires};
pub use goto::{DefinitionLocation, resolve_definition_location};
pub use hover::{HoverResult, describe};
