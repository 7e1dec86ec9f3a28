//! Semantic model — declaration extraction, the component index, xtype
//! resolution, and validation diagnostics.
//!
//! ## Data flow
//!
//! ```text
//! file text
//!     │  syntax::parse
//!     ▼
//! syntax tree
//!     │  extract_components
//!     ▼
//! Vec<ComponentDecl>          (transient, per parse)
//!     │  ComponentIndex::apply
//!     ▼
//! ComponentIndex              (class ↔ xtype ↔ requires mappings)
//!     │
//!     ├── resolve::resolve_xtype / reachable_xtypes
//!     └── diagnostics::validate
//! ```

mod diagnostics;
mod extract;
mod index;
mod resolve;

pub use diagnostics::{Diagnostic, Severity, codes, validate};
pub use extract::{ComponentDecl, XtypeUsage, extract_components, extract_xtype_usages};
pub use index::ComponentIndex;
pub use resolve::{reachable_xtypes, resolve_xtype};
