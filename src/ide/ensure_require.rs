//! Ensure-require — computing the `requires` rewrite that covers every
//! xtype a document uses.

use smol_str::SmolStr;

use crate::base::Span;
use crate::hir::{ComponentIndex, extract_components, extract_xtype_usages};
use crate::syntax;

/// A single text replacement: the `requires` array literal and the text
/// to put in its place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiresEdit {
    /// Span of the existing array literal, brackets included.
    pub span: Span,
    /// Replacement array literal, e.g. `["App.view.Grid"]`.
    pub new_text: String,
}

/// Compute the rewrite that adds a require for every xtype the document
/// uses whose owning class is not yet listed.
///
/// Returns `None` when there is nothing to do: the document does not
/// parse, no declaration carries a rewritable `requires` array, or every
/// used tag is already covered. Unknown tags are skipped (they are the
/// diagnostic pass's concern, there is no class to add for them), as are
/// framework classes and the declaring class itself. When a rewrite does
/// happen, framework entries already in the list are dropped from the
/// output too.
pub fn ensure_requires(text: &str, index: &ComponentIndex) -> Option<RequiresEdit> {
    let tree = syntax::parse(text).ok()?;
    let decls = extract_components(&tree, text);
    let usages = extract_xtype_usages(&tree, text);

    let decl = decls.iter().find(|d| d.requires_value_span.is_some())?;
    let span = decl.requires_value_span?;

    let mut existing: Vec<SmolStr> = Vec::new();
    for class in &decl.requires {
        if needs_require(class) && !existing.contains(class) {
            existing.push(class.clone());
        }
    }

    let mut additions: Vec<SmolStr> = Vec::new();
    for usage in &usages {
        if decl.xtypes.contains(&usage.xtype) {
            continue;
        }
        let Some(owner) = index.class_of(&usage.xtype) else {
            continue;
        };
        if owner == decl.class_name || !needs_require(owner) {
            continue;
        }
        let owner = SmolStr::new(owner);
        if !existing.contains(&owner) && !additions.contains(&owner) {
            additions.push(owner);
        }
    }

    if additions.is_empty() {
        return None;
    }

    let mut merged: Vec<&str> = existing
        .iter()
        .chain(additions.iter())
        .map(SmolStr::as_str)
        .collect();
    merged.sort_unstable();

    Some(RequiresEdit {
        span,
        new_text: serde_json::to_string(&merged).ok()?,
    })
}

/// Framework classes are globally available and never belong in a
/// `requires` list.
fn needs_require(class_name: &str) -> bool {
    !class_name.starts_with("Ext.")
}
