//! Completion — offering every registered xtype at an insertion point.

use smol_str::SmolStr;

use crate::hir::ComponentIndex;

/// One completion entry. Host-agnostic: the label and insert text are
/// plain strings, mapped to the editor's completion item shape at the
/// boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// What the list displays, the bare tag.
    pub label: SmolStr,
    /// What gets inserted, a complete `xtype` member.
    pub insert_text: String,
    /// The owning class, shown as the entry's detail.
    pub detail: SmolStr,
}

/// Completion items for all registered xtypes, in registration order.
///
/// No reachability filtering happens here: offering a tag the class has
/// not required yet is intentional, the diagnostic pass then tells the
/// user to add the require (or the ensure-require rewrite does it).
pub fn xtype_completions(index: &ComponentIndex) -> Vec<CompletionItem> {
    index
        .known_xtypes()
        .map(|(xtype, class_name)| CompletionItem {
            label: xtype.clone(),
            insert_text: format!("xtype: \"{xtype}\","),
            detail: class_name.clone(),
        })
        .collect()
}

/// Convenience for hosts that only need the tag names.
pub fn known_xtype_names(index: &ComponentIndex) -> Vec<SmolStr> {
    index.known_xtypes().map(|(xtype, _)| xtype.clone()).collect()
}
