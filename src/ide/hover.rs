//! Hover — describing the class behind an xtype literal.

use smol_str::SmolStr;

use crate::hir::{ComponentIndex, resolve_xtype};

/// Hover content for an xtype literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    pub xtype: SmolStr,
    pub class_name: SmolStr,
    /// Markdown body shown in the hover popup.
    pub contents: String,
}

/// Describe the class that owns an xtype. Unknown tags hover nothing
/// rather than an error popup.
pub fn describe(index: &ComponentIndex, xtype: &str) -> Option<HoverResult> {
    let class_name = resolve_xtype(index, xtype)?;
    Some(HoverResult {
        xtype: SmolStr::new(xtype),
        class_name: SmolStr::new(class_name),
        contents: format!("**{class_name}**\n\nxtype: `{xtype}`"),
    })
}
