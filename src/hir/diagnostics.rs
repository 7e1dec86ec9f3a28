//! Diagnostics — flagging xtype usages without a backing require.

use std::sync::Arc;

use crate::base::Span;
use crate::hir::{ComponentIndex, extract_xtype_usages, reachable_xtypes};
use crate::syntax;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// The source range the diagnostic underlines.
    pub span: Span,
    pub severity: Severity,
    /// Warning code (e.g. "W0001").
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(span: Span, message: impl Into<Arc<str>>) -> Self {
        Self {
            span,
            severity: Severity::Warning,
            code: None,
            message: message.into(),
        }
    }

    /// Set the warning code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Standard diagnostic codes.
pub mod codes {
    /// An xtype is used without its owning class being required.
    pub const MISSING_REQUIRE: &str = "W0001";
}

/// Validate a document against the index.
///
/// Every `xtype: "<tag>"` usage site whose tag is outside the consuming
/// class's reachable set yields one warning at the literal's range. The
/// scan is best-effort: a document that does not currently parse degrades
/// to no diagnostics for this pass rather than an error, and the returned
/// set fully replaces the prior one for the document.
pub fn validate(text: &str, class_name: &str, index: &ComponentIndex) -> Vec<Diagnostic> {
    let tree = match syntax::parse(text) {
        Ok(tree) => tree,
        Err(failure) => {
            tracing::debug!(class = class_name, %failure, "skipping validation pass");
            return Vec::new();
        }
    };

    let reachable = reachable_xtypes(index, class_name);

    extract_xtype_usages(&tree, text)
        .into_iter()
        .filter(|usage| !reachable.contains(&usage.xtype))
        .map(|usage| {
            Diagnostic::warning(
                usage.span,
                format!(
                    "component providing xtype \"{}\" is not declared in requires",
                    usage.xtype
                ),
            )
            .with_code(codes::MISSING_REQUIRE)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::ComponentDecl;
    use smol_str::SmolStr;

    fn indexed(entries: &[(&str, &[&str], &[&str])]) -> ComponentIndex {
        let mut index = ComponentIndex::new();
        for (class, xtypes, requires) in entries {
            index.apply(
                class,
                vec![ComponentDecl {
                    class_name: SmolStr::new(class),
                    xtypes: xtypes.iter().map(|x| SmolStr::new(x)).collect(),
                    requires: requires.iter().map(|r| SmolStr::new(r)).collect(),
                    requires_value_span: None,
                }],
            );
        }
        index
    }

    #[test]
    fn test_flags_exactly_the_unrequired_usage() {
        let index = indexed(&[
            ("App.view.Grid", &["grid"], &[]),
            ("App.view.Toolbar", &["toolbar"], &["App.view.Grid"]),
            (
                "App.view.Panel",
                &["panel"],
                &["App.view.Grid"],
            ),
        ]);
        let text = r#"
            Ext.define('App.view.Panel', {
                xtype: 'panel',
                requires: ['App.view.Grid'],
                items: [{ xtype: 'grid' }, { xtype: 'toolbar' }],
            });
        "#;

        let diagnostics = validate(text, "App.view.Panel", &index);

        assert_eq!(diagnostics.len(), 1);
        let diagnostic = &diagnostics[0];
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(diagnostic.code.as_deref(), Some(codes::MISSING_REQUIRE));
        assert_eq!(&text[diagnostic.span.range], "toolbar");
        assert!(diagnostic.message.contains("\"toolbar\""));
    }

    #[test]
    fn test_clean_document_has_no_diagnostics() {
        let index = indexed(&[
            ("App.view.Grid", &["grid"], &[]),
            ("App.view.Panel", &["panel"], &["App.view.Grid"]),
        ]);
        let text = "var config = { xtype: 'grid' };";

        assert!(validate(text, "App.view.Panel", &index).is_empty());
    }

    #[test]
    fn test_own_xtype_never_flagged() {
        let index = indexed(&[("App.view.Panel", &["panel"], &["App.view.Gone"])]);
        let text = "Ext.define('App.view.Panel', { xtype: 'panel' });";

        assert!(validate(text, "App.view.Panel", &index).is_empty());
    }

    #[test]
    fn test_unknown_xtype_flagged() {
        let index = indexed(&[("App.view.Panel", &["panel"], &[])]);
        let text = "var config = { xtype: 'nonexistent' };";

        let diagnostics = validate(text, "App.view.Panel", &index);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_unterminated_multibyte_literal_degrades_to_empty() {
        let index = indexed(&[("App.view.Panel", &["panel"], &[])]);
        // the literal's recovered range ends inside the 'é'
        let text = "var a = { xtype: 'gé\n};";

        assert!(validate(text, "App.view.Panel", &index).is_empty());
    }

    #[test]
    fn test_mid_edit_document_does_not_crash() {
        let index = indexed(&[("App.view.Panel", &["panel"], &[])]);
        // a pair in a well-formed region is still validated; the broken
        // trailer contributes nothing
        let text = "var a = { xtype: 'ghost' };\nExt.define('App.view.Panel', {";

        let diagnostics = validate(text, "App.view.Panel", &index);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(&text[diagnostics[0].span.range], "ghost");
    }
}
