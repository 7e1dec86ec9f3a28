//! The component index — class ↔ xtype ↔ requires mappings.
//!
//! An explicitly owned value: construction is cheap, there is no ambient
//! singleton, and every consumer receives the index by reference. The
//! [`AnalysisHost`](crate::ide::AnalysisHost) is the only writer; all
//! other components hold `&ComponentIndex`.
//!
//! Entries are keyed by file identity for retraction: a file's prior
//! contributions are fully retracted before its current ones are applied,
//! inside one `&mut` call, so no reader can observe a half-applied state.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::extract::ComponentDecl;

/// Workspace-wide index over all extracted class declarations.
#[derive(Clone, Debug, Default)]
pub struct ComponentIndex {
    /// Class name -> declared xtypes, declaration order. Last write per
    /// class wins; a re-declared class replaces its prior tags entirely.
    class_to_xtypes: FxHashMap<SmolStr, Vec<SmolStr>>,
    /// Xtype -> owning class. Single owner per xtype: the most recent
    /// declaration to register it wins. Insertion-ordered so completion
    /// lists are stable.
    xtype_to_class: IndexMap<SmolStr, SmolStr>,
    /// Class name -> declared requires, deduplicated, declaration order.
    class_to_requires: FxHashMap<SmolStr, Vec<SmolStr>>,
    /// File identity -> classes that file contributed, for retraction.
    file_classes: FxHashMap<SmolStr, Vec<SmolStr>>,
}

impl ComponentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retract every contribution previously applied for a file.
    ///
    /// Idempotent: retracting an unindexed (or already retracted) file
    /// identity is a no-op. An xtype is only unregistered if the retracted
    /// class still owns it; a newer owner from another file survives.
    pub fn retract(&mut self, file_id: &str) {
        let Some(classes) = self.file_classes.remove(file_id) else {
            return;
        };
        for class in classes {
            if let Some(xtypes) = self.class_to_xtypes.remove(&class) {
                for xtype in xtypes {
                    if self.xtype_to_class.get(&xtype) == Some(&class) {
                        self.xtype_to_class.shift_remove(&xtype);
                    }
                }
            }
            self.class_to_requires.remove(&class);
        }
    }

    /// Apply a file's freshly extracted declarations.
    ///
    /// The file's old contributions are retracted first: classes absent
    /// from the new declaration set are dropped, not merged with.
    pub fn apply(&mut self, file_id: &str, decls: Vec<ComponentDecl>) {
        self.retract(file_id);

        let mut classes = Vec::with_capacity(decls.len());
        for decl in decls {
            for xtype in &decl.xtypes {
                self.xtype_to_class
                    .insert(xtype.clone(), decl.class_name.clone());
            }
            let mut requires = decl.requires;
            dedup_preserving_order(&mut requires);
            self.class_to_xtypes
                .insert(decl.class_name.clone(), decl.xtypes);
            self.class_to_requires
                .insert(decl.class_name.clone(), requires);
            classes.push(decl.class_name);
        }
        if !classes.is_empty() {
            self.file_classes.insert(SmolStr::new(file_id), classes);
        }
    }

    /// The xtypes a class declares, in declaration order.
    pub fn xtypes_of(&self, class_name: &str) -> Option<&[SmolStr]> {
        self.class_to_xtypes.get(class_name).map(Vec::as_slice)
    }

    /// The class currently owning an xtype.
    pub fn class_of(&self, xtype: &str) -> Option<&str> {
        self.xtype_to_class.get(xtype).map(SmolStr::as_str)
    }

    /// The deduplicated requires list a class declares.
    pub fn requires_of(&self, class_name: &str) -> Option<&[SmolStr]> {
        self.class_to_requires.get(class_name).map(Vec::as_slice)
    }

    /// All currently registered xtypes, in registration order.
    pub fn known_xtypes(&self) -> impl Iterator<Item = (&SmolStr, &SmolStr)> {
        self.xtype_to_class.iter()
    }

    /// All currently indexed classes.
    pub fn classes(&self) -> impl Iterator<Item = &SmolStr> {
        self.class_to_xtypes.keys()
    }

    /// Number of indexed classes.
    pub fn len(&self) -> usize {
        self.class_to_xtypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.class_to_xtypes.is_empty()
    }
}

fn dedup_preserving_order(values: &mut Vec<SmolStr>) {
    let mut seen = rustc_hash::FxHashSet::default();
    values.retain(|value| seen.insert(value.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(class: &str, xtypes: &[&str], requires: &[&str]) -> ComponentDecl {
        ComponentDecl {
            class_name: SmolStr::new(class),
            xtypes: xtypes.iter().map(|x| SmolStr::new(x)).collect(),
            requires: requires.iter().map(|r| SmolStr::new(r)).collect(),
            requires_value_span: None,
        }
    }

    #[test]
    fn test_apply_then_query() {
        let mut index = ComponentIndex::new();
        index.apply(
            "App.view.Grid",
            vec![decl("App.view.Grid", &["grid"], &[])],
        );

        assert_eq!(index.class_of("grid"), Some("App.view.Grid"));
        assert_eq!(
            index.xtypes_of("App.view.Grid").unwrap(),
            &[SmolStr::new("grid")]
        );
        assert_eq!(index.requires_of("App.view.Grid").unwrap(), &[] as &[SmolStr]);
    }

    #[test]
    fn test_reapply_drops_stale_contributions() {
        let mut index = ComponentIndex::new();
        index.apply(
            "App.view.Panel",
            vec![
                decl("App.view.Panel", &["panel"], &["App.view.Grid"]),
                decl("App.view.PanelToolbar", &["paneltoolbar"], &[]),
            ],
        );
        // second edit removes PanelToolbar and renames panel's tag
        index.apply(
            "App.view.Panel",
            vec![decl("App.view.Panel", &["mainpanel"], &[])],
        );

        assert_eq!(index.class_of("mainpanel"), Some("App.view.Panel"));
        assert_eq!(index.class_of("panel"), None);
        assert_eq!(index.class_of("paneltoolbar"), None);
        assert!(index.xtypes_of("App.view.PanelToolbar").is_none());
        assert!(index.requires_of("App.view.PanelToolbar").is_none());
    }

    #[test]
    fn test_retract_is_idempotent() {
        let mut index = ComponentIndex::new();
        index.retract("App.view.Unknown");
        index.apply("App.view.Grid", vec![decl("App.view.Grid", &["grid"], &[])]);
        index.retract("App.view.Grid");
        index.retract("App.view.Grid");

        assert!(index.is_empty());
        assert_eq!(index.class_of("grid"), None);
    }

    #[test]
    fn test_xtype_ownership_last_write_wins() {
        let mut index = ComponentIndex::new();
        index.apply("App.a.First", vec![decl("App.a.First", &["grid"], &[])]);
        index.apply("App.a.Second", vec![decl("App.a.Second", &["grid"], &[])]);

        assert_eq!(index.class_of("grid"), Some("App.a.Second"));

        // retracting the older owner must not unregister the newer one
        index.retract("App.a.First");
        assert_eq!(index.class_of("grid"), Some("App.a.Second"));
    }

    #[test]
    fn test_requires_deduplicated() {
        let mut index = ComponentIndex::new();
        index.apply(
            "App.view.Panel",
            vec![decl(
                "App.view.Panel",
                &["panel"],
                &["App.view.Grid", "App.util.Fmt", "App.view.Grid"],
            )],
        );
        assert_eq!(
            index.requires_of("App.view.Panel").unwrap(),
            &[SmolStr::new("App.view.Grid"), SmolStr::new("App.util.Fmt")]
        );
    }

    #[test]
    fn test_apply_empty_clears_file() {
        let mut index = ComponentIndex::new();
        index.apply("App.view.Grid", vec![decl("App.view.Grid", &["grid"], &[])]);
        // transient parse failure: the update contributes nothing
        index.apply("App.view.Grid", Vec::new());

        assert!(index.is_empty());
        assert_eq!(index.class_of("grid"), None);
    }
}
