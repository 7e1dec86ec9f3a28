//! Xtype resolution — which tags a class may legally use, and which
//! class owns a given tag.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::index::ComponentIndex;

/// Resolve an xtype to its owning class.
///
/// There is exactly one owner per xtype at any instant (index invariant),
/// so no tie-break is needed. `None` means "unknown / not indexed", which
/// is distinct from "known but not required" — the latter is the
/// diagnostics engine's concern.
pub fn resolve_xtype<'i>(index: &'i ComponentIndex, xtype: &str) -> Option<&'i str> {
    index.class_of(xtype)
}

/// The set of xtypes reachable from a class.
///
/// Drawn from the class itself, its declared requires, and every base
/// class. A class whose requires list is empty (or that never declared
/// one) counts as base and is implicitly visible everywhere, mirroring
/// framework base-class availability. Recomputed per query so it always
/// reflects current index contents.
pub fn reachable_xtypes(index: &ComponentIndex, class_name: &str) -> FxHashSet<SmolStr> {
    let mut reachable = FxHashSet::default();

    let mut add_xtypes_of = |class: &str, reachable: &mut FxHashSet<SmolStr>| {
        if let Some(xtypes) = index.xtypes_of(class) {
            reachable.extend(xtypes.iter().cloned());
        }
    };

    add_xtypes_of(class_name, &mut reachable);

    if let Some(requires) = index.requires_of(class_name) {
        for required in requires {
            add_xtypes_of(required, &mut reachable);
        }
    }

    for class in index.classes() {
        if index.requires_of(class).is_none_or(|r| r.is_empty()) {
            add_xtypes_of(class, &mut reachable);
        }
    }

    reachable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::ComponentDecl;

    fn decl(class: &str, xtypes: &[&str], requires: &[&str]) -> ComponentDecl {
        ComponentDecl {
            class_name: SmolStr::new(class),
            xtypes: xtypes.iter().map(|x| SmolStr::new(x)).collect(),
            requires: requires.iter().map(|r| SmolStr::new(r)).collect(),
            requires_value_span: None,
        }
    }

    fn sample_index() -> ComponentIndex {
        let mut index = ComponentIndex::new();
        index.apply("App.view.Grid", vec![decl("App.view.Grid", &["grid"], &[])]);
        index.apply(
            "App.view.Panel",
            vec![decl("App.view.Panel", &["panel"], &["App.view.Grid"])],
        );
        index.apply(
            "App.view.Window",
            vec![decl(
                "App.view.Window",
                &["appwindow"],
                &["App.view.Panel"],
            )],
        );
        index
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let index = sample_index();
        assert_eq!(resolve_xtype(&index, "grid"), Some("App.view.Grid"));
        assert_eq!(resolve_xtype(&index, "nope"), None);
    }

    #[test]
    fn test_reachable_includes_self_requires_and_base() {
        let index = sample_index();
        let reachable = reachable_xtypes(&index, "App.view.Panel");
        // panel: own tag; grid: via requires (and base); appwindow not required
        assert!(reachable.contains("panel"));
        assert!(reachable.contains("grid"));
        assert!(!reachable.contains("appwindow"));
    }

    #[test]
    fn test_base_classes_visible_everywhere() {
        let index = sample_index();
        // Window never requires Grid, but Grid has no requires -> base
        let reachable = reachable_xtypes(&index, "App.view.Window");
        assert!(reachable.contains("grid"));
        assert!(reachable.contains("appwindow"));
        assert!(!reachable.contains("panel"));
    }

    #[test]
    fn test_reachable_of_unindexed_class_is_base_tags_only() {
        let index = sample_index();
        let reachable = reachable_xtypes(&index, "App.view.Missing");
        assert_eq!(
            reachable,
            FxHashSet::from_iter([SmolStr::new("grid")])
        );
    }

    #[test]
    fn test_reachable_reflects_deletion() {
        let mut index = sample_index();
        index.retract("App.view.Grid");
        let reachable = reachable_xtypes(&index, "App.view.Panel");
        assert!(!reachable.contains("grid"));
        assert!(reachable.contains("panel"));
    }

    #[test]
    fn test_unknown_requires_contribute_nothing() {
        let mut index = ComponentIndex::new();
        index.apply(
            "App.view.Panel",
            vec![decl("App.view.Panel", &["panel"], &["App.view.Gone"])],
        );
        let reachable = reachable_xtypes(&index, "App.view.Panel");
        assert_eq!(reachable, FxHashSet::from_iter([SmolStr::new("panel")]));
    }
}
