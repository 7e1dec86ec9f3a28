//! Go to definition — from an xtype literal to the declaring file.

use std::path::{Path, PathBuf};

use smol_str::SmolStr;

use crate::hir::{ComponentIndex, resolve_xtype};
use crate::project::{ProjectConfig, path_for_class};

/// Where an xtype's owning class is declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionLocation {
    pub class_name: SmolStr,
    /// Canonical source path derived from the class name. The file is
    /// not re-read here; a stale index entry resolves to a path that no
    /// longer exists and the host surfaces that as a failed navigation.
    pub path: PathBuf,
}

pub fn resolve_definition_location(
    index: &ComponentIndex,
    config: &ProjectConfig,
    workspace_root: &Path,
    xtype: &str,
) -> Option<DefinitionLocation> {
    let class_name = resolve_xtype(index, xtype)?;
    Some(DefinitionLocation {
        class_name: SmolStr::new(class_name),
        path: path_for_class(config, workspace_root, class_name),
    })
}
