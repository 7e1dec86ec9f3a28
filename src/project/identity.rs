//! File identity — mapping filesystem locations to component class names
//! and back.
//!
//! The mapping is a pure function of the path, the configured source
//! root, and the namespace prefix. It must be computed identically at
//! index time and at retract time; a file moved across the source-root
//! boundary drifts and its stale entries are only corrected by the next
//! full indexing pass. That is an accepted limitation, not silently
//! repaired.

use std::path::{Path, PathBuf};

use smol_str::SmolStr;

use super::config::ProjectConfig;

/// Derive the component class identity for a source file.
///
/// `<workspace>/<sourceRoot>/view/Grid.js` with namespace prefix `App`
/// becomes `App.view.Grid`.
pub fn class_for_path(config: &ProjectConfig, workspace_root: &Path, path: &Path) -> SmolStr {
    let relative = path.strip_prefix(workspace_root).unwrap_or(path);
    let relative = if config.source_root.is_empty() {
        relative
    } else {
        relative
            .strip_prefix(&config.source_root)
            .unwrap_or(relative)
    };

    let mut segments: Vec<&str> = Vec::new();
    for component in relative.components() {
        if let Some(segment) = component.as_os_str().to_str() {
            segments.push(segment);
        }
    }
    // drop the extension(s) from the file name segment
    if let Some(last) = segments.last_mut() {
        if let Some(dot) = last.find('.') {
            *last = &last[..dot];
        }
    }

    let dotted = segments.join(".");
    if config.namespace_prefix.is_empty() {
        SmolStr::new(dotted)
    } else {
        SmolStr::new(format!("{}.{}", config.namespace_prefix, dotted))
    }
}

/// The canonical filesystem location for a component class, the inverse
/// of [`class_for_path`].
pub fn path_for_class(config: &ProjectConfig, workspace_root: &Path, class_name: &str) -> PathBuf {
    let prefix = format!("{}.", config.namespace_prefix);
    let remainder = if config.namespace_prefix.is_empty() {
        class_name
    } else {
        class_name.strip_prefix(&prefix).unwrap_or(class_name)
    };

    let mut path = workspace_root.to_path_buf();
    if !config.source_root.is_empty() {
        path.push(&config.source_root);
    }
    for segment in remainder.split('.') {
        path.push(segment);
    }
    path.set_extension("js");
    path
}
