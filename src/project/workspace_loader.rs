//! Workspace loading — initial bulk indexing of all source files.

use std::path::{Path, PathBuf};

use crate::ide::AnalysisHost;

/// Loads workspace files on demand.
pub struct WorkspaceLoader;

impl WorkspaceLoader {
    pub fn new() -> Self {
        Self
    }

    /// Index every `.js` file under the host's configured source root.
    ///
    /// Unreadable files are collected into the error summary but never
    /// abort the pass; files that fail to parse contribute no
    /// declarations and are handled inside the host.
    pub fn load_workspace(&self, host: &mut AnalysisHost) -> Result<(), String> {
        let root = host.source_root_path();
        if !root.is_dir() {
            return Err(format!("Source root not found: {}", root.display()));
        }

        let paths = collect_source_files(&root)?;
        let mut errors = Vec::new();

        for path in paths {
            match std::fs::read_to_string(&path) {
                Ok(text) => host.index_document(&path, &text),
                Err(e) => errors.push(format!("{}: {}", path.display(), e)),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "Failed to load {} file(s):\n  {}",
                errors.len(),
                errors.join("\n  ")
            ))
        }
    }
}

impl Default for WorkspaceLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively collect the `.js` files under a directory.
///
/// Enumeration order has no semantic effect on the index, classes are
/// keyed independently.
pub fn collect_source_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let mut results = Vec::new();
    collect_recursive(dir, &mut results)?;
    Ok(results)
}

fn collect_recursive(dir: &Path, results: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() {
            collect_recursive(&path, results)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("js") {
            results.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_only_js_recursively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("view/nested")).unwrap();
        std::fs::write(dir.path().join("Main.js"), "").unwrap();
        std::fs::write(dir.path().join("view/Grid.js"), "").unwrap();
        std::fs::write(dir.path().join("view/nested/Deep.js"), "").unwrap();
        std::fs::write(dir.path().join("view/styles.css"), "").unwrap();

        let mut paths = collect_source_files(dir.path()).unwrap();
        paths.sort();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Main.js", "view/Grid.js", "view/nested/Deep.js"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        assert!(collect_source_files(Path::new("/definitely/not/here")).is_err());
    }
}
