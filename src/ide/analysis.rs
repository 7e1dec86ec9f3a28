//! Analysis host and snapshot — the single writer over the component
//! index, and the read-only query surface handed to feature code.
//!
//! The host is driven by [`FileEvent`]s delivered in the order the
//! editor produced them. Each event is folded into the index inside one
//! `&mut self` call, so observers never see a half-applied update. All
//! queries go through an [`Analysis`] snapshot borrowed from the host;
//! the borrow checker enforces that no query can overlap a mutation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use smol_str::SmolStr;

use crate::hir::{
    ComponentIndex, Diagnostic, extract_components, reachable_xtypes, resolve_xtype, validate,
};
use crate::project::{ProjectConfig, class_for_path, path_for_class};
use crate::syntax;

use super::completion::{CompletionItem, known_xtype_names, xtype_completions};
use super::ensure_require::{RequiresEdit, ensure_requires};
use super::goto::{DefinitionLocation, resolve_definition_location};
use super::hover::{HoverResult, describe};

/// A change notification from the editor or file watcher.
#[derive(Clone, Debug)]
pub enum FileEvent {
    /// A document was opened in the editor.
    Opened { path: PathBuf, text: String },
    /// A document's content changed (editor edit or on-disk change).
    Changed { path: PathBuf, text: String },
    /// A document was closed in the editor. The file still exists, so
    /// its index contributions stay; only the cached text is dropped.
    Closed { path: PathBuf },
    /// A source file was deleted.
    Deleted { path: PathBuf },
    /// The editor's active document changed; `None` means no source
    /// document has focus.
    FocusChanged { path: Option<PathBuf> },
    /// The workspace configuration file changed on disk.
    ConfigChanged,
}

/// The validation result for one document. The diagnostics fully replace
/// whatever was previously published for the path, including replacing
/// them with an empty set.
#[derive(Clone, Debug)]
pub struct DocumentDiagnostics {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

/// Owner of all mutable analysis state.
///
/// There is exactly one host per workspace and it is never shared across
/// threads; event handling takes `&mut self`, which is the whole
/// concurrency story.
#[derive(Debug)]
pub struct AnalysisHost {
    workspace_root: PathBuf,
    config: ProjectConfig,
    index: ComponentIndex,
    /// Latest known text per open document, used to re-validate the
    /// active document after index changes elsewhere.
    open_documents: HashMap<PathBuf, String>,
    active_document: Option<PathBuf>,
}

impl AnalysisHost {
    /// Create a host for a workspace, reading `extjs.conf.json` from its
    /// root. A missing or unreadable configuration degrades to defaults.
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        let workspace_root = workspace_root.into();
        let config = Self::read_config(&workspace_root);
        Self::with_config(workspace_root, config)
    }

    /// Create a host with an explicit configuration.
    pub fn with_config(workspace_root: impl Into<PathBuf>, config: ProjectConfig) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            config,
            index: ComponentIndex::new(),
            open_documents: HashMap::new(),
            active_document: None,
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// The directory scanned for source files: the workspace root joined
    /// with the configured source root.
    pub fn source_root_path(&self) -> PathBuf {
        if self.config.source_root.is_empty() {
            self.workspace_root.clone()
        } else {
            self.workspace_root.join(&self.config.source_root)
        }
    }

    /// Parse a document and fold its declarations into the index,
    /// replacing the file's prior contributions.
    ///
    /// A document that fails to parse contributes an empty declaration
    /// set, which retracts its previous entries; a later successful parse
    /// restores them.
    pub fn index_document(&mut self, path: &Path, text: &str) {
        let file_id = class_for_path(&self.config, &self.workspace_root, path);
        let decls = match syntax::parse(text) {
            Ok(tree) => extract_components(&tree, text),
            Err(failure) => {
                tracing::warn!(path = %path.display(), %failure, "could not parse document");
                Vec::new()
            }
        };
        tracing::debug!(
            file = file_id.as_str(),
            declarations = decls.len(),
            "indexed document"
        );
        self.index.apply(&file_id, decls);
    }

    /// Fold one event into the host state.
    ///
    /// Returns the validation output for the document that was
    /// re-validated as a consequence, if any. Events must be applied in
    /// delivery order.
    pub fn apply_event(&mut self, event: FileEvent) -> Option<DocumentDiagnostics> {
        match event {
            FileEvent::Opened { path, text } => {
                self.index_document(&path, &text);
                self.open_documents.insert(path.clone(), text);
                self.validate_document(&path)
            }
            FileEvent::Changed { path, text } => {
                self.index_document(&path, &text);
                if self.open_documents.contains_key(&path) {
                    self.open_documents.insert(path.clone(), text);
                }
                // an edit anywhere can change what the active document
                // may reach, so that is the document re-checked
                self.validate_active()
            }
            FileEvent::Closed { path } => {
                self.open_documents.remove(&path);
                if self.active_document.as_deref() == Some(path.as_path()) {
                    self.active_document = None;
                }
                None
            }
            FileEvent::Deleted { path } => {
                let file_id = class_for_path(&self.config, &self.workspace_root, &path);
                self.index.retract(&file_id);
                self.open_documents.remove(&path);
                if self.active_document.as_deref() == Some(path.as_path()) {
                    self.active_document = None;
                    None
                } else {
                    self.validate_active()
                }
            }
            FileEvent::FocusChanged { path } => {
                self.active_document = path;
                self.validate_active()
            }
            FileEvent::ConfigChanged => {
                self.config = Self::read_config(&self.workspace_root);
                None
            }
        }
    }

    /// A read-only snapshot of the current state.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis {
            workspace_root: &self.workspace_root,
            config: &self.config,
            index: &self.index,
        }
    }

    fn read_config(workspace_root: &Path) -> ProjectConfig {
        match ProjectConfig::load(workspace_root) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(%error, "falling back to default configuration");
                ProjectConfig::default()
            }
        }
    }

    fn validate_active(&self) -> Option<DocumentDiagnostics> {
        let path = self.active_document.clone()?;
        self.validate_document(&path)
    }

    fn validate_document(&self, path: &Path) -> Option<DocumentDiagnostics> {
        let text = self.open_documents.get(path)?;
        let class = class_for_path(&self.config, &self.workspace_root, path);
        Some(DocumentDiagnostics {
            path: path.to_path_buf(),
            diagnostics: validate(text, &class, &self.index),
        })
    }
}

/// Read-only view over host state, the argument surface for every
/// feature query.
#[derive(Clone, Copy, Debug)]
pub struct Analysis<'host> {
    workspace_root: &'host Path,
    config: &'host ProjectConfig,
    index: &'host ComponentIndex,
}

impl Analysis<'_> {
    pub fn index(&self) -> &ComponentIndex {
        self.index
    }

    /// The class that owns an xtype, or `None` when the tag is unknown.
    pub fn resolve_xtype(&self, xtype: &str) -> Option<&str> {
        resolve_xtype(self.index, xtype)
    }

    /// The tags a class may use without a diagnostic.
    pub fn reachable_xtypes(&self, class_name: &str) -> rustc_hash::FxHashSet<SmolStr> {
        reachable_xtypes(self.index, class_name)
    }

    /// The class identity of a document path under this configuration.
    pub fn class_for_path(&self, path: &Path) -> SmolStr {
        class_for_path(self.config, self.workspace_root, path)
    }

    /// The canonical source file location for a class.
    pub fn path_for_class(&self, class_name: &str) -> PathBuf {
        path_for_class(self.config, self.workspace_root, class_name)
    }

    /// Hover content for an xtype.
    pub fn describe(&self, xtype: &str) -> Option<HoverResult> {
        describe(self.index, xtype)
    }

    /// Definition location for an xtype.
    pub fn goto_definition(&self, xtype: &str) -> Option<DefinitionLocation> {
        resolve_definition_location(self.index, self.config, self.workspace_root, xtype)
    }

    /// Completion items for every registered xtype.
    pub fn completions(&self) -> Vec<CompletionItem> {
        xtype_completions(self.index)
    }

    /// Every registered tag name, in registration order.
    pub fn known_xtypes(&self) -> Vec<SmolStr> {
        known_xtype_names(self.index)
    }

    /// Validate a document's text against the current index.
    pub fn validate(&self, text: &str, class_name: &str) -> Vec<Diagnostic> {
        validate(text, class_name, self.index)
    }

    /// Compute the requires rewrite that covers a document's xtype
    /// usages, or `None` when no addition is needed.
    pub fn ensure_requires(&self, text: &str) -> Option<RequiresEdit> {
        ensure_requires(text, self.index)
    }
}
