//! Project management — configuration, file identity, workspace loading.

mod config;
mod identity;
mod workspace_loader;

pub use config::{CONFIG_FILE_NAME, ConfigError, ProjectConfig};
pub use identity::{class_for_path, path_for_class};
pub use workspace_loader::{WorkspaceLoader, collect_source_files};
