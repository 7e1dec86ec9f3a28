//! Project configuration, read from `extjs.conf.json` at the workspace
//! root.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Name of the configuration file at the workspace root.
pub const CONFIG_FILE_NAME: &str = "extjs.conf.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Workspace configuration for the indexer.
///
/// Both fields default to empty strings when the configuration file is
/// absent, which makes file identities plain dotted relative paths.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    /// Directory under the workspace root that holds the class sources,
    /// e.g. `app`.
    pub source_root: String,
    /// Namespace prepended to every derived class name, e.g. `App`.
    pub namespace_prefix: String,
}

impl ProjectConfig {
    /// Load the configuration from a workspace root.
    ///
    /// An absent file is not an error: defaults apply. Unreadable or
    /// malformed content is.
    pub fn load(workspace_root: &Path) -> Result<Self, ConfigError> {
        let path = workspace_root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
