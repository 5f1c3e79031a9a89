//! Generator configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::FlowModelError;

/// Where package icons are served from.
pub const DEFAULT_ICON_BASE_URL: &str = "https://bcentral-packageicons.azureedge.net/images";

/// Settings shared by every request in a process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Base URL for package icons, without a trailing slash
    pub icon_base_url: String,
    /// JSON file holding the standalone library function index
    pub local_index_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            local_index_path: None,
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON configuration. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, FlowModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, FlowModelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Icon URL for a library package.
    pub fn icon_url(&self, org: &str, package: &str, version: &str) -> String {
        format!(
            "{}/{}_{}_{}.png",
            self.icon_base_url.trim_end_matches('/'),
            org,
            package,
            version
        )
    }
}
