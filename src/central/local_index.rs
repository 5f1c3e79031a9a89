//! Index of standalone library functions.
//!
//! These entries do not depend on the cursor; every available-nodes response
//! ends with them.

use std::path::Path;

use crate::config::GeneratorConfig;
use crate::error::FlowModelError;
use crate::model::Item;

/// Pre-categorized library functions, usually loaded once per process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalIndex {
    functions: Vec<Item>,
}

impl LocalIndex {
    pub fn new(functions: Vec<Item>) -> Self {
        Self { functions }
    }

    /// Parse a JSON array of palette items.
    pub fn from_json_str(json: &str) -> Result<Self, FlowModelError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_path(path: &Path) -> Result<Self, FlowModelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load the index named by the configuration, or an empty one.
    pub fn load(config: &GeneratorConfig) -> Result<Self, FlowModelError> {
        match &config.local_index_path {
            Some(path) => {
                let index = Self::from_path(path)?;
                tracing::debug!(
                    path = %path.display(),
                    categories = index.functions.len(),
                    "Loaded local function index"
                );
                Ok(index)
            }
            None => Ok(Self::default()),
        }
    }

    /// A copy of the indexed entries, for appending to a response.
    pub fn functions(&self) -> Vec<Item> {
        self.functions.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
