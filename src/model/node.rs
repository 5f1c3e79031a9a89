//! Palette entries: display metadata plus structural codedata.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::NodeKind;

/// Display metadata for a node or category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl Metadata {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            icon: None,
            keywords: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the icon URL.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the search keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Structural identity of a node: its kind and, for library-backed nodes,
/// where it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Codedata {
    pub node: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Codedata {
    pub fn new(node: NodeKind) -> Self {
        Self {
            node,
            org: None,
            module: None,
            object: None,
            symbol: None,
            version: None,
            id: None,
        }
    }

    pub fn with_org(mut self, org: impl Into<SmolStr>) -> Self {
        self.org = Some(org.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<SmolStr>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_object(mut self, object: impl Into<SmolStr>) -> Self {
        self.object = Some(object.into());
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<SmolStr>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<SmolStr>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// A leaf entry of the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableNode {
    pub metadata: Metadata,
    pub codedata: Codedata,
    pub enabled: bool,
}

impl AvailableNode {
    pub fn new(metadata: Metadata, codedata: Codedata, enabled: bool) -> Self {
        Self {
            metadata,
            codedata,
            enabled,
        }
    }

    /// An enabled entry with the kind's default label and description.
    pub fn from_kind(kind: NodeKind) -> Self {
        Self::new(
            Metadata::new(kind.label()).with_description(kind.description()),
            Codedata::new(kind),
            true,
        )
    }

    pub fn kind(&self) -> NodeKind {
        self.codedata.node
    }
}
