//! Connector and action metadata lookup.
//!
//! The library database is an external collaborator; [`ConnectorLookup`] is
//! its seam. [`ConnectorIndex`] is a JSON-backed in-memory implementation and
//! [`CachedLookup`] memoizes any backend for the lifetime of a process.

use std::path::Path;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{FlowModelError, LookupError};

/// What kind of callable a [`FunctionResult`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FunctionKind {
    Function,
    Connector,
    RemoteFunction,
    ResourceFunction,
}

/// One callable from the library database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResult {
    pub function_id: i64,
    pub name: SmolStr,
    #[serde(default)]
    pub description: String,
    pub kind: FunctionKind,
    pub org: SmolStr,
    pub package_name: SmolStr,
    pub version: SmolStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

/// Read-only access to connector metadata.
pub trait ConnectorLookup {
    /// The callable `symbol` of kind `kind` in `org/module`.
    fn get_function(
        &self,
        org: &str,
        module: &str,
        symbol: &str,
        kind: FunctionKind,
    ) -> Result<Option<FunctionResult>, LookupError>;

    /// Actions (remote and resource methods) of a connector.
    fn get_connector_actions(&self, function_id: i64) -> Result<Vec<FunctionResult>, LookupError>;
}

#[derive(Deserialize)]
struct RawIndex {
    #[serde(default)]
    connectors: Vec<RawConnector>,
}

#[derive(Deserialize)]
struct RawConnector {
    #[serde(flatten)]
    connector: FunctionResult,
    #[serde(default)]
    actions: Vec<FunctionResult>,
}

/// In-memory connector metadata, loadable from JSON.
///
/// ```json
/// { "connectors": [ { "functionId": 1, "name": "init", "kind": "CONNECTOR",
///     "org": "ballerina", "packageName": "http", "version": "2.10.0",
///     "actions": [ { "functionId": 2, "name": "get", ... } ] } ] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConnectorIndex {
    functions: Vec<FunctionResult>,
    actions: FxHashMap<i64, Vec<FunctionResult>>,
}

impl ConnectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an index file. Two connectors sharing a `functionId` make the
    /// file corrupt: their actions could not be told apart.
    pub fn from_json_str(json: &str) -> Result<Self, FlowModelError> {
        let raw: RawIndex = serde_json::from_str(json)?;
        let mut index = Self::new();
        for RawConnector { connector, actions } in raw.connectors {
            if index.actions.contains_key(&connector.function_id) {
                return Err(LookupError::corrupt(format!(
                    "duplicate connector id {} ({}/{})",
                    connector.function_id, connector.org, connector.package_name
                ))
                .into());
            }
            index.insert_connector(connector, actions);
        }
        Ok(index)
    }

    pub fn load(path: &Path) -> Result<Self, FlowModelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Register a connector together with its actions.
    pub fn insert_connector(&mut self, connector: FunctionResult, actions: Vec<FunctionResult>) {
        self.actions
            .entry(connector.function_id)
            .or_default()
            .extend(actions);
        self.functions.push(connector);
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl ConnectorLookup for ConnectorIndex {
    fn get_function(
        &self,
        org: &str,
        module: &str,
        symbol: &str,
        kind: FunctionKind,
    ) -> Result<Option<FunctionResult>, LookupError> {
        Ok(self
            .functions
            .iter()
            .find(|f| f.org == org && f.package_name == module && f.name == symbol && f.kind == kind)
            .cloned())
    }

    fn get_connector_actions(&self, function_id: i64) -> Result<Vec<FunctionResult>, LookupError> {
        Ok(self.actions.get(&function_id).cloned().unwrap_or_default())
    }
}

type FunctionKey = (SmolStr, SmolStr, SmolStr, FunctionKind);

/// Memoizes a [`ConnectorLookup`] backend.
///
/// Successful answers are cached, failures are not. Safe to share across
/// concurrent requests; when two requests race on the same key both query
/// the backend and the first stored answer wins.
#[derive(Debug)]
pub struct CachedLookup<L> {
    inner: L,
    functions: Mutex<FxHashMap<FunctionKey, Option<FunctionResult>>>,
    actions: Mutex<FxHashMap<i64, Vec<FunctionResult>>>,
}

impl<L: ConnectorLookup> CachedLookup<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            functions: Mutex::new(FxHashMap::default()),
            actions: Mutex::new(FxHashMap::default()),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Drop every cached answer.
    pub fn clear(&self) {
        self.functions.lock().clear();
        self.actions.lock().clear();
    }
}

impl<L: ConnectorLookup> ConnectorLookup for CachedLookup<L> {
    fn get_function(
        &self,
        org: &str,
        module: &str,
        symbol: &str,
        kind: FunctionKind,
    ) -> Result<Option<FunctionResult>, LookupError> {
        let key: FunctionKey = (org.into(), module.into(), symbol.into(), kind);
        if let Some(cached) = self.functions.lock().get(&key) {
            tracing::trace!(org, module, symbol, "connector lookup cache hit");
            return Ok(cached.clone());
        }

        let result = self.inner.get_function(org, module, symbol, kind)?;
        Ok(self
            .functions
            .lock()
            .entry(key)
            .or_insert(result)
            .clone())
    }

    fn get_connector_actions(&self, function_id: i64) -> Result<Vec<FunctionResult>, LookupError> {
        if let Some(cached) = self.actions.lock().get(&function_id) {
            tracing::trace!(function_id, "connector actions cache hit");
            return Ok(cached.clone());
        }

        let result = self.inner.get_connector_actions(function_id)?;
        Ok(self
            .actions
            .lock()
            .entry(function_id)
            .or_insert(result)
            .clone())
    }
}
