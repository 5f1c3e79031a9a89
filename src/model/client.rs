//! Connections shown on the diagram canvas.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::base::{LineIndex, LineRange};
use crate::semantic::{VariableScope, VariableSymbol};

const OTHER_CLIENT: &str = "Client";
const HTTP_CLIENT_TYPE: &str = "http:Client";
const HTTP_CLIENT_LABEL: &str = "HTTP Client";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientKind {
    Http,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientScope {
    Local,
    Object,
    Global,
}

impl From<VariableScope> for ClientScope {
    fn from(scope: VariableScope) -> Self {
        match scope {
            VariableScope::Local => Self::Local,
            VariableScope::Object => Self::Object,
            VariableScope::Module | VariableScope::Configurable => Self::Global,
        }
    }
}

/// A connection endpoint declared in the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Stable hash of `line_range`
    pub id: String,
    pub label: String,
    pub kind: ClientKind,
    pub line_range: Option<LineRange>,
    pub scope: ClientScope,
    pub value: Option<String>,
    pub flags: u32,
}

/// Accumulates one [`Client`] at a time; `build` resets it for the next.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    label: String,
    kind: ClientKind,
    line_range: Option<LineRange>,
    scope: ClientScope,
    value: Option<String>,
    flags: u32,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            label: OTHER_CLIENT.to_string(),
            kind: ClientKind::Other,
            line_range: None,
            scope: ClientScope::Global,
            value: None,
            flags: 0,
        }
    }

    /// Take location and name from the declaring variable.
    pub fn variable_symbol(&mut self, symbol: &VariableSymbol, line_index: &LineIndex) -> &mut Self {
        if let Some(location) = symbol.location {
            self.line_range = Some(line_index.line_range(location));
        }
        self.value = Some(symbol.name.to_string());
        self
    }

    /// Set the kind from the type's source spelling.
    pub fn kind(&mut self, type_signature: &str) -> &mut Self {
        if type_signature == HTTP_CLIENT_TYPE {
            self.kind = ClientKind::Http;
            self.label = HTTP_CLIENT_LABEL.to_string();
        }
        self
    }

    pub fn scope(&mut self, scope: ClientScope) -> &mut Self {
        self.scope = scope;
        self
    }

    pub fn flag(&mut self, flag: u32) -> &mut Self {
        self.flags |= flag;
        self
    }

    pub fn build(&mut self) -> Client {
        let mut hasher = FxHasher::default();
        self.line_range.hash(&mut hasher);
        let state = std::mem::take(self);
        Client {
            id: hasher.finish().to_string(),
            label: state.label,
            kind: state.kind,
            line_range: state.line_range,
            scope: state.scope,
            value: state.value,
            flags: state.flags,
        }
    }
}
