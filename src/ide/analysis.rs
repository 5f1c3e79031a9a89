//! Analysis: the request-scoped entry point for diagram features.
//!
//! An `Analysis` borrows everything a request needs: the document, the
//! frontend's semantic model, the connector lookup, the local function
//! index and the configuration. Nothing is global; callers decide which of
//! these live per process and which per request.
//!
//! ## Usage
//!
//! ```ignore
//! let analysis = Analysis::new(&document, &semantic_model, &lookup, &local_index, &config);
//!
//! let items = analysis.available_nodes(position)?;
//! let clients = analysis.visible_clients(position)?;
//! ```

use rowan::TextSize;

use super::{AvailableNodesGenerator, VariableCategory};
use crate::base::Position;
use crate::central::{ConnectorLookup, LocalIndex};
use crate::config::GeneratorConfig;
use crate::error::FlowModelError;
use crate::model::{Client, Item};
use crate::semantic::SemanticModel;
use crate::syntax::Document;

/// Read-only view over one document and its collaborators.
#[derive(Clone, Copy)]
pub struct Analysis<'a> {
    document: &'a Document,
    semantic_model: &'a dyn SemanticModel,
    lookup: &'a dyn ConnectorLookup,
    local_index: &'a LocalIndex,
    config: &'a GeneratorConfig,
}

impl<'a> Analysis<'a> {
    pub fn new(
        document: &'a Document,
        semantic_model: &'a dyn SemanticModel,
        lookup: &'a dyn ConnectorLookup,
        local_index: &'a LocalIndex,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            document,
            semantic_model,
            lookup,
            local_index,
            config,
        }
    }

    // ==================== Diagram features ====================

    /// Palette entries legal at `position`.
    pub fn available_nodes(&self, position: Position) -> Result<Vec<Item>, FlowModelError> {
        AvailableNodesGenerator::new(self).generate(position)
    }

    /// Connection clients visible at `position`.
    pub fn visible_clients(&self, position: Position) -> Result<Vec<Client>, FlowModelError> {
        super::visible_clients(self, position)
    }

    /// Variables visible at `position`, grouped by scope.
    pub fn visible_variable_types(
        &self,
        position: Position,
    ) -> Result<Vec<VariableCategory>, FlowModelError> {
        super::visible_variable_types(self, position)
    }

    // ==================== Accessors ====================

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn semantic_model(&self) -> &'a dyn SemanticModel {
        self.semantic_model
    }

    pub fn lookup(&self) -> &'a dyn ConnectorLookup {
        self.lookup
    }

    pub fn local_index(&self) -> &'a LocalIndex {
        self.local_index
    }

    pub fn config(&self) -> &'a GeneratorConfig {
        self.config
    }

    /// Offset of `position`, or an error if it lies outside the document.
    pub fn offset_of(&self, position: Position) -> Result<TextSize, FlowModelError> {
        self.document
            .offset_of(position)
            .ok_or_else(|| FlowModelError::invalid_position(position.line, position.column))
    }
}
