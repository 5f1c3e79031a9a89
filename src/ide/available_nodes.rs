//! Nodes that can be inserted at a cursor position.
//!
//! The innermost enclosing loop or block construct decides what is legal:
//!
//! | Enclosing construct                           | Offered                            |
//! |-----------------------------------------------|------------------------------------|
//! | `while`, `foreach`                            | defaults + `break`, `continue`     |
//! | `if`, `lock`, `transaction`, `match`, `do`, `on fail` | defaults                   |
//! | none                                          | defaults                           |
//!
//! `stop` is decided separately from the enclosing function's return type.

use rowan::{TextRange, TextSize};

use super::Analysis;
use super::connections::ConnectionCandidate;
use crate::base::Position;
use crate::central::{FunctionKind, FunctionResult};
use crate::error::{FlowModelError, LookupError};
use crate::model::{
    AvailableNode, Category, CategoryBuilder, CategoryName, Codedata, Item, Metadata, NodeKind,
};
use crate::semantic::Symbol;
use crate::syntax::{Construct, SyntaxNode};

/// Object name of a connector's client class.
const CLIENT_SYMBOL: &str = "Client";
/// Symbol name of a connector's constructor.
const INIT_SYMBOL: &str = "init";

/// Builds the palette for one request. Consumed by [`generate`](Self::generate).
pub struct AvailableNodesGenerator<'a> {
    analysis: &'a Analysis<'a>,
    root: CategoryBuilder,
}

impl<'a> AvailableNodesGenerator<'a> {
    pub fn new(analysis: &'a Analysis<'a>) -> Self {
        Self {
            analysis,
            root: CategoryBuilder::new(),
        }
    }

    /// Connections, then flow nodes for the cursor's context, then the
    /// standalone library functions.
    pub fn generate(mut self, position: Position) -> Result<Vec<Item>, FlowModelError> {
        let offset = self.analysis.offset_of(position)?;

        let mut connections: Vec<Category> = self
            .analysis
            .semantic_model()
            .visible_symbols(self.analysis.document(), position)
            .iter()
            .filter_map(|symbol| self.connection(symbol))
            .collect();
        connections.sort_by(|a, b| a.label().cmp(b.label()));
        self.root
            .step_in(CategoryName::Connections)
            .items(connections.into_iter().map(Item::Category))
            .step_out();

        self.flow_nodes(offset);

        let mut items = self.root.build().items;
        items.extend(self.analysis.local_index().functions());
        Ok(items)
    }

    fn flow_nodes(&mut self, offset: TextSize) {
        let document = self.analysis.document();
        let node = document
            .find_node(TextRange::empty(offset))
            .unwrap_or_else(|| document.root().clone());

        for ancestor in node.ancestors() {
            match ancestor.kind().construct() {
                Construct::Iterating => {
                    tracing::trace!(kind = ?ancestor.kind(), "cursor inside iterating block");
                    self.default_nodes();
                    self.stop_node(&node);
                    self.root
                        .step_in(CategoryName::Control)
                        .node(NodeKind::Break)
                        .node(NodeKind::Continue)
                        .step_out();
                    return;
                }
                Construct::Branching => {
                    tracing::trace!(kind = ?ancestor.kind(), "cursor inside branching block");
                    self.default_nodes();
                    self.stop_node(&node);
                    return;
                }
                Construct::Other => {}
            }
        }

        tracing::trace!("cursor at function body level");
        self.default_nodes();
        self.stop_node(&node);
    }

    fn default_nodes(&mut self) {
        let function = AvailableNode::new(
            Metadata::new("Function Call").with_description("Both project and utility functions"),
            Codedata::new(NodeKind::Function),
            true,
        );

        self.root
            .step_in(CategoryName::Statement)
            .node(NodeKind::Variable)
            .node(NodeKind::Assign)
            .available_node(function)
            .node(NodeKind::DataMapper)
            .step_out();

        self.root
            .step_in(CategoryName::Control)
            .node(NodeKind::If)
            .node(NodeKind::Match)
            .node(NodeKind::While)
            .node(NodeKind::Foreach)
            .node(NodeKind::Return)
            .step_out();

        self.root
            .step_in(CategoryName::ErrorHandling)
            .node(NodeKind::Fail)
            .node(NodeKind::Panic)
            .step_out();

        // TODO: offer NodeKind::ErrorHandler and a CategoryName::Concurrency group
        // (Transaction, Commit, Rollback, Retry, Lock, Start) once the diagram
        // can render them.
    }

    fn stop_node(&mut self, node: &SyntaxNode) {
        if self.is_stop_available(node) {
            self.root
                .step_in(CategoryName::Control)
                .node(NodeKind::Stop)
                .step_out();
        }
    }

    /// `stop` ends a function whose return type is absent or nil. Any
    /// enclosing function, method or resource with such a return type makes
    /// it available; unresolved definitions do not.
    fn is_stop_available(&self, node: &SyntaxNode) -> bool {
        let semantic_model = self.analysis.semantic_model();
        node.ancestors()
            .filter(|n| n.kind().is_function_like())
            .any(|definition| {
                let Some(symbol) = semantic_model.symbol(&definition) else {
                    return false;
                };
                let Some(function) = symbol.as_function() else {
                    return false;
                };
                match &function.return_type {
                    None => true,
                    Some(ty) => semantic_model.is_subtype_of_nil(ty),
                }
            })
    }

    /// One category per connection symbol, holding its actions. Any failure
    /// drops the symbol.
    fn connection(&self, symbol: &Symbol) -> Option<Category> {
        let candidate = match ConnectionCandidate::from_symbol(symbol) {
            Ok(candidate) => candidate,
            Err(reason) => {
                tracing::trace!(symbol = ?symbol.name(), %reason, "not a connection");
                return None;
            }
        };

        let module = candidate.module;
        let codedata = Codedata::new(NodeKind::NewConnection)
            .with_org(module.org.clone())
            .with_module(module.name.clone())
            .with_version(module.version.clone())
            .with_object(CLIENT_SYMBOL)
            .with_symbol(INIT_SYMBOL);

        match self.fetch_actions(&codedata) {
            Ok(actions) if actions.is_empty() => {
                tracing::debug!(symbol = candidate.name(), "skipping connection without actions");
                None
            }
            Ok(actions) => Some(Category::new(Metadata::new(candidate.name()), actions)),
            Err(err) => {
                tracing::debug!(symbol = candidate.name(), error = %err, "skipping connection");
                None
            }
        }
    }

    fn fetch_actions(&self, codedata: &Codedata) -> Result<Vec<Item>, LookupError> {
        let (Some(org), Some(module), Some(symbol)) =
            (&codedata.org, &codedata.module, &codedata.symbol)
        else {
            return Ok(Vec::new());
        };

        let lookup = self.analysis.lookup();
        let Some(connector) = lookup.get_function(org, module, symbol, FunctionKind::Connector)?
        else {
            return Ok(Vec::new());
        };

        Ok(lookup
            .get_connector_actions(connector.function_id)?
            .iter()
            .map(|action| self.action_node(&connector, action).into())
            .collect())
    }

    fn action_node(&self, connector: &FunctionResult, action: &FunctionResult) -> AvailableNode {
        let icon = self.analysis.config().icon_url(
            &connector.org,
            &connector.package_name,
            &connector.version,
        );
        AvailableNode::new(
            Metadata::new(action.name.as_str())
                .with_description(action.description.clone())
                .with_icon(icon),
            Codedata::new(NodeKind::ActionCall)
                .with_org(connector.org.clone())
                .with_module(connector.package_name.clone())
                .with_object(CLIENT_SYMBOL)
                .with_symbol(action.name.clone())
                .with_id(action.function_id),
            true,
        )
    }
}
