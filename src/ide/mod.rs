//! Diagram features: high-level APIs for editor requests.
//!
//! This module provides the interface between the semantic model and the
//! low-code diagram view. Each function corresponds to an editor request.
//!
//! ## Design Principles
//!
//! 1. **Request scoped**: Every result is built fresh and owned by the caller
//! 2. **No wire types**: Returns model types; JSON is layered on by the caller
//! 3. **Injected collaborators**: Semantic model and lookups come in through [`Analysis`]

mod analysis;
mod available_nodes;
mod connections;
mod visible;

pub use analysis::Analysis;
pub use available_nodes::AvailableNodesGenerator;
pub use visible::{VariableCategory, VisibleVariable, visible_clients, visible_variable_types};
