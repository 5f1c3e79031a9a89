//! Semantic layer: what the compiler frontend knows about symbols and types.
//!
//! The diagram services only read from this layer. [`SemanticModel`] is the
//! collaborator seam; [`SemanticSnapshot`] is an in-memory implementation.

mod model;
mod snapshot;
mod symbols;

pub use model::SemanticModel;
pub use snapshot::SemanticSnapshot;
pub use symbols::{
    ClassSymbol, FunctionSymbol, ModuleId, Qualifier, Symbol, TypeReference, TypeSymbol,
    VariableScope, VariableSymbol,
};
