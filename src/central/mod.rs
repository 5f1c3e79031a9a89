//! Library metadata collaborators.
//!
//! - [`ConnectorLookup`] - connector constructors and their actions
//! - [`LocalIndex`] - standalone library functions appended to every palette

mod local_index;
mod lookup;

pub use local_index::LocalIndex;
pub use lookup::{CachedLookup, ConnectorIndex, ConnectorLookup, FunctionKind, FunctionResult};
