//! Syntax layer: the lossless CST an external frontend lowers into.
//!
//! We never parse. The compiler frontend produces its own tree and replays it
//! through [`TreeBuilder`]; this module only offers navigation over the result.
//!
//! ```text
//! Frontend tree
//!     ↓
//! TreeBuilder → GreenNode (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! Document → position lookup, ancestor walks
//! ```

mod builder;
mod document;
mod syntax_kind;

pub use builder::TreeBuilder;
pub use document::Document;
pub use syntax_kind::{Construct, FlowLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
