//! The semantic collaborator interface.

use super::{Symbol, TypeSymbol};
use crate::base::Position;
use crate::syntax::{Document, SyntaxNode};

/// Read-only view of the compiler's semantic model for one document.
///
/// Implementations are supplied by the frontend and must be safe to call
/// from several requests at once; nothing here takes `&mut self`.
pub trait SemanticModel {
    /// Symbols visible at `position` in `document`, in declaration order.
    fn visible_symbols(&self, document: &Document, position: Position) -> Vec<Symbol>;

    /// The symbol a syntax node declares or refers to.
    fn symbol(&self, node: &SyntaxNode) -> Option<Symbol>;

    /// Subtype test against the well-known nil type.
    fn is_subtype_of_nil(&self, ty: &TypeSymbol) -> bool {
        ty.is_subtype_of_nil()
    }
}

impl<M: SemanticModel + ?Sized> SemanticModel for &M {
    fn visible_symbols(&self, document: &Document, position: Position) -> Vec<Symbol> {
        (**self).visible_symbols(document, position)
    }

    fn symbol(&self, node: &SyntaxNode) -> Option<Symbol> {
        (**self).symbol(node)
    }

    fn is_subtype_of_nil(&self, ty: &TypeSymbol) -> bool {
        (**self).is_subtype_of_nil(ty)
    }
}
