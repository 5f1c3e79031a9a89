//! In-memory semantic model.
//!
//! A frontend adapter that has already resolved everything can push its
//! facts into a `SemanticSnapshot` instead of implementing
//! [`SemanticModel`] against live compiler state.

use rustc_hash::FxHashMap;
use text_size::TextRange;

use super::{SemanticModel, Symbol};
use crate::base::Position;
use crate::syntax::{Document, SyntaxKind, SyntaxNode};

#[derive(Debug, Clone)]
struct ScopedSymbol {
    /// `None` means visible everywhere in the document
    scope: Option<TextRange>,
    symbol: Symbol,
}

/// Resolved symbols for one document.
#[derive(Debug, Clone, Default)]
pub struct SemanticSnapshot {
    node_symbols: FxHashMap<(SyntaxKind, TextRange), Symbol>,
    visible: Vec<ScopedSymbol>,
}

impl SemanticSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `node` to `symbol`.
    pub fn bind(&mut self, node: &SyntaxNode, symbol: impl Into<Symbol>) -> &mut Self {
        self.bind_range(node.kind(), node.text_range(), symbol)
    }

    /// Resolve the node of `kind` spanning `range` to `symbol`.
    pub fn bind_range(
        &mut self,
        kind: SyntaxKind,
        range: TextRange,
        symbol: impl Into<Symbol>,
    ) -> &mut Self {
        self.node_symbols.insert((kind, range), symbol.into());
        self
    }

    /// Declare a symbol visible throughout the document.
    pub fn declare(&mut self, symbol: impl Into<Symbol>) -> &mut Self {
        self.visible.push(ScopedSymbol {
            scope: None,
            symbol: symbol.into(),
        });
        self
    }

    /// Declare a symbol visible only inside `scope` (end inclusive).
    pub fn declare_in(&mut self, scope: TextRange, symbol: impl Into<Symbol>) -> &mut Self {
        self.visible.push(ScopedSymbol {
            scope: Some(scope),
            symbol: symbol.into(),
        });
        self
    }
}

impl SemanticModel for SemanticSnapshot {
    fn visible_symbols(&self, document: &Document, position: Position) -> Vec<Symbol> {
        let Some(offset) = document.offset_of(position) else {
            return Vec::new();
        };
        self.visible
            .iter()
            .filter(|scoped| {
                scoped
                    .scope
                    .is_none_or(|scope| scope.contains_inclusive(offset))
            })
            .map(|scoped| scoped.symbol.clone())
            .collect()
    }

    fn symbol(&self, node: &SyntaxNode) -> Option<Symbol> {
        self.node_symbols
            .get(&(node.kind(), node.text_range()))
            .cloned()
    }
}
