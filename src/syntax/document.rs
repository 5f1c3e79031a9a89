//! A lowered, type-checked program unit.

use rowan::{NodeOrToken, TextRange, TextSize};

use super::SyntaxNode;
use crate::base::{LineIndex, Position};

/// One source document as supplied by the frontend.
///
/// Immutable: an edit produces a new `Document`.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    root: SyntaxNode,
    line_index: LineIndex,
}

impl Document {
    /// Wrap a lowered syntax tree.
    pub fn new(name: impl Into<String>, root: SyntaxNode) -> Self {
        let line_index = LineIndex::new(&root.text().to_string());
        Self {
            name: name.into(),
            root,
            line_index,
        }
    }

    /// File name the frontend reported for this document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root of the syntax tree (the module part).
    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Byte offset of a cursor position, if it lies inside the document.
    pub fn offset_of(&self, position: Position) -> Option<TextSize> {
        self.line_index.offset(position)
    }

    /// Innermost non-terminal node whose range covers `range`.
    ///
    /// A zero-width range selects the node enclosing that offset. Returns
    /// `None` only when the range falls outside the document.
    pub fn find_node(&self, range: TextRange) -> Option<SyntaxNode> {
        if !self.root.text_range().contains_range(range) {
            return None;
        }
        match self.root.covering_element(range) {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(token) => Some(token.parent().unwrap_or_else(|| self.root.clone())),
        }
    }

    /// Innermost non-terminal node enclosing a cursor position.
    pub fn node_at(&self, position: Position) -> Option<SyntaxNode> {
        let offset = self.offset_of(position)?;
        self.find_node(TextRange::empty(offset))
    }
}
