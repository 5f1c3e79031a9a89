//! Lowering an external frontend's tree into our CST.
//!
//! The frontend owns parsing; it walks its own tree and replays it here as
//! `start_node` / `token` / `finish_node` events. `mark` records the current
//! text offset so callers can remember interesting locations (a cursor, a
//! declaration) while lowering.

use rowan::{GreenNodeBuilder, TextSize};

use super::{SyntaxKind, SyntaxNode};

/// Event-driven builder for a lossless syntax tree.
pub struct TreeBuilder {
    builder: GreenNodeBuilder<'static>,
    offset: TextSize,
    depth: usize,
    marks: Vec<TextSize>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
            offset: TextSize::from(0),
            depth: 0,
            marks: Vec::new(),
        }
    }

    /// Open a node. Every `start_node` needs a matching `finish_node`.
    pub fn start_node(&mut self, kind: SyntaxKind) -> &mut Self {
        debug_assert!(!kind.is_token(), "{kind:?} is a token kind");
        self.builder.start_node(kind.into());
        self.depth += 1;
        self
    }

    /// Append a token to the open node.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> &mut Self {
        debug_assert!(kind.is_token(), "{kind:?} is a node kind");
        self.builder.token(kind.into(), text);
        self.offset += TextSize::of(text);
        self
    }

    /// Append a whitespace token.
    pub fn ws(&mut self, text: &str) -> &mut Self {
        self.token(SyntaxKind::WHITESPACE, text)
    }

    /// Close the innermost open node.
    pub fn finish_node(&mut self) -> &mut Self {
        assert!(self.depth > 0, "finish_node without a matching start_node");
        self.builder.finish_node();
        self.depth -= 1;
        self
    }

    /// Record the current text offset.
    pub fn mark(&mut self) -> &mut Self {
        self.marks.push(self.offset);
        self
    }

    /// Text offset of everything lowered so far.
    pub fn offset(&self) -> TextSize {
        self.offset
    }

    /// Finish the tree, returning the root and the recorded marks in order.
    pub fn finish(self) -> (SyntaxNode, Vec<TextSize>) {
        assert_eq!(self.depth, 0, "unbalanced start_node/finish_node");
        let green = self.builder.finish();
        (SyntaxNode::new_root(green), self.marks)
    }
}
