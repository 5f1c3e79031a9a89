//! # flow-model-base
//!
//! Core library for low-code diagram services: which nodes can be inserted
//! at a cursor, which connections are in scope, and who takes part in a
//! sequence diagram.
//!
//! Parsing and type checking belong to an external compiler frontend. It
//! lowers its tree through [`syntax::TreeBuilder`] and answers semantic
//! questions through [`semantic::SemanticModel`].
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Available nodes, visible clients and variables
//!   ↓
//! sequence  → Sequence diagram participants
//!   ↓
//! central   → Connector lookup, local function index
//!   ↓
//! model     → Palette items, categories, clients
//!   ↓
//! semantic  → Symbols, types, SemanticModel seam
//!   ↓
//! syntax    → Rowan CST, Document, node-at-position
//!   ↓
//! base      → Primitives (Position, LineIndex, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → semantic → model → central → ide)
// ============================================================================

/// Foundation types: Position, LineRange, LineIndex, TextRange
pub mod base;

/// Syntax: Rowan CST lowered from the frontend, Document
pub mod syntax;

/// Semantic model: symbols, types, the SemanticModel collaborator
pub mod semantic;

/// Diagram model: NodeKind, AvailableNode, Category, Client
pub mod model;

/// Library metadata: connector lookup and local function index
pub mod central;

/// Sequence diagrams: participant naming
pub mod sequence;

/// Diagram features: available nodes, visible clients, visible variables
pub mod ide;

/// Generator configuration
pub mod config;

/// Error types
pub mod error;

// Re-export commonly needed items
pub use base::{LineIndex, LineRange, Position, TextRange, TextSize};
pub use config::GeneratorConfig;
pub use error::{FlowModelError, LookupError};
pub use ide::Analysis;
