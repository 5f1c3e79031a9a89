//! Foundation types for flow model generation.
//!
//! This module provides the primitives used throughout the crate:
//! - [`Position`], [`LineRange`] - Line/column cursor locations (0-indexed)
//! - [`LineIndex`] - Line/column ↔ byte offset conversion
//! - [`TextRange`], [`TextSize`] - Byte offsets into a document
//!
//! This module has NO dependencies on other flowmodel modules.

mod line_index;
mod position;

pub use line_index::LineIndex;
pub use position::{LineRange, Position};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
