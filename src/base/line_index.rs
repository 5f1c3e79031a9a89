//! Line/column ↔ offset conversion.
//!
//! Columns count Unicode scalar values, so a column never splits a
//! multi-byte character.

use std::sync::Arc;

use text_size::{TextRange, TextSize};

use super::{LineRange, Position};

/// Maps between byte offsets and (line, column) positions of one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    text: Arc<str>,
    /// Byte offset at which each line starts. Always contains `0`.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Index the given text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from(idx as u32 + 1));
            }
        }
        Self {
            text: Arc::from(text),
            line_starts,
        }
    }

    /// Number of lines (a trailing newline opens an empty last line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Total length of the indexed text.
    pub fn len(&self) -> TextSize {
        TextSize::of(self.text.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Convert a position to a byte offset.
    ///
    /// Returns `None` when the line does not exist or the column lies past
    /// the end of that line.
    pub fn offset(&self, position: Position) -> Option<TextSize> {
        let line = self.line_text(position.line)?;
        let line_start = self.line_starts[position.line];

        if position.column == 0 {
            return Some(line_start);
        }

        let mut chars = line.char_indices().skip(position.column);
        match chars.next() {
            Some((byte, _)) => Some(line_start + TextSize::from(byte as u32)),
            None if line.chars().count() == position.column => {
                Some(line_start + TextSize::of(line))
            }
            None => None,
        }
    }

    /// Convert a byte offset to a position. Offsets past the end clamp to the
    /// end of the text; offsets inside a multi-byte char round down to its
    /// start.
    pub fn line_col(&self, offset: TextSize) -> Position {
        let mut end = usize::from(offset.min(self.len()));
        while !self.text.is_char_boundary(end) {
            end -= 1;
        }
        let offset = TextSize::from(end as u32);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = usize::from(self.line_starts[line]);
        let column = self.text[line_start..end].chars().count();
        Position::new(line, column)
    }

    /// Convert a byte range to a line range.
    pub fn line_range(&self, range: TextRange) -> LineRange {
        LineRange::new(self.line_col(range.start()), self.line_col(range.end()))
    }

    /// Text of a line without its terminating newline.
    fn line_text(&self, line: usize) -> Option<&str> {
        let start = usize::from(*self.line_starts.get(line)?);
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| usize::from(*next) - 1)
            .unwrap_or(self.text.len());
        let text = &self.text[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}
