//! Line/column tracking for byte offsets.
//!
//! Diagnostics report positions as `line:column`, both 1-based when
//! displayed. Internally everything is 0-based and columns count bytes.

use std::fmt;

use text_size::TextSize;

/// A position in source text (0-indexed line and byte column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineColumn {
    /// Renders as 1-based `line:column`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Offset to line/column translator over one immutable source buffer.
///
/// Built once per buffer; every offset in `[0, len]` resolves, including
/// the one-past-the-end offset used for end-of-file positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineColumnMap {
    /// Byte offsets where each line starts. `line_starts[0]` is always 0.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineColumnMap {
    /// # Panics
    ///
    /// If `text` is 4 GiB or longer; offsets are `u32` throughout.
    pub fn new(text: &str) -> Self {
        let len = TextSize::of(text);
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(
            text.match_indices('\n')
                .filter_map(|(i, _)| TextSize::try_from(i + 1).ok()),
        );
        Self { line_starts, len }
    }

    /// Resolve `offset` to a line/column pair.
    ///
    /// Offsets past the end of the buffer clamp to the end.
    pub fn get(&self, offset: TextSize) -> LineColumn {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            // line_starts[0] == 0, so the insertion point is at least 1
            Err(next) => next - 1,
        };
        let column = offset - self.line_starts[line];
        LineColumn::new(line, u32::from(column) as usize)
    }

    /// Number of lines, counting a trailing empty line after a final newline.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset at which `line` starts.
    pub fn line_start(&self, line: usize) -> Option<TextSize> {
        self.line_starts.get(line).copied()
    }

    pub fn line_starts(&self) -> &[TextSize] {
        &self.line_starts
    }

    /// Length of the buffer this map was built from.
    pub fn len(&self) -> TextSize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == TextSize::new(0)
    }
}
