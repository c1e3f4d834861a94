//! Foundation types for the syntaxis toolkit.
//!
//! This module provides the positional primitives used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Byte offsets and ranges into source text
//! - [`LineColumn`] - A 0-based line/column pair
//! - [`LineColumnMap`] - Offset to line/column conversion over one buffer
//!
//! This module has NO dependencies on other syntaxis modules.

mod line_column;

pub use line_column::{LineColumn, LineColumnMap};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
