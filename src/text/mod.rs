//! Token-level view of one source unit.
//!
//! ```text
//! contents ─→ TokenSequence ─→ TokenStreamView ─→ Parser
//!                  │
//!                  └─→ first token per line
//! ```
//!
//! [`TextStructure`] owns all of it for a single run.

mod text_structure;
mod token;
mod token_stream_view;

pub use text_structure::{SyntaxTree, TextStructure};
pub use token::{Token, TokenKind, TokenSequence};
pub use token_stream_view::TokenStreamView;
