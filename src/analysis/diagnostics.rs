//! Rendering of rejected tokens into stable, greppable messages.
//!
//! Two formats, both single-line:
//!
//! ```text
//! token: "<text>" at <pos>[-<pos>]
//! token: <<EOF>> at <pos>
//! <file>:<pos>: <phase> error, rejected "<text>" (<url>).[  <explanation>]
//! <file>:<pos>: <phase> error (unexpected EOF) (<url>).[  <explanation>]
//! ```
//!
//! Downstream tools match on these strings; field order and punctuation
//! must not change.

use std::fmt::Write;

use text_size::TextSize;

use super::rejected::RejectedToken;
use crate::text::{TextStructure, Token};

/// Base URL for all help links.
pub const HELP_BASE_URL: &str = "https://github.com/syntaxis/syntaxis-base";

/// Link to documentation about `topic`.
///
/// Every topic currently resolves to the project's base URL.
pub fn help_topic_url(_topic: &str) -> String {
    HELP_BASE_URL.to_string()
}

/// Compact positional rendering of one token.
///
/// A single `line:col` when the token's last character starts at most one
/// column after its first, `line:col-col` for a longer token on one line,
/// `line:col-line:col` for a token spanning lines.
pub fn token_error_message(data: &TextStructure, token: &Token) -> String {
    let map = data.line_column_map();
    if token.is_eof() {
        let end = map.get(TextSize::of(data.contents()));
        return format!("token: <<EOF>> at {end}");
    }

    let text = token.text(data.contents());
    let left = map.get(token.left());
    // start of the token's last character, not one past it
    let right = match text.chars().next_back() {
        Some(last) => map.get(token.right() - TextSize::of(last)),
        None => left,
    };

    let mut message = format!("token: \"{text}\" at {left}");
    if left.line == right.line {
        // an upper bound only when it is more than one column away
        if right.column > left.column + 1 {
            // write! into a String cannot fail
            let _ = write!(message, "-{}", right.column + 1);
        }
    } else {
        let _ = write!(message, "-{right}");
    }
    message
}

/// Linter-style rendering: filename, phase, quoted text and help link.
pub fn linter_token_error_message(
    data: &TextStructure,
    filename: &str,
    rejected: &RejectedToken,
) -> String {
    let map = data.line_column_map();
    let url = help_topic_url("syntax-error");
    let mut message = if rejected.token.is_eof() {
        let end = map.get(TextSize::of(data.contents()));
        format!(
            "{filename}:{end}: {} error (unexpected EOF) ({url}).",
            rejected.phase
        )
    } else {
        let left = map.get(rejected.token.left());
        format!(
            "{filename}:{left}: {} error, rejected \"{}\" ({url}).",
            rejected.phase,
            rejected.token.text(data.contents())
        )
    };
    if !rejected.explanation.is_empty() {
        message.push_str("  ");
        message.push_str(&rejected.explanation);
    }
    message
}
