//! Filtered projection of a token sequence for parser consumption.

use super::token::Token;

/// Indices into a [`TokenSequence`](super::TokenSequence), strictly
/// increasing, always ending with the index of the EOF token.
///
/// Which tokens are significant is decided by the caller (typically
/// "everything but whitespace and comments"); EOF is kept regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStreamView {
    indices: Vec<usize>,
}

impl TokenStreamView {
    /// Build a view over `tokens`, keeping those for which `keep` holds.
    ///
    /// `tokens` is expected to end with its EOF token. Earlier tokens tagged
    /// EOF are not treated as the terminator.
    pub fn new<F>(tokens: &[Token], keep: F) -> Self
    where
        F: Fn(&Token) -> bool,
    {
        let Some((last, body)) = tokens.split_last() else {
            return Self::default();
        };
        let mut indices: Vec<usize> = body
            .iter()
            .enumerate()
            .filter(|(_, token)| !token.is_eof() && keep(*token))
            .map(|(index, _)| index)
            .collect();
        if last.is_eof() || keep(last) {
            indices.push(body.len());
        }
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The `position`-th token of the view.
    pub fn get<'a>(&self, tokens: &'a [Token], position: usize) -> Option<&'a Token> {
        self.indices
            .get(position)
            .and_then(|&index| tokens.get(index))
    }

    /// Iterate the viewed tokens in order.
    pub fn tokens<'a>(&'a self, tokens: &'a [Token]) -> impl Iterator<Item = &'a Token> + 'a {
        self.indices.iter().filter_map(move |&index| tokens.get(index))
    }
}
