use crate::types::{Token, TokenRef};
use crate::utils::split_whitespace_runs;
use std::collections::HashSet;

/// An insertion-ordered, deduplicated set of tokens.
///
/// Used directly by the Jaccard index, and flattened (concatenated in insertion order)
/// when handed to the Dice coefficient or the Levenshtein distance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<Token>,
    index: HashSet<Token>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a token set by splitting `text` on runs of whitespace.
    ///
    /// Leading or trailing whitespace yields an empty token, and an empty string yields
    /// a single empty token.
    pub fn from_text(text: &str) -> Self {
        split_whitespace_runs(text).into_iter().collect()
    }

    /// Adds a token, returning `false` if it was already present.
    pub fn insert(&mut self, token: &TokenRef) -> bool {
        if self.index.contains(token) {
            return false;
        }

        self.index.insert(token.to_string());
        self.tokens.push(token.to_string());
        true
    }

    pub fn contains(&self, token: &TokenRef) -> bool {
        self.index.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenRef> {
        self.tokens.iter().map(|token| token.as_str())
    }

    pub fn intersection_count(&self, other: &TokenSet) -> usize {
        self.iter().filter(|token| other.contains(token)).count()
    }

    pub fn union_count(&self, other: &TokenSet) -> usize {
        self.len() + other.iter().filter(|token| !self.contains(token)).count()
    }

    /// Concatenates every token, in insertion order, with no separator.
    pub fn flatten(&self) -> String {
        self.tokens.concat()
    }
}

impl<'a> FromIterator<&'a str> for TokenSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut token_set = TokenSet::new();
        for token in iter {
            token_set.insert(token);
        }
        token_set
    }
}

impl FromIterator<Token> for TokenSet {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut token_set = TokenSet::new();
        for token in iter {
            token_set.insert(&token);
        }
        token_set
    }
}
