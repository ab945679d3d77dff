use crate::models::TokenSet;
use std::borrow::Cow;

/// One side of a comparison: either plain text or an already-built token set.
#[derive(Copy, Clone, Debug)]
pub enum Comparand<'a> {
    Text(&'a str),
    Tokens(&'a TokenSet),
}

impl<'a> Comparand<'a> {
    /// The string form used by the Dice coefficient and the Levenshtein distance.
    ///
    /// Token sets are concatenated in insertion order with no separator.
    pub fn to_text(self) -> Cow<'a, str> {
        match self {
            Comparand::Text(text) => Cow::Borrowed(text),
            Comparand::Tokens(token_set) => Cow::Owned(token_set.flatten()),
        }
    }

    /// The token set form used by the Jaccard index.
    pub fn to_token_set(self) -> Cow<'a, TokenSet> {
        match self {
            Comparand::Text(text) => Cow::Owned(TokenSet::from_text(text)),
            Comparand::Tokens(token_set) => Cow::Borrowed(token_set),
        }
    }
}

impl<'a> From<&'a str> for Comparand<'a> {
    fn from(text: &'a str) -> Self {
        Comparand::Text(text)
    }
}

impl<'a> From<&'a String> for Comparand<'a> {
    fn from(text: &'a String) -> Self {
        Comparand::Text(text.as_str())
    }
}

impl<'a> From<&'a TokenSet> for Comparand<'a> {
    fn from(token_set: &'a TokenSet) -> Self {
        Comparand::Tokens(token_set)
    }
}
