use crate::models::Score;
use serde::{Deserialize, Serialize};

/// A candidate paired with its score against the subject of a ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub target: String,
    pub rating: Score,
}

/// A stored element paired with its score against a needle, as returned by
/// `SimilaritySet::get_similar`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarityEntry<T> {
    pub haystack: T,
    pub similarity: Score,
}
