use crate::models::Algorithm;

/// Defaults a `SimilaritySet` applies when the caller does not pass them explicitly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimilaritySetConfig {
    /// Algorithm used by `get_similar_by_config`.
    pub default_algorithm: Algorithm,
    /// Dice score an element must strictly exceed to count as similar.
    pub similarity_threshold: f64,
    /// Whether an element equal to the needle counts as similar regardless of score.
    pub include_exact: bool,
}
