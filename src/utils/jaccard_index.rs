use crate::models::TokenSet;

/// Compute the Jaccard index between two token sets.
///
/// Returns `|intersection| / |union|`. Two empty sets have no overlap to measure and
/// score `0.0`.
pub fn jaccard_index(haystack: &TokenSet, needle: &TokenSet) -> f64 {
    let union_size = haystack.union_count(needle);

    if union_size == 0 {
        return 0.0;
    }

    haystack.intersection_count(needle) as f64 / union_size as f64
}
