mod config;
pub use config::DEFAULT_SIMILARITY_SET_CONFIG;
mod constants;
pub use constants::{DEFAULT_ALGORITHM, SIMILARITY_SET_NAME};
pub mod models;
pub use models::{
    Algorithm, Comparand, Error, IterationControl, JsonInput, RankingResult, Rating, Score,
    SetElement, SimilarityEntry, SimilaritySet, SimilaritySetConfig, TokenSet,
};
pub mod types;
mod utils;
pub use types::{CandidateIndex, EditDistance, Token, TokenRef};
pub use utils::{
    dice_coefficient, is_separator_whitespace, jaccard_index, levenshtein_distance,
    split_whitespace_runs,
};

use log::debug;
use serde_json::Value;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Compares two strings (or token sets) with the given algorithm.
///
/// - `Algorithm::Dice` returns `Score::Coefficient` in `[0.0, 1.0]`, higher is better.
/// - `Algorithm::Levenshtein` returns `Score::Distance`, lower is better.
/// - `Algorithm::Jaccard` returns `Score::Coefficient` in `[0.0, 1.0]`, higher is better.
///
/// Token sets are concatenated for Dice and Levenshtein and used as-is for Jaccard.
///
/// ### Example:
/// ```rust
/// use similarity_set::{compare_string, Algorithm, Score};
///
/// assert_eq!(
///     compare_string("kitten", "sitting", Algorithm::Levenshtein),
///     Score::Distance(3)
/// );
/// assert_eq!(
///     compare_string("hello", "hello", Algorithm::Dice),
///     Score::Coefficient(1.0)
/// );
/// ```
pub fn compare_string<'a, 'b>(
    haystack: impl Into<Comparand<'a>>,
    needle: impl Into<Comparand<'b>>,
    algorithm: Algorithm,
) -> Score {
    let haystack = haystack.into();
    let needle = needle.into();

    match algorithm {
        Algorithm::Dice => Score::Coefficient(dice_coefficient(
            &haystack.to_text(),
            &needle.to_text(),
        )),
        Algorithm::Levenshtein => Score::Distance(levenshtein_distance(
            &haystack.to_text(),
            &needle.to_text(),
        )),
        Algorithm::Jaccard => Score::Coefficient(jaccard_index(
            &haystack.to_token_set(),
            &needle.to_token_set(),
        )),
    }
}

/// Scores every candidate in `needles` against `haystack` and picks the best match.
///
/// Ratings keep the order of `needles`. The first candidate wins ties; a later one only
/// becomes the best match when it is strictly better. An empty candidate list yields
/// `RankingResult::empty()`.
///
/// ### Example:
/// ```rust
/// use similarity_set::{compare_strings, Algorithm};
///
/// let result = compare_strings("healed", &["sealed", "healthy", "heard"], Algorithm::Dice);
///
/// assert_eq!(result.ratings.len(), 3);
/// assert_eq!(result.best_match_index, Some(0));
/// assert_eq!(result.best_match.unwrap().target, "sealed");
/// ```
pub fn compare_strings<S: AsRef<str>>(
    haystack: &str,
    needles: &[S],
    algorithm: Algorithm,
) -> RankingResult {
    if needles.is_empty() {
        debug!("No candidates to rank against \"{}\"", haystack);
        return RankingResult::empty();
    }

    let ratings: Vec<Rating> = needles
        .iter()
        .map(|needle| Rating {
            target: needle.as_ref().to_string(),
            rating: compare_string(haystack, needle.as_ref(), algorithm),
        })
        .collect();

    let result = RankingResult::from_ratings(ratings);

    if let Some(best_match) = &result.best_match {
        debug!(
            "Best {} match for \"{}\": \"{}\" ({})",
            algorithm, haystack, best_match.target, best_match.rating
        );
    }

    result
}

/// `compare_strings` over loosely-typed JSON input.
///
/// Returns `RankingResult::empty()` unless `haystack` is a string and `needles` is a
/// non-empty array made only of strings. Never fails.
pub fn compare_values(haystack: &Value, needles: &Value, algorithm: Algorithm) -> RankingResult {
    let Some(haystack) = haystack.as_str() else {
        debug!("Ranking skipped: haystack is not a string");
        return RankingResult::empty();
    };

    let Some(needles) = needles.as_array() else {
        debug!("Ranking skipped: needles is not an array");
        return RankingResult::empty();
    };

    let needles: Option<Vec<&str>> = needles.iter().map(Value::as_str).collect();

    match needles {
        Some(needles) => compare_strings(haystack, &needles, algorithm),
        None => {
            debug!("Ranking skipped: needles contains a non-string entry");
            RankingResult::empty()
        }
    }
}
