pub mod dice_coefficient;
pub use dice_coefficient::dice_coefficient;

pub mod is_separator_whitespace;
pub use is_separator_whitespace::is_separator_whitespace;

pub mod jaccard_index;
pub use jaccard_index::jaccard_index;

pub mod levenshtein_distance;
pub use levenshtein_distance::levenshtein_distance;

pub mod split_whitespace_runs;
pub use split_whitespace_runs::split_whitespace_runs;
