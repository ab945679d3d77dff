use crate::models::Algorithm;

/// Name used when rendering a set and when prefixing error messages.
pub const SIMILARITY_SET_NAME: &str = "SimilaritySet";

pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Dice;

/// Sentinel written in place of the best match index when a ranking has no best match.
pub const NO_BEST_MATCH_INDEX: i64 = -1;
