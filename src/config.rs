use crate::constants::DEFAULT_ALGORITHM;
use crate::models::SimilaritySetConfig;

pub const DEFAULT_SIMILARITY_SET_CONFIG: &SimilaritySetConfig = &SimilaritySetConfig {
    default_algorithm: DEFAULT_ALGORITHM,
    similarity_threshold: 0.80,
    include_exact: true,
};
