pub mod algorithm;
pub use algorithm::Algorithm;

pub mod comparand;
pub use comparand::Comparand;

pub mod config;
pub use config::SimilaritySetConfig;

pub mod error;
pub use error::Error;

pub mod iteration_control;
pub use iteration_control::IterationControl;

pub mod ranking_result;
pub use ranking_result::RankingResult;

pub mod rating;
pub use rating::{Rating, SimilarityEntry};

pub mod score;
pub use score::Score;

pub mod set_element;
pub use set_element::SetElement;

pub mod similarity_set;
pub use similarity_set::{JsonInput, SimilaritySet};

pub mod token_set;
pub use token_set::TokenSet;
