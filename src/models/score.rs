use crate::types::EditDistance;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A similarity score produced by one of the comparison algorithms.
///
/// Coefficients (Dice, Jaccard) are better when larger; distances (Levenshtein) are
/// better when smaller. Serializes as a bare JSON number.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Distance(EditDistance),
    Coefficient(f64),
}

impl Score {
    /// Whether `self` is a strictly stronger match than `other`.
    ///
    /// Scores of different kinds never compare as better. A `NaN` coefficient is never
    /// better than anything.
    pub fn is_better_than(&self, other: &Score) -> bool {
        match (self, other) {
            (Score::Coefficient(a), Score::Coefficient(b)) => a > b,
            (Score::Distance(a), Score::Distance(b)) => a < b,
            _ => false,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Score::Coefficient(value) => value,
            Score::Distance(distance) => distance as f64,
        }
    }

    pub fn coefficient(&self) -> Option<f64> {
        match *self {
            Score::Coefficient(value) => Some(value),
            Score::Distance(_) => None,
        }
    }

    pub fn distance(&self) -> Option<EditDistance> {
        match *self {
            Score::Distance(distance) => Some(distance),
            Score::Coefficient(_) => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Coefficient(value) => write!(f, "{:.4}", value),
            Score::Distance(distance) => write!(f, "{}", distance),
        }
    }
}
