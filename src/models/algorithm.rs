use crate::models::Error;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The similarity algorithms available to `compare_string` and `compare_strings`.
///
/// - `Dice`: well-suited for comparing short documents or messages. Scores range from
///   `0.0` to `1.0`; higher is more similar.
/// - `Levenshtein`: well-suited for fuzzy matching of single words or identifiers. Scores
///   are edit counts; lower is more similar.
/// - `Jaccard`: well-suited for multi-word strings or tag sets. Scores range from `0.0`
///   to `1.0`; higher is more similar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Dice,
    Levenshtein,
    Jaccard,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dice => "dice",
            Algorithm::Levenshtein => "levenshtein",
            Algorithm::Jaccard => "jaccard",
        }
    }

    /// Whether a larger score means a stronger match under this algorithm.
    pub fn higher_is_better(self) -> bool {
        !matches!(self, Algorithm::Levenshtein)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dice" => Ok(Algorithm::Dice),
            "levenshtein" => Ok(Algorithm::Levenshtein),
            "jaccard" => Ok(Algorithm::Jaccard),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Accepts the same names as `FromStr`: surrounding whitespace and letter case are ignored.
impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
