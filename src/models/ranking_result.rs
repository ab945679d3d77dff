use crate::constants::NO_BEST_MATCH_INDEX;
use crate::models::Rating;
use crate::types::CandidateIndex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The outcome of ranking several candidates against one subject.
///
/// `ratings` keeps the order the candidates were given in. When there was nothing to
/// rank, `ratings` is empty and there is no best match; the JSON form then carries
/// `"bestMatch": null` and `"bestMatchIndex": -1`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    pub ratings: Vec<Rating>,
    pub best_match: Option<Rating>,
    #[serde(
        serialize_with = "serialize_best_match_index",
        deserialize_with = "deserialize_best_match_index"
    )]
    pub best_match_index: Option<CandidateIndex>,
}

impl RankingResult {
    /// The sentinel returned for invalid or empty candidate lists.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a ranking from ratings in candidate order.
    ///
    /// The first rating wins ties; a later rating only replaces the best when it is
    /// strictly better (a larger coefficient or a smaller distance).
    pub fn from_ratings(ratings: Vec<Rating>) -> Self {
        let mut best_match_index: Option<CandidateIndex> = None;

        for (index, rating) in ratings.iter().enumerate() {
            match best_match_index {
                None => best_match_index = Some(index),
                Some(best_index) => {
                    if rating.rating.is_better_than(&ratings[best_index].rating) {
                        best_match_index = Some(index);
                    }
                }
            }
        }

        let best_match = best_match_index.map(|index| ratings[index].clone());

        Self {
            ratings,
            best_match,
            best_match_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

fn serialize_best_match_index<S>(
    index: &Option<CandidateIndex>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match index {
        Some(index) => serializer.serialize_i64(*index as i64),
        None => serializer.serialize_i64(NO_BEST_MATCH_INDEX),
    }
}

fn deserialize_best_match_index<'de, D>(deserializer: D) -> Result<Option<CandidateIndex>, D::Error>
where
    D: Deserializer<'de>,
{
    let index = i64::deserialize(deserializer)?;

    Ok(usize::try_from(index).ok())
}
