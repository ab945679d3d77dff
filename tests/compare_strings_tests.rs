use serde_json::json;
use similarity_set::{compare_strings, compare_values, Algorithm, RankingResult, Score};

const GREETING_CANDIDATES: [&str; 4] = [
    "hello how are yo",
    "hello sir",
    "hello how are you doing",
    "goodbye gtg to sleep",
];

#[cfg(test)]
mod compare_strings_tests {
    use super::*;

    #[test]
    fn test_best_greeting_match() {
        let result = compare_strings("hello how are you", &GREETING_CANDIDATES, Algorithm::Dice);

        let best_match = result.best_match.clone().expect("Expected a best match");
        let best_rating = best_match.rating.as_f64();

        assert!(
            best_match.target == "hello how are yo"
                || best_match.target == "hello how are you doing"
        );
        assert!(best_rating > result.ratings[1].rating.as_f64());
        assert!(best_rating > result.ratings[3].rating.as_f64());
        assert!(result
            .ratings
            .iter()
            .all(|rating| rating.rating.as_f64() <= best_rating));

        assert_eq!(result.best_match_index, Some(0));
    }

    #[test]
    fn test_ratings_preserve_candidate_order() {
        let result = compare_strings("hello how are you", &GREETING_CANDIDATES, Algorithm::Dice);

        let targets: Vec<&str> = result
            .ratings
            .iter()
            .map(|rating| rating.target.as_str())
            .collect();

        assert_eq!(targets, GREETING_CANDIDATES.to_vec());
    }

    #[test]
    fn test_empty_candidates_yield_sentinel() {
        let needles: [&str; 0] = [];
        let result = compare_strings("x", &needles, Algorithm::Dice);

        assert!(result.ratings.is_empty());
        assert!(result.best_match.is_none());
        assert_eq!(result.best_match_index, None);
        assert_eq!(result, RankingResult::empty());
    }

    #[test]
    fn test_levenshtein_prefers_smaller_distance() {
        let result = compare_strings(
            "kitten",
            &["sitting", "kitchen", "mitten"],
            Algorithm::Levenshtein,
        );

        assert_eq!(result.best_match_index, Some(2));
        assert_eq!(
            result.best_match.unwrap().rating,
            Score::Distance(1)
        );
    }

    #[test]
    fn test_first_candidate_wins_ties() {
        let result = compare_strings(
            "kitten",
            &["sitting", "mitten", "bitten"],
            Algorithm::Levenshtein,
        );
        assert_eq!(result.best_match_index, Some(1));

        let result = compare_strings("night", &["nacht", "yacht"], Algorithm::Dice);
        assert_eq!(result.best_match_index, Some(0));
    }

    #[test]
    fn test_single_candidate_is_best() {
        let result = compare_strings("apple", &["zebra"], Algorithm::Dice);

        assert_eq!(result.best_match_index, Some(0));
        assert_eq!(result.best_match.unwrap().rating, Score::Coefficient(0.0));
    }

    #[test]
    fn test_jaccard_ranking() {
        let result = compare_strings(
            "red green blue",
            &["red green", "blue green red", "yellow purple"],
            Algorithm::Jaccard,
        );

        assert_eq!(result.best_match_index, Some(1));
    }

    #[test]
    fn test_accepts_owned_strings() {
        let needles = vec!["sealed".to_string(), "healthy".to_string()];
        let result = compare_strings("healed", &needles, Algorithm::Dice);

        assert_eq!(result.best_match.unwrap().target, "sealed");
    }
}

#[cfg(test)]
mod ranking_result_serialization_tests {
    use super::*;

    #[test]
    fn test_empty_result_json_shape() {
        let needles: Vec<String> = Vec::new();
        let result = compare_strings("x", &needles, Algorithm::Dice);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "ratings": [], "bestMatch": null, "bestMatchIndex": -1 })
        );
    }

    #[test]
    fn test_result_json_shape() {
        let result = compare_strings("kitten", &["sitting", "mitten"], Algorithm::Levenshtein);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "ratings": [
                    { "target": "sitting", "rating": 3 },
                    { "target": "mitten", "rating": 1 }
                ],
                "bestMatch": { "target": "mitten", "rating": 1 },
                "bestMatchIndex": 1
            })
        );
    }

    #[test]
    fn test_result_survives_json_round_trip() {
        let result = compare_strings(
            "kitten",
            &["sitting", "mitten", "kitchen"],
            Algorithm::Levenshtein,
        );

        let json = serde_json::to_string(&result).unwrap();
        let restored: RankingResult = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, result);
    }

    #[test]
    fn test_negative_index_deserializes_as_none() {
        let restored: RankingResult =
            serde_json::from_str(r#"{"ratings":[],"bestMatch":null,"bestMatchIndex":-1}"#)
                .unwrap();

        assert_eq!(restored, RankingResult::empty());
    }
}

#[cfg(test)]
mod compare_values_tests {
    use super::*;

    #[test]
    fn test_valid_values_are_ranked() {
        let result = compare_values(
            &json!("hello how are you"),
            &json!(GREETING_CANDIDATES),
            Algorithm::Dice,
        );

        assert_eq!(result.ratings.len(), 4);
        assert_eq!(result.best_match_index, Some(0));
    }

    #[test]
    fn test_non_string_haystack_yields_sentinel() {
        let result = compare_values(&json!(42), &json!(["a", "b"]), Algorithm::Dice);

        assert_eq!(result, RankingResult::empty());
    }

    #[test]
    fn test_non_array_needles_yield_sentinel() {
        let result = compare_values(&json!("hello"), &json!("hello"), Algorithm::Dice);

        assert_eq!(result, RankingResult::empty());
    }

    #[test]
    fn test_non_string_needle_yields_sentinel() {
        let result = compare_values(
            &json!("hello"),
            &json!(["hello", 1, "help"]),
            Algorithm::Levenshtein,
        );

        assert_eq!(result, RankingResult::empty());
    }

    #[test]
    fn test_empty_needles_yield_sentinel() {
        let result = compare_values(&json!("hello"), &json!([]), Algorithm::Jaccard);

        assert_eq!(result, RankingResult::empty());
    }
}
