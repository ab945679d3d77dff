use similarity_set::{compare_strings, Algorithm, SimilaritySet};

fn main() {
    env_logger::init();

    let haystack = "hello how are you";
    let needles = [
        "hello how are yo",
        "hello sir",
        "hello how are you doing",
        "goodbye gtg to sleep",
    ];

    let result = compare_strings(haystack, &needles, Algorithm::Dice);

    println!("Ratings for \"{}\"", haystack);
    for rating in &result.ratings {
        println!("{}: {}", rating.target, rating.rating);
    }

    if let Some(best_match) = result.best_match {
        println!("Best match: {}", best_match.target);
    }

    let messages: SimilaritySet = needles.iter().map(|needle| needle.to_string()).collect();
    println!("{}", messages);
    println!(
        "Has something similar to \"hello how are\": {}",
        messages.has_similar("hello how are", 0.80, true)
    );
}
