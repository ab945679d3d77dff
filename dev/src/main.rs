use log::info;
use similarity_set::{compare_string, compare_strings, Algorithm, SimilaritySet};
use std::time::Instant;

/// Runs `f`, printing how long it took under `name`.
fn timed<F: FnOnce()>(name: &str, f: F) {
    let start = Instant::now();
    f();
    println!("{}: {:.3?}\n", name, start.elapsed());
}

fn main() {
    env_logger::init();

    let mut messages: SimilaritySet = SimilaritySet::new();
    messages.add("hello how are you".to_string());
    messages.add("i am doing well thank you".to_string());
    messages.add("what are you up to today?".to_string());
    messages.add("nothing much, just chilling".to_string());

    info!("Running dev harness over {}", messages);

    timed("SimilaritySet::has_similar dice 0.80", || {
        println!("{}", messages.has_similar("hello how are", 0.80, true));
    });

    timed("SimilaritySet::get_similar dice", || {
        for entry in messages.get_similar("hello how are", Algorithm::Dice) {
            println!("{}: {}", entry.haystack, entry.similarity);
        }
    });

    timed("SimilaritySet::some", || {
        if messages.some(|message, _, _| message.contains("hello")) {
            println!("some elements in the set have 'hello'");
        } else {
            println!("no elements in the set have 'hello'");
        }
    });

    timed("SimilaritySet::some_of", || {
        if SimilaritySet::some_of(&messages, |message, _, _| message.contains("hello")) {
            println!("some elements in the set have 'hello'");
        } else {
            println!("no elements in the set have 'hello'");
        }
    });

    timed("SimilaritySet::every", || {
        if messages.every(|message, _, _| !message.is_empty()) {
            println!("every element in the set is non-empty");
        } else {
            println!("one or more of the elements in the set are empty");
        }
    });

    timed("SimilaritySet::filter", || {
        println!("{}", messages.filter(|message, _, _| message.contains("hello")));
    });

    timed("SimilaritySet::fold", || {
        let all_messages = messages.fold(Vec::new(), |mut accumulator, message| {
            accumulator.push(message.as_str());
            accumulator
        });
        println!("{}", all_messages.join("\n"));
    });

    timed("SimilaritySet::reduce", || {
        let total_length: usize = messages.reduce(|total, message| total + message.len());
        println!("{}", total_length);
    });

    timed("SimilaritySet::to_string", || {
        println!("{}", messages);
    });

    timed("SimilaritySet::to_json_string", || {
        match messages.to_json_string() {
            Ok(json) => println!("{}", json),
            Err(e) => println!("{}", e),
        }
    });

    timed("SimilaritySet::from_json", || {
        let restored = messages
            .to_json_string()
            .and_then(|json| SimilaritySet::<String>::parse_json(&json));
        match restored {
            Ok(restored) => println!("{}", restored),
            Err(e) => println!("{}", e),
        }
    });

    timed("SimilaritySet::for_each", || {
        messages.for_each(|value, key, _| {
            println!("{} {}", value, key);
        });
    });

    timed("compare_string", || {
        println!(
            "{}",
            compare_string("hello how are you", "hello how are yo", Algorithm::Dice)
        );
    });

    timed("compare_strings", || {
        let result = compare_strings(
            "hello how are you",
            &[
                "hello how are yo",
                "hello sir",
                "hello how are you doing",
                "goodbye gtg to sleep",
            ],
            Algorithm::Dice,
        );
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("{}", e),
        }
    });

    println!(
        "{}",
        compare_string("hello how are you", "hello, how are you", Algorithm::Dice)
    );
}
