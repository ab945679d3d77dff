use log::{error, info};
use similarity_set::{compare_strings, Algorithm, DEFAULT_ALGORITHM};
use std::io::{self, Read};

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(haystack) = args.first() else {
        error!("Usage: similarity-set-cli <subject> [dice|levenshtein|jaccard] < candidates.txt");
        std::process::exit(1);
    };

    let algorithm = match args.get(1) {
        Some(name) => match name.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => DEFAULT_ALGORITHM,
    };

    // Read the candidate lines from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let needles: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
    info!(
        "Ranking {} candidates against \"{}\" using {}",
        needles.len(),
        haystack,
        algorithm
    );

    let result = compare_strings(haystack, &needles, algorithm);

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Error serializing ranking: {}", e);
            std::process::exit(1);
        }
    }
}
