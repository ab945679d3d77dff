#[path = "../shared/constants.rs"]
pub mod constants;

use constants::{
    FIXTURE_ALGORITHM_PREFIX, FIXTURE_COMMENT_PREFIX, FIXTURE_EXPECTED_PREFIX,
    FIXTURE_HAYSTACK_PREFIX, FIXTURE_NEEDLE_PREFIX, TEST_FILES_DIRECTORY,
};
use similarity_set::{compare_strings, Algorithm};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// A ranking scenario read from a fixture file.
///
/// Fixture files are plain text with one directive per line:
///
/// ```text
/// COMMENT: anything
/// ALGORITHM: dice
/// HAYSTACK: the subject string
/// NEEDLE: a candidate
/// NEEDLE: another candidate
/// EXPECTED: the candidate that should win
/// ```
#[derive(Debug, Clone)]
pub struct RankingFixture {
    pub file_path: PathBuf,
    pub algorithm: String,
    pub haystack: String,
    pub needles: Vec<String>,
    pub expected: Option<String>,
}

// Helper function to read the value following a directive prefix
fn directive_value(line: &str, prefix: &str) -> Option<String> {
    line.strip_prefix(prefix).map(|value| value.trim().to_string())
}

/// Loads a single fixture file.
pub fn load_fixture(file_path: &Path) -> Result<RankingFixture, Box<dyn Error>> {
    let content = fs::read_to_string(file_path)?;

    let mut fixture = RankingFixture {
        file_path: file_path.to_path_buf(),
        algorithm: "dice".to_string(),
        haystack: String::new(),
        needles: Vec::new(),
        expected: None,
    };

    for line in content.lines().map(str::trim_start) {
        if line.starts_with(FIXTURE_COMMENT_PREFIX) || line.trim().is_empty() {
            continue;
        }

        if let Some(value) = directive_value(line, FIXTURE_ALGORITHM_PREFIX) {
            fixture.algorithm = value;
        } else if let Some(value) = directive_value(line, FIXTURE_HAYSTACK_PREFIX) {
            fixture.haystack = value;
        } else if let Some(value) = directive_value(line, FIXTURE_NEEDLE_PREFIX) {
            fixture.needles.push(value);
        } else if let Some(value) = directive_value(line, FIXTURE_EXPECTED_PREFIX) {
            fixture.expected = Some(value);
        } else {
            return Err(format!("Unrecognized fixture line in {:?}: {}", file_path, line).into());
        }
    }

    Ok(fixture)
}

/// Lists every fixture file in the test files directory, sorted by name.
pub fn get_fixture_files() -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut files: Vec<PathBuf> = fs::read_dir(&*TEST_FILES_DIRECTORY)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file())
        .collect();

    files.sort();

    Ok(files)
}

/// Ranks the fixture's needles and returns the winning candidate, if any.
pub fn run_fixture(fixture: &RankingFixture) -> Result<Option<String>, Box<dyn Error>> {
    let algorithm: Algorithm = fixture.algorithm.parse()?;
    let result = compare_strings(&fixture.haystack, &fixture.needles, algorithm);

    Ok(result.best_match.map(|best_match| best_match.target))
}

// Helper function to run the test for each file in the directory
pub fn run_test_for_file(file_path: &Path, use_assertions: bool) -> bool {
    let fixture = load_fixture(file_path).expect("Failed to load fixture file");
    let best_match = run_fixture(&fixture).expect("Failed to run fixture");

    let passed = best_match == fixture.expected;

    if use_assertions {
        assert!(
            passed,
            "Fixture {:?} expected best match {:?}, got {:?}",
            file_path, fixture.expected, best_match
        );
    } else if !passed {
        eprintln!(
            "Fixture {:?} expected best match {:?}, got {:?}",
            file_path, fixture.expected, best_match
        );
    }

    passed
}
