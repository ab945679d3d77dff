#![allow(unused)] // Ignore due to all constants not being utilized across all environemnts

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static FIXTURE_HAYSTACK_PREFIX: &str = "HAYSTACK:";

pub static FIXTURE_NEEDLE_PREFIX: &str = "NEEDLE:";

pub static FIXTURE_ALGORITHM_PREFIX: &str = "ALGORITHM:";

pub static FIXTURE_EXPECTED_PREFIX: &str = "EXPECTED:";

pub static FIXTURE_COMMENT_PREFIX: &str = "COMMENT:";
