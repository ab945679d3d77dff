use test_utils::{get_fixture_files, load_fixture, run_test_for_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_all_fixture_files() {
        let files = get_fixture_files().expect("Failed to read test files directory");

        assert!(!files.is_empty(), "No fixture files found");

        for file_path in files {
            run_test_for_file(&file_path, true);
        }
    }

    #[test]
    fn test_fixtures_are_well_formed() {
        let files = get_fixture_files().expect("Failed to read test files directory");

        for file_path in files {
            let fixture = load_fixture(&file_path).expect("Failed to load fixture file");

            assert!(!fixture.haystack.is_empty(), "{:?} has no HAYSTACK", file_path);
            assert!(!fixture.needles.is_empty(), "{:?} has no NEEDLE", file_path);

            let expected = fixture.expected.expect("Fixture has no EXPECTED line");
            assert!(
                fixture.needles.contains(&expected),
                "{:?} expects a candidate it does not list",
                file_path
            );
        }
    }
}
