use crate::types::EditDistance;

/// Compute the Levenshtein edit distance between two strings.
///
/// Returns the minimum number of single-character insertions, deletions and
/// substitutions needed to turn `haystack` into `needle`. Comparison is case-sensitive
/// and works per `char`.
///
/// Builds the full `(len(haystack) + 1) x (len(needle) + 1)` distance matrix, so cost is
/// proportional to the product of the two lengths.
pub fn levenshtein_distance(haystack: &str, needle: &str) -> EditDistance {
    let haystack: Vec<char> = haystack.chars().collect();
    let needle: Vec<char> = needle.chars().collect();

    let rows = haystack.len() + 1;
    let columns = needle.len() + 1;

    let mut distances: Vec<Vec<EditDistance>> = vec![vec![0; columns]; rows];

    for (i, row) in distances.iter_mut().enumerate() {
        row[0] = i;
    }

    for (j, cell) in distances[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..rows {
        for j in 1..columns {
            let cost = if haystack[i - 1] == needle[j - 1] { 0 } else { 1 };

            distances[i][j] = (distances[i - 1][j] + 1) // deletion
                .min(distances[i][j - 1] + 1) // insertion
                .min(distances[i - 1][j - 1] + cost); // substitution
        }
    }

    distances[rows - 1][columns - 1]
}
