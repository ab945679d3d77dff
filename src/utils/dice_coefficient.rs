use crate::types::{Bigram, BigramMultiset};
use crate::utils::is_separator_whitespace;

/// Removes every separator whitespace character, keeping the rest in order.
fn strip_whitespace(text: &str) -> Vec<char> {
    text.chars().filter(|&c| !is_separator_whitespace(c)).collect()
}

/// Overlapping two-character windows of `chars`.
fn bigrams(chars: &[char]) -> impl Iterator<Item = Bigram> + '_ {
    chars.windows(2).map(|window| (window[0], window[1]))
}

/// Compute the Dice coefficient between two strings over their bigram multisets.
///
/// Whitespace is ignored. Identical (non-empty) strings score exactly `1.0`; strings
/// that are empty or shorter than two characters otherwise score `0.0`. Repeated
/// bigrams are only matched as many times as they occur in `haystack`.
///
/// The result is `2 * |intersection| / (|bigrams(haystack)| + |bigrams(needle)|)`.
pub fn dice_coefficient(haystack: &str, needle: &str) -> f64 {
    let haystack = strip_whitespace(haystack);
    let needle = strip_whitespace(needle);

    if haystack.is_empty() || needle.is_empty() {
        return 0.0;
    }

    if haystack == needle {
        return 1.0;
    }

    if haystack.len() < 2 || needle.len() < 2 {
        return 0.0;
    }

    let mut haystack_bigrams: BigramMultiset = BigramMultiset::new();
    for bigram in bigrams(&haystack) {
        *haystack_bigrams.entry(bigram).or_insert(0) += 1;
    }

    let mut intersection_size = 0;
    for bigram in bigrams(&needle) {
        if let Some(count) = haystack_bigrams.get_mut(&bigram) {
            if *count > 0 {
                *count -= 1;
                intersection_size += 1;
            }
        }
    }

    (2.0 * intersection_size as f64) / (haystack.len() + needle.len() - 2) as f64
}
