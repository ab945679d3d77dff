use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the whitespace-delimited units
/// compared by the Jaccard index.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents a bigram (two consecutive characters) used by the Dice coefficient.
pub type Bigram = (char, char);

/// Remaining-available counts of each haystack bigram. Counts are consumed while the
/// needle's bigrams are scanned, which realizes a multiset intersection.
pub type BigramMultiset = HashMap<Bigram, usize>;

/// Represents the position of a candidate within the list passed to `compare_strings`.
pub type CandidateIndex = usize;

/// Represents a number of single-character edits.
pub type EditDistance = usize;
