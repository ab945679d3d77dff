use crate::compare_string;
use crate::config::DEFAULT_SIMILARITY_SET_CONFIG;
use crate::constants::SIMILARITY_SET_NAME;
use crate::models::{
    Algorithm, Error, IterationControl, SetElement, SimilarityEntry, SimilaritySetConfig,
};
use crate::utils::dice_coefficient;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// JSON accepted by `SimilaritySet::from_json`: either a JSON string still to be parsed
/// or a value that has already been parsed.
#[derive(Clone, Debug)]
pub enum JsonInput<'a> {
    Text(&'a str),
    Parsed(Value),
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(text: &'a str) -> Self {
        JsonInput::Text(text)
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(text: &'a String) -> Self {
        JsonInput::Text(text.as_str())
    }
}

impl From<Value> for JsonInput<'_> {
    fn from(value: Value) -> Self {
        JsonInput::Parsed(value)
    }
}

/// An insertion-ordered set of unique elements that can answer similarity queries.
///
/// Duplicate insertions are no-ops. All scoring is delegated to `compare_string`.
#[derive(Clone, Debug)]
pub struct SimilaritySet<T: SetElement = String> {
    elements: Vec<T>,
    index: HashSet<T>,
    config: SimilaritySetConfig,
}

impl<T: SetElement> SimilaritySet<T> {
    pub fn new() -> Self {
        Self::with_config(*DEFAULT_SIMILARITY_SET_CONFIG)
    }

    pub fn with_config(config: SimilaritySetConfig) -> Self {
        Self {
            elements: Vec::new(),
            index: HashSet::new(),
            config,
        }
    }

    pub fn config(&self) -> &SimilaritySetConfig {
        &self.config
    }

    /// Adds an element, returning `false` if it was already present.
    pub fn add(&mut self, element: T) -> bool {
        if self.index.contains(&element) {
            return false;
        }

        self.index.insert(element.clone());
        self.elements.push(element);
        true
    }

    pub fn has(&self, element: &T) -> bool {
        self.index.contains(element)
    }

    /// Removes an element while keeping the order of the remaining ones.
    pub fn remove(&mut self, element: &T) -> bool {
        if !self.index.remove(element) {
            return false;
        }

        self.elements.retain(|existing| existing != element);
        true
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// The elements in insertion order.
    pub fn values(&self) -> &[T] {
        &self.elements
    }

    /// Checks whether any element is similar to `needle`.
    ///
    /// Blank elements are skipped. An element qualifies when `include_exact` is set and
    /// it equals the needle, or when its Dice score against the needle is strictly
    /// greater than `threshold`. Stops at the first qualifying element.
    pub fn has_similar(&self, needle: &str, threshold: f64, include_exact: bool) -> bool {
        for element in self.elements.iter() {
            if element.is_blank() {
                continue;
            }

            let text = element.similarity_text();

            if include_exact && text == needle {
                debug!("Exact match for \"{}\"", needle);
                return true;
            }

            let similarity = dice_coefficient(&text, needle);
            if similarity > threshold {
                debug!(
                    "\"{}\" is similar to \"{}\" ({:.4} > {:.4})",
                    text, needle, similarity, threshold
                );
                return true;
            }
        }

        false
    }

    /// `has_similar` using the threshold and exact-match setting of this set's config.
    pub fn has_similar_by_config(&self, needle: &str) -> bool {
        self.has_similar(
            needle,
            self.config.similarity_threshold,
            self.config.include_exact,
        )
    }

    /// Scores every element against `needle`, in insertion order.
    pub fn get_similar(&self, needle: &str, algorithm: Algorithm) -> Vec<SimilarityEntry<T>> {
        self.elements
            .iter()
            .map(|element| SimilarityEntry {
                haystack: element.clone(),
                similarity: compare_string(&*element.similarity_text(), needle, algorithm),
            })
            .collect()
    }

    /// `get_similar` using this set's default algorithm.
    pub fn get_similar_by_config(&self, needle: &str) -> Vec<SimilarityEntry<T>> {
        self.get_similar(needle, self.config.default_algorithm)
    }

    /// Whether `predicate` holds for at least one element.
    ///
    /// The predicate receives the element, its insertion index and the set.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.elements
            .iter()
            .enumerate()
            .any(|(index, element)| predicate(element, index, self))
    }

    pub fn some_of<F>(set: &Self, predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        set.some(predicate)
    }

    /// Whether `predicate` holds for every element. An empty set satisfies any predicate.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.elements
            .iter()
            .enumerate()
            .all(|(index, element)| predicate(element, index, self))
    }

    pub fn every_of<F>(set: &Self, predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        set.every(predicate)
    }

    /// Returns a new set, with the same config, holding the elements `predicate` keeps.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        let mut filtered = Self::with_config(self.config);

        for (index, element) in self.elements.iter().enumerate() {
            if predicate(element, index, self) {
                filtered.add(element.clone());
            }
        }

        filtered
    }

    pub fn filter_of<F>(set: &Self, predicate: F) -> Self
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        set.filter(predicate)
    }

    /// Accumulates over the elements starting from an explicit initial value.
    pub fn fold<'a, A, F>(&'a self, initial_value: A, mut accumulate: F) -> A
    where
        F: FnMut(A, &'a T) -> A,
    {
        let mut accumulator = initial_value;
        for element in self.elements.iter() {
            accumulator = accumulate(accumulator, element);
        }
        accumulator
    }

    /// Accumulates over the elements starting from `A::default()`, which is `0` for
    /// numeric accumulators. Use `fold` for anything that needs another starting value.
    pub fn reduce<'a, A, F>(&'a self, accumulate: F) -> A
    where
        A: Default,
        F: FnMut(A, &'a T) -> A,
    {
        self.fold(A::default(), accumulate)
    }

    pub fn reduce_of<'a, A, F>(set: &'a Self, accumulate: F) -> A
    where
        A: Default,
        F: FnMut(A, &'a T) -> A,
    {
        set.reduce(accumulate)
    }

    /// Calls `callback` for each element in insertion order.
    ///
    /// As with a native set, the element is passed as both the value and the key,
    /// followed by the set itself. Returning `true` from the callback stops the
    /// iteration; returning `()` or `false` continues.
    pub fn for_each<R, F>(&self, mut callback: F)
    where
        R: IterationControl,
        F: FnMut(&T, &T, &Self) -> R,
    {
        for element in self.elements.iter() {
            if callback(element, element, self).stops_iteration() {
                break;
            }
        }
    }

    pub fn for_each_of<R, F>(set: &Self, callback: F)
    where
        R: IterationControl,
        F: FnMut(&T, &T, &Self) -> R,
    {
        set.for_each(callback)
    }

    /// The elements as a plain array, in insertion order.
    pub fn to_json(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T: SetElement + Serialize> SimilaritySet<T> {
    pub fn to_json_string(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.elements)?)
    }
}

impl<T: SetElement + DeserializeOwned> SimilaritySet<T> {
    /// Adds the elements of a JSON array, optionally clearing the set first.
    ///
    /// `input` may be a JSON string or an already-parsed `serde_json::Value`. The set is
    /// left untouched if the input does not parse, is not an array, or holds elements
    /// that cannot be converted to `T`.
    pub fn from_json<'a>(
        &mut self,
        input: impl Into<JsonInput<'a>>,
        clear_first: bool,
    ) -> Result<&mut Self, Error> {
        let parsed = match input.into() {
            JsonInput::Text(text) => {
                serde_json::from_str::<Value>(text).map_err(from_json_error)?
            }
            JsonInput::Parsed(value) => value,
        };

        let items = match parsed {
            Value::Array(items) => items,
            _ => return Err(from_json_error("parsed JSON was not an array")),
        };

        let elements = items
            .into_iter()
            .map(serde_json::from_value::<T>)
            .collect::<Result<Vec<T>, _>>()
            .map_err(from_json_error)?;

        if clear_first {
            self.clear();
        }

        self.extend(elements);

        Ok(self)
    }

    /// Builds a new set from a JSON string or already-parsed value.
    pub fn parse_json<'a>(input: impl Into<JsonInput<'a>>) -> Result<Self, Error> {
        let mut set = Self::new();
        set.from_json(input, false)?;
        Ok(set)
    }
}

fn from_json_error(reason: impl fmt::Display) -> Error {
    Error::InvalidArgument(format!("{}.from_json: {}", SIMILARITY_SET_NAME, reason))
}

impl<T: SetElement> Default for SimilaritySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two sets are equal when they hold the same elements in the same order.
impl<T: SetElement> PartialEq for SimilaritySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: SetElement> Eq for SimilaritySet<T> {}

impl<T: SetElement> Extend<T> for SimilaritySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: SetElement> FromIterator<T> for SimilaritySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: SetElement> From<Vec<T>> for SimilaritySet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<'a, T: SetElement> IntoIterator for &'a SimilaritySet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: SetElement> IntoIterator for SimilaritySet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: SetElement> fmt::Display for SimilaritySet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self
            .elements
            .iter()
            .filter_map(|element| element.render())
            .collect();

        write!(
            f,
            "{}({}) {{{}}}",
            SIMILARITY_SET_NAME,
            self.len(),
            values.join(", ")
        )
    }
}

impl<T: SetElement + Serialize> Serialize for SimilaritySet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.elements.serialize(serializer)
    }
}

impl<'de, T: SetElement + Deserialize<'de>> Deserialize<'de> for SimilaritySet<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;

        Ok(elements.into_iter().collect())
    }
}
