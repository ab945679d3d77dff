use std::borrow::Cow;
use std::hash::Hash;

/// What a `SimilaritySet` can hold.
///
/// Every element has a text form used for similarity scoring. Elements may also opt
/// into being rendered by `SimilaritySet`'s `Display` implementation; strings render
/// quoted and numbers render bare.
pub trait SetElement: Clone + Eq + Hash {
    /// The text the comparison algorithms see for this element.
    fn similarity_text(&self) -> Cow<'_, str>;

    /// Blank elements (empty strings, zero, `false`) are skipped by `has_similar`.
    fn is_blank(&self) -> bool;

    /// The element as it appears inside a rendered set, or `None` to leave it out.
    fn render(&self) -> Option<String>;
}

impl SetElement for String {
    fn similarity_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn render(&self) -> Option<String> {
        Some(format!("\"{}\"", self))
    }
}

impl<'a> SetElement for &'a str {
    fn similarity_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn render(&self) -> Option<String> {
        Some(format!("\"{}\"", self))
    }
}

impl SetElement for bool {
    fn similarity_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn is_blank(&self) -> bool {
        !*self
    }

    fn render(&self) -> Option<String> {
        None
    }
}

macro_rules! impl_numeric_set_element {
    ($($numeric:ty),*) => {
        $(
            impl SetElement for $numeric {
                fn similarity_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }

                fn is_blank(&self) -> bool {
                    *self == 0
                }

                fn render(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_numeric_set_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
