use std::ops::ControlFlow;

/// Return types accepted from `SimilaritySet::for_each` callbacks.
///
/// A callback returning `true` (or `ControlFlow::Break`) stops the iteration early.
/// Returning `()` or `false` keeps going.
pub trait IterationControl {
    fn stops_iteration(&self) -> bool;
}

impl IterationControl for () {
    fn stops_iteration(&self) -> bool {
        false
    }
}

impl IterationControl for bool {
    fn stops_iteration(&self) -> bool {
        *self
    }
}

impl<B, C> IterationControl for ControlFlow<B, C> {
    fn stops_iteration(&self) -> bool {
        self.is_break()
    }
}
