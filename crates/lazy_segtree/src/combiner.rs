//! Aggregate merge strategies.

use crate::numeric::Numeric;

/// Associative merge of two aggregates.
///
/// An absent operand is the identity of the operation; the engine never calls
/// [`combine`](Combiner::combine) with one and resolves it through
/// [`combine_absent`](Combiner::combine_absent) instead.
pub trait Combiner<T> {
    fn combine(&self, a: &T, b: &T) -> T;

    /// Explicit identity element, if the operation has a representable one.
    ///
    /// Reported by queries over elements of a [`with_len`] tree that were
    /// never written.
    ///
    /// [`with_len`]: crate::SegmentTree::with_len
    #[inline(always)]
    fn identity(&self) -> Option<T> {
        None
    }

    #[inline(always)]
    fn combine_absent(&self, a: Option<&T>, b: Option<&T>) -> Option<T>
    where
        T: Clone,
    {
        match (a, b) {
            (Some(a), Some(b)) => Some(self.combine(a, b)),
            (Some(x), None) | (None, Some(x)) => Some(x.clone()),
            (None, None) => None,
        }
    }
}

impl<T, F> Combiner<T> for F
where
    F: Fn(&T, &T) -> T,
{
    #[inline(always)]
    fn combine(&self, a: &T, b: &T) -> T {
        self(a, b)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Sum;

impl<T: Numeric> Combiner<T> for Sum {
    #[inline(always)]
    fn combine(&self, a: &T, b: &T) -> T {
        Numeric::add(*a, *b)
    }

    #[inline(always)]
    fn identity(&self) -> Option<T> {
        Some(T::zero())
    }
}

/// Minimum; the identity is the largest value of `T`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

impl<T: Numeric> Combiner<T> for Min {
    #[inline(always)]
    fn combine(&self, a: &T, b: &T) -> T {
        if b < a { *b } else { *a }
    }

    #[inline(always)]
    fn identity(&self) -> Option<T> {
        Some(T::highest())
    }
}

/// Maximum; the identity is the smallest value of `T`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl<T: Numeric> Combiner<T> for Max {
    #[inline(always)]
    fn combine(&self, a: &T, b: &T) -> T {
        if b > a { *b } else { *a }
    }

    #[inline(always)]
    fn identity(&self) -> Option<T> {
        Some(T::lowest())
    }
}
