//! Range update strategies.

use crate::numeric::Numeric;

/// Applies a pending update `value` to an aggregate covering `len` elements.
///
/// `current` is absent for elements of a [`with_len`] tree that were never
/// written. Returning `None` keeps them absent, i.e. equal to the combiner's
/// identity; returning a value turns them into ordinary elements.
///
/// The engine also uses this to stack a pending value onto a child's pending
/// value, with `current` being the child's lazy slot and `len = 1`, so
/// `update(update(Some(&a), &b, 1).as_ref(), &c, len)` must equal applying
/// `a`, `b` and then `c` to each of `len` elements. An empty slot takes the
/// pending value as is.
///
/// [`with_len`]: crate::SegmentTree::with_len
pub trait Updater<T> {
    fn update(&self, current: Option<&T>, value: &T, len: usize) -> Option<T>;
}

impl<T, F> Updater<T> for F
where
    F: Fn(Option<&T>, &T, usize) -> T,
{
    #[inline(always)]
    fn update(&self, current: Option<&T>, value: &T, len: usize) -> Option<T> {
        Some(self(current, value, len))
    }
}

/// Adds `value` to every element; pairs with [`Sum`](crate::Sum).
///
/// Absent elements count as zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Add;

impl<T: Numeric> Updater<T> for Add {
    #[inline(always)]
    fn update(&self, current: Option<&T>, value: &T, len: usize) -> Option<T> {
        let current = current.copied().unwrap_or_else(T::zero);
        Some(current.add(value.scale(len)))
    }
}

/// Overwrites every element with `value`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Assign;

impl<T: Clone> Updater<T> for Assign {
    #[inline(always)]
    fn update(&self, _current: Option<&T>, value: &T, _len: usize) -> Option<T> {
        Some(value.clone())
    }
}

/// Adds `value` to every element of an order-statistic aggregate such as
/// [`Min`](crate::Min) or [`Max`](crate::Max), where the shift does not
/// depend on the segment length.
///
/// Absent elements stand for the combiner's infinite identity and stay absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct Offset;

impl<T: Numeric> Updater<T> for Offset {
    #[inline(always)]
    fn update(&self, current: Option<&T>, value: &T, _len: usize) -> Option<T> {
        current.map(|current| current.add(*value))
    }
}

#[cfg(test)]
mod tests {
    use super::{Add, Assign, Offset, Updater};

    #[test]
    fn add_scales_by_length() {
        assert_eq!(Add.update(Some(&10_i64), &3, 4), Some(22));
        assert_eq!(Add.update(None, &3_i64, 4), Some(12));
    }

    #[test]
    fn assign_ignores_current_and_length() {
        assert_eq!(Assign.update(Some(&10_i64), &3, 4), Some(3));
        assert_eq!(Assign.update(None, &"x", 100), Some("x"));
    }

    #[test]
    fn offset_ignores_length() {
        assert_eq!(Offset.update(Some(&10_i64), &-3, 1_000), Some(7));
    }

    #[test]
    fn offset_keeps_absent_elements_absent() {
        assert_eq!(Offset.update(None, &5_i64, 7), None);
        assert_eq!(Offset.update(None, &-5.0_f64, 1), None);
    }

    #[test]
    fn closures_always_produce_a_value() {
        let double = |_: Option<&i64>, v: &i64, _: usize| 2 * v;
        assert_eq!(double.update(None, &4, 3), Some(8));
    }

    #[test]
    fn pending_values_stack() {
        for len in [1_usize, 2, 7, 64] {
            let stacked = Add.update(Some(&3_i64), &4, 1);
            assert_eq!(Add.update(Some(&100), &stacked.unwrap(), len), Some(100 + 7 * len as i64));

            let stacked = Assign.update(Some(&3_i64), &4, 1);
            assert_eq!(Assign.update(Some(&100), &stacked.unwrap(), len), Some(4));

            let stacked = Offset.update(Some(&3_i64), &4, 1);
            assert_eq!(Offset.update(Some(&100), &stacked.unwrap(), len), Some(107));
        }
    }
}
