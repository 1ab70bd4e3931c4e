//! Element capabilities required by the provided combiners and updaters.

/// Arithmetic needed by [`Sum`](crate::Sum), [`Min`](crate::Min),
/// [`Max`](crate::Max), [`Add`](crate::Add) and [`Offset`](crate::Offset).
///
/// Integer implementations wrap on overflow.
pub trait Numeric: Copy + PartialOrd {
    fn zero() -> Self;
    fn lowest() -> Self;
    fn highest() -> Self;
    fn add(self, rhs: Self) -> Self;

    /// `self` repeated `len` times, i.e. `self * len`.
    fn scale(self, len: usize) -> Self;
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            #[inline(always)]
            fn zero() -> Self {
                0
            }

            #[inline(always)]
            fn lowest() -> Self {
                <$t>::MIN
            }

            #[inline(always)]
            fn highest() -> Self {
                <$t>::MAX
            }

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn scale(self, len: usize) -> Self {
                self.wrapping_mul(len as $t)
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            #[inline(always)]
            fn zero() -> Self {
                0.0
            }

            #[inline(always)]
            fn lowest() -> Self {
                <$t>::NEG_INFINITY
            }

            #[inline(always)]
            fn highest() -> Self {
                <$t>::INFINITY
            }

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn scale(self, len: usize) -> Self {
                self * len as $t
            }
        }
    )*};
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);
