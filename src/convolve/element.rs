//! Element/accumulator pairing for integer convolution.
use num_traits::{PrimInt, Signed};

/// Signed integer type usable as a convolution element.
///
/// `Acc` fixes the accumulator width at compile time. The pairing leaves
/// enough headroom to sum `max(|Self|)^2` products over any realistic
/// kernel footprint: `i8` products fit ~2^17 of them in `i32`, `i16` and
/// `i32` widen to `i64`, `i64` to `i128`. Overflow beyond `Acc` is the
/// caller's responsibility via the choice of element type.
pub trait Element: PrimInt + Signed + Send + Sync + 'static {
    /// Accumulator used while summing products of `Self`.
    type Acc: PrimInt + Signed + Send + Sync + 'static;

    /// Lossless widening into the accumulator domain.
    fn widen(self) -> Self::Acc;
}

impl Element for i8 {
    type Acc = i32;

    #[inline]
    fn widen(self) -> i32 {
        i32::from(self)
    }
}

impl Element for i16 {
    type Acc = i64;

    #[inline]
    fn widen(self) -> i64 {
        i64::from(self)
    }
}

impl Element for i32 {
    type Acc = i64;

    #[inline]
    fn widen(self) -> i64 {
        i64::from(self)
    }
}

impl Element for i64 {
    type Acc = i128;

    #[inline]
    fn widen(self) -> i128 {
        i128::from(self)
    }
}
