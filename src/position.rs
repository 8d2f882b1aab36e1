//! Integral coordinate abstraction.
//!
//! The tree is generic over its coordinate type. `Position` captures the
//! handful of operations quadrant routing actually needs: ordering, addition
//! and subtraction of non-negative extents, and the two halving flavors used
//! by the ceiling-biased midpoint. Only the primitive integer types implement
//! it, so instantiating the tree with a floating-point coordinate is a
//! compile-time error rather than a runtime surprise.

use std::fmt::{Debug, Display};

/// An integral coordinate scalar usable as a tree axis.
pub trait Position: Copy + Ord + Debug + Display {
    /// The additive identity.
    const ZERO: Self;

    /// The smallest quadrant extent that still splits.
    const TWO: Self;

    /// `self + other`. Callers only add non-negative extents to coordinates.
    fn add(self, other: Self) -> Self;

    /// `self - other`, with `other <= self` for the extents we track.
    fn sub(self, other: Self) -> Self;

    /// `self - other`, or `None` when the difference does not fit in the
    /// coordinate type.
    fn checked_sub(self, other: Self) -> Option<Self>;

    /// `ceil(self / 2)` for non-negative `self` - the larger half of a split
    /// extent, and the midpoint bias used for quadrant centers.
    fn half_up(self) -> Self;

    /// `floor(self / 2)` for non-negative `self` - the smaller half.
    fn half_down(self) -> Self;
}

macro_rules! impl_position {
    ($($t:ty),* $(,)?) => {$(
        impl Position for $t {
            const ZERO: Self = 0;
            const TWO: Self = 2;

            #[inline]
            fn add(self, other: Self) -> Self {
                self + other
            }

            #[inline]
            fn sub(self, other: Self) -> Self {
                self - other
            }

            #[inline]
            fn checked_sub(self, other: Self) -> Option<Self> {
                <$t>::checked_sub(self, other)
            }

            #[inline]
            fn half_up(self) -> Self {
                (self / 2) + (self % 2)
            }

            #[inline]
            fn half_down(self) -> Self {
                self / 2
            }
        }
    )*};
}

impl_position!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_up_rounds_toward_positive() {
        assert_eq!(8i32.half_up(), 4);
        assert_eq!(7i32.half_up(), 4);
        assert_eq!(3i32.half_up(), 2);
        assert_eq!(2i32.half_up(), 1);
        assert_eq!(1i32.half_up(), 1);
        assert_eq!(0i32.half_up(), 0);
    }

    #[test]
    fn test_half_down_truncates() {
        assert_eq!(8i32.half_down(), 4);
        assert_eq!(7i32.half_down(), 3);
        assert_eq!(1i32.half_down(), 0);
    }

    #[test]
    fn test_halves_partition_extent() {
        // An extent always splits into half_up + half_down exactly.
        for w in 1i64..=1000 {
            assert_eq!(w.half_up() + w.half_down(), w);
        }
    }

    #[test]
    fn test_checked_sub_detects_overflow() {
        assert_eq!(Position::checked_sub(8i32, 3), Some(5));
        assert_eq!(Position::checked_sub(0i32, i32::MIN), None);
        assert_eq!(Position::checked_sub(i32::MAX, i32::MIN), None);
        assert_eq!(Position::checked_sub(3u8, 8), None);
    }

    #[test]
    fn test_unsigned_types() {
        assert_eq!(9u8.half_up(), 5);
        assert_eq!(9u8.half_down(), 4);
        assert_eq!(u16::ZERO, 0);
        assert_eq!(u64::TWO, 2);
    }
}
