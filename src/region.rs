//! The fixed rectangular coordinate domain of a tree.

use thiserror::Error;

use crate::position::Position;

/// Error raised when a region cannot address any coordinate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    #[error("region width is zero after normalization")]
    ZeroWidth,

    #[error("region height is zero after normalization")]
    ZeroHeight,

    #[error("region span exceeds the coordinate type's range")]
    SpanOverflow,
}

/// A 2D integer region represented by minimum and maximum coordinates.
///
/// `Region` defines the coordinate domain a [`QuadTree`](crate::QuadTree)
/// addresses. The two corners passed at construction are normalized so that
/// `min <= max` on each axis, and both extents must be strictly positive.
/// Containment is half-open: a region from (0,0) to (8,8) addresses x and y
/// in `0..8`, which is exactly the coordinate set quadrant routing can
/// resolve without collisions.
///
/// Each axis span (`max - min`) must itself fit in `P`, since routing tracks
/// extents in the coordinate type: a region like `(i32::MIN, ..)..(i32::MAX,
/// ..)` is out of contract. [`Region::try_new`] rejects such spans;
/// [`Region::new`] leaves them to the debug overflow checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region<P: Position = i32> {
    /// Minimum X coordinate
    pub min_x: P,
    /// Minimum Y coordinate
    pub min_y: P,
    /// Maximum X coordinate (exclusive)
    pub max_x: P,
    /// Maximum Y coordinate (exclusive)
    pub max_y: P,
}

impl<P: Position> Region<P> {
    /// Creates a region from two corner coordinates, normalizing them to
    /// min/max per axis.
    ///
    /// Both extents must be strictly positive after normalization. This is a
    /// construction precondition checked only in debug builds; use
    /// [`Region::try_new`] for a recoverable check.
    pub fn new(ax: P, ay: P, bx: P, by: P) -> Region<P> {
        let region = Region {
            min_x: ax.min(bx),
            min_y: ay.min(by),
            max_x: ax.max(bx),
            max_y: ay.max(by),
        };
        debug_assert!(region.width() > P::ZERO, "region width is zero");
        debug_assert!(region.height() > P::ZERO, "region height is zero");
        region
    }

    /// Checked variant of [`Region::new`]: also rejects regions whose axis
    /// span does not fit in the coordinate type.
    pub fn try_new(ax: P, ay: P, bx: P, by: P) -> Result<Region<P>, RegionError> {
        let region = Region {
            min_x: ax.min(bx),
            min_y: ay.min(by),
            max_x: ax.max(bx),
            max_y: ay.max(by),
        };
        let width = region
            .max_x
            .checked_sub(region.min_x)
            .ok_or(RegionError::SpanOverflow)?;
        let height = region
            .max_y
            .checked_sub(region.min_y)
            .ok_or(RegionError::SpanOverflow)?;
        if width == P::ZERO {
            return Err(RegionError::ZeroWidth);
        }
        if height == P::ZERO {
            return Err(RegionError::ZeroHeight);
        }
        Ok(region)
    }

    /// Returns the width of the region.
    pub fn width(&self) -> P {
        self.max_x.sub(self.min_x)
    }

    /// Returns the height of the region.
    pub fn height(&self) -> P {
        self.max_y.sub(self.min_y)
    }

    /// Checks whether a coordinate lies inside the region.
    ///
    /// Bounds are half-open per axis: `min <= c < max`.
    pub fn contains(&self, x: P, y: P) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// Number of levels a descent from this region can take before reaching
    /// a base quad, counting the final leaf-slot selection.
    ///
    /// Quartering replaces an extent with at most its ceiling half, so the
    /// bound follows from halving both extents until neither exceeds 2.
    pub fn depth_bound(&self) -> usize {
        let mut w = self.width();
        let mut h = self.height();
        // one level for the leaf slot inside the base quad
        let mut levels = 1;
        while w > P::TWO || h > P::TWO {
            w = w.half_up();
            h = h.half_up();
            levels += 1;
        }
        levels
    }
}

impl<P: Position> std::fmt::Display for Region<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Region({}, {}, {}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_corners() {
        let region = Region::new(8, 8, 0, 0);
        assert_eq!(region.min_x, 0);
        assert_eq!(region.min_y, 0);
        assert_eq!(region.max_x, 8);
        assert_eq!(region.max_y, 8);
    }

    #[test]
    fn test_width_height() {
        let region = Region::new(-4, -2, 4, 2);
        assert_eq!(region.width(), 8);
        assert_eq!(region.height(), 4);
    }

    #[test]
    fn test_try_new_rejects_degenerate() {
        assert_eq!(Region::try_new(0, 0, 0, 8), Err(RegionError::ZeroWidth));
        assert_eq!(Region::try_new(0, 3, 8, 3), Err(RegionError::ZeroHeight));
        assert_eq!(Region::try_new(5, 5, 5, 5), Err(RegionError::ZeroWidth));
        assert!(Region::try_new(0, 0, 1, 1).is_ok());
    }

    #[test]
    fn test_try_new_rejects_span_overflow() {
        assert_eq!(
            Region::try_new(i32::MIN, 0, i32::MAX, 8),
            Err(RegionError::SpanOverflow)
        );
        assert_eq!(
            Region::try_new(0, i32::MIN, 8, i32::MAX),
            Err(RegionError::SpanOverflow)
        );
        // The difference overflows even without spanning the full range.
        assert_eq!(
            Region::try_new(i32::MIN, 0, 0, 8),
            Err(RegionError::SpanOverflow)
        );
        // The largest representable spans are still accepted.
        assert!(Region::try_new(0i32, 0, i32::MAX, i32::MAX).is_ok());
        assert!(Region::try_new(0u32, 0, u32::MAX, u32::MAX).is_ok());
    }

    #[test]
    fn test_contains_is_half_open() {
        let region = Region::new(0, 0, 8, 8);
        assert!(region.contains(0, 0)); // min corner
        assert!(region.contains(7, 7));
        assert!(!region.contains(8, 8)); // max corner excluded
        assert!(!region.contains(8, 0));
        assert!(!region.contains(0, 8));
        assert!(!region.contains(-1, 4));
        assert!(!region.contains(100, 100)); // far outside
    }

    #[test]
    fn test_contains_negative_domain() {
        let region = Region::new(-8, -8, 8, 8);
        assert!(region.contains(-8, -8));
        assert!(region.contains(-1, 7));
        assert!(!region.contains(-9, 0));
        assert!(!region.contains(8, 8));
    }

    #[test]
    fn test_depth_bound_square_regions() {
        // 2x2 resolves entirely inside one base quad.
        assert_eq!(Region::new(0, 0, 2, 2).depth_bound(), 1);
        // 8x8: two quarterings then the leaf slot.
        assert_eq!(Region::new(0, 0, 8, 8).depth_bound(), 3);
        assert_eq!(Region::new(0, 0, 16, 16).depth_bound(), 4);
    }

    #[test]
    fn test_depth_bound_skewed_region() {
        // Depth is driven by the larger axis.
        let region = Region::new(0, 0, 2, 64);
        assert_eq!(region.depth_bound(), Region::new(0, 0, 64, 64).depth_bound());
    }

    #[test]
    fn test_display() {
        let region = Region::new(0, 0, 8, 8);
        assert_eq!(format!("{}", region), "Region(0, 0, 8, 8)");
    }
}
