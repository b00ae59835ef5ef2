use crate::error::{GeometryError, Result};
use crate::math::{PointN, Vector2, VectorN, EPS};

use super::{Line, Line2};

/// A finite line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<const D: usize> {
    p1: PointN<D>,
    p2: PointN<D>,
    dir: VectorN<D>,
}

/// A segment in the plane.
pub type Segment2 = Segment<2>;

/// A segment in 3D space.
pub type Segment3 = Segment<3>;

impl<const D: usize> Segment<D> {
    /// Creates a new segment from `p1` to `p2`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidInput`] if the points are closer than
    /// [`EPS`] or not finite.
    pub fn new(p1: PointN<D>, p2: PointN<D>) -> Result<Self> {
        let dir = p2 - p1;
        let len = dir.norm();
        if !len.is_finite() || len < EPS {
            return Err(GeometryError::InvalidInput(
                "segment end points are too close to each other".into(),
            ));
        }
        Ok(Self { p1, p2, dir })
    }

    /// Returns the starting point.
    #[must_use]
    pub fn p1(&self) -> &PointN<D> {
        &self.p1
    }

    /// Returns the end point.
    #[must_use]
    pub fn p2(&self) -> &PointN<D> {
        &self.p2
    }

    /// Returns `p2 - p1`.
    #[must_use]
    pub fn dir(&self) -> &VectorN<D> {
        &self.dir
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.dir.norm()
    }

    /// Returns `p1 + t * (p2 - p1)`.
    ///
    /// Values of `t` outside `[0, 1]` give points beyond the end points.
    #[must_use]
    pub fn point_at(&self, t: f64) -> PointN<D> {
        self.p1 + self.dir * t
    }

    /// Returns the infinite line through both end points, parametrized like
    /// this segment.
    #[must_use]
    pub fn to_line(&self) -> Line<D> {
        Line::from_checked_dir(self.p1, self.dir)
    }
}

impl Segment<2> {
    /// Returns the perpendicular bisector of this segment.
    #[must_use]
    pub fn perpendicular_bisector(&self) -> Line2 {
        let mid = self.point_at(0.5);
        Line2::from_checked_dir(mid, Vector2::new(self.dir.y, -self.dir.x))
    }
}
