use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{axis_angle_rotation, Matrix3, Point2, PointN, Vector2, VectorN, EPS};

/// An infinite line in `D`-dimensional space.
///
/// The parametric form is `P(t) = point + t * dir`. The direction is kept as
/// given (it need not be unit length) alongside its normalized copy, so
/// `t = 0` is at `point` and `t = 1` is at `point + dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<const D: usize> {
    point: PointN<D>,
    dir: VectorN<D>,
    unit_dir: VectorN<D>,
}

/// A line in the plane.
pub type Line2 = Line<2>;

/// A line in 3D space.
pub type Line3 = Line<3>;

impl<const D: usize> Line<D> {
    /// Creates a new line from a point and a direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidInput`] if the direction is shorter than
    /// [`EPS`] or not finite.
    pub fn from_dir(point: PointN<D>, dir: VectorN<D>) -> Result<Self> {
        let len = dir.norm();
        if !len.is_finite() || len < EPS {
            return Err(GeometryError::InvalidInput(
                "line direction vector too small".into(),
            ));
        }
        Ok(Self {
            point,
            dir,
            unit_dir: dir / len,
        })
    }

    /// Creates a line passing through two points, with direction `p2 - p1`.
    ///
    /// `p1` is the point at `t = 0` and `p2` the point at `t = 1`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidInput`] if the points are closer than
    /// [`EPS`].
    pub fn from_two_points(p1: PointN<D>, p2: PointN<D>) -> Result<Self> {
        Self::from_dir(p1, p2 - p1)
    }

    /// Builds a line whose direction the caller has already checked against
    /// [`EPS`].
    pub(crate) fn from_checked_dir(point: PointN<D>, dir: VectorN<D>) -> Self {
        debug_assert!(dir.norm() >= EPS);
        Self {
            point,
            dir,
            unit_dir: dir / dir.norm(),
        }
    }

    /// Returns the point `P` specifying the line.
    #[must_use]
    pub fn point(&self) -> &PointN<D> {
        &self.point
    }

    /// Returns the direction `D` of the line, as given at construction.
    #[must_use]
    pub fn dir(&self) -> &VectorN<D> {
        &self.dir
    }

    /// Returns the unit-length direction of the line.
    #[must_use]
    pub fn unit_dir(&self) -> &VectorN<D> {
        &self.unit_dir
    }

    /// Returns the dimension of the space containing the line.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        D
    }

    /// Returns `P + t * D`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> PointN<D> {
        self.point + self.dir * t
    }

    /// Returns the point of the line whose coordinate `coord` equals `value`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidInput`] if `coord` is not a valid index,
    /// and [`GeometryError::Degenerate`] if the line is parallel to the
    /// `x[coord] = value` hyperplane.
    pub fn point_where_coord(&self, coord: usize, value: f64) -> Result<PointN<D>> {
        if coord >= D {
            return Err(GeometryError::InvalidInput(format!(
                "coordinate index {coord} out of range for dimension {D}"
            )));
        }
        let d = self.dir[coord];
        if d.abs() < EPS {
            debug!(coord, value, "line parallel to coordinate hyperplane");
            return Err(GeometryError::Degenerate(format!(
                "no point of the line has coordinate {coord} = {value}"
            )));
        }
        let t = (value - self.point[coord]) / d;
        Ok(self.point_at(t))
    }

    /// Returns the parameter of the point of this line closest to `p`.
    #[must_use]
    pub fn closest_t(&self, p: &PointN<D>) -> f64 {
        (p - self.point).dot(&self.unit_dir) / self.dir.norm()
    }

    /// Returns the distance between this line and a point.
    #[must_use]
    pub fn distance_to_point(&self, p: &PointN<D>) -> f64 {
        (self.point_at(self.closest_t(p)) - p).norm()
    }

    /// Returns the minimum distance between this line and `other`.
    ///
    /// Solves for the parameters `t1`, `t2` minimizing
    /// `|(P1 + t1 * D1) - (P2 + t2 * D2)|`. Parallel lines pin `t1` to zero.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dp = self.point - other.point;

        let d1 = self.dir;
        let d2 = other.dir;
        let d1d2 = d1.dot(&d2);
        let d1d1 = d1.dot(&d1);
        let d2d2 = d2.dot(&d2);

        let denom = d1d1 - d1d2 * d1d2 / d2d2;
        let t1 = if denom.abs() < EPS {
            0.0
        } else {
            (d2 * (d1d2 / d2d2) - d1).dot(&dp) / denom
        };
        let t2 = (d2.dot(&dp) + t1 * d1d2) / d2d2;

        (dp + d1 * t1 - d2 * t2).norm()
    }
}

impl Line<2> {
    /// Creates a line through `point` perpendicular to `normal`.
    ///
    /// The direction is `(normal.y, -normal.x)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidInput`] if the normal is shorter than
    /// [`EPS`].
    pub fn from_normal(point: Point2, normal: Vector2) -> Result<Self> {
        Self::from_dir(point, Vector2::new(normal.y, -normal.x))
    }

    /// Returns the y coordinate of the point of this line with the given x.
    ///
    /// The line must not be vertical.
    #[must_use]
    pub fn y_for_x(&self, x: f64) -> f64 {
        self.point.y + self.dir.y / self.dir.x * (x - self.point.x)
    }

    /// Returns the x coordinate of the point of this line with the given y.
    ///
    /// The line must not be horizontal.
    #[must_use]
    pub fn x_for_y(&self, y: f64) -> f64 {
        self.point.x + self.dir.x / self.dir.y * (y - self.point.y)
    }
}

impl Line<3> {
    /// Returns the matrix rotating by `angle` radians around the direction of
    /// this line.
    ///
    /// For a line along `(0, 0, 1)`, a quarter turn maps `(1, 1, 0)` to
    /// `(-1, 1, 0)`.
    #[must_use]
    pub fn rotation(&self, angle: f64) -> Matrix3 {
        axis_angle_rotation(&self.unit_dir, angle)
    }
}
