use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, PointN, VectorN, EPS};

use super::Line3;

/// An infinite hyperplane in `D`-dimensional space, given by a point and a
/// normal vector.
///
/// The normal is stored as given (it need not be unit length) together with
/// its normalized copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<const D: usize> {
    point: PointN<D>,
    normal: VectorN<D>,
    unit_normal: VectorN<D>,
}

/// A plane in 3D space.
pub type Plane3 = Plane<3>;

impl<const D: usize> Plane<D> {
    /// Creates a new plane from a point and a normal vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidInput`] if the normal is shorter than
    /// [`EPS`] or not finite.
    pub fn new(point: PointN<D>, normal: VectorN<D>) -> Result<Self> {
        let len = normal.norm();
        if !len.is_finite() || len < EPS {
            return Err(GeometryError::InvalidInput(
                "plane normal vector too small".into(),
            ));
        }
        Ok(Self {
            point,
            normal,
            unit_normal: normal / len,
        })
    }

    /// Builds a plane whose normal the caller has already checked against
    /// [`EPS`].
    pub(crate) fn from_checked_normal(point: PointN<D>, normal: VectorN<D>) -> Self {
        debug_assert!(normal.norm() >= EPS);
        Self {
            point,
            normal,
            unit_normal: normal / normal.norm(),
        }
    }

    /// Returns the point specifying the plane.
    #[must_use]
    pub fn point(&self) -> &PointN<D> {
        &self.point
    }

    /// Returns the normal vector, as given at construction.
    #[must_use]
    pub fn normal(&self) -> &VectorN<D> {
        &self.normal
    }

    /// Returns the unit normal vector.
    #[must_use]
    pub fn unit_normal(&self) -> &VectorN<D> {
        &self.unit_normal
    }

    /// Signed distance from `p` to the plane.
    /// Positive = on the normal side, negative = opposite.
    #[must_use]
    pub fn signed_distance(&self, p: &PointN<D>) -> f64 {
        self.unit_normal.dot(&(p - self.point))
    }

    /// Returns the distance between this plane and a point.
    #[must_use]
    pub fn distance(&self, p: &PointN<D>) -> f64 {
        self.signed_distance(p).abs()
    }
}

impl Plane<3> {
    /// Returns the point where `line` crosses this plane.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the line is parallel to the
    /// plane, whether it lies in the plane or misses it.
    pub fn intersect_line(&self, line: &Line3) -> Result<Point3> {
        let denom = line.dir().dot(&self.normal);
        if denom.abs() < EPS {
            debug!(denom, "line and plane are parallel");
            return Err(GeometryError::Degenerate(
                "line and plane are parallel".into(),
            ));
        }
        let t = (self.point - line.point()).dot(&self.normal) / denom;
        Ok(line.point_at(t))
    }

    /// Returns the line along which this plane meets `other`.
    ///
    /// The direction of the result is the cross product of the two unit
    /// normals; it is not normalized.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the planes are parallel or
    /// coincident.
    pub fn intersect_plane(&self, other: &Self) -> Result<Line3> {
        let n1 = self.unit_normal;
        let n2 = other.unit_normal;

        let normal_cross = n1.cross(&n2);
        if normal_cross.norm() < EPS {
            debug!("planes are parallel");
            return Err(GeometryError::Degenerate("planes are parallel".into()));
        }

        // The point on the line spanned by the two normals: p = c1 * n1 + c2 * n2,
        // with n1.p = h1 and n2.p = h2.
        let normal_dot = n1.dot(&n2);
        let h1 = n1.dot(&self.point.coords);
        let h2 = n2.dot(&other.point.coords);

        let denom = 1.0 - normal_dot * normal_dot;
        let c1 = (h1 - h2 * normal_dot) / denom;
        let c2 = (h2 - h1 * normal_dot) / denom;

        Ok(Line3::from_checked_dir(
            Point3::from(n1 * c1 + n2 * c2),
            normal_cross,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::{Point2, Vector2, Vector3};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn rejects_short_normal() {
        let r = Plane3::new(p(0.0, 0.0, 0.0), v(0.0, 0.0, 0.0));
        assert!(matches!(r, Err(GeometryError::InvalidInput(_))));
    }

    #[test]
    fn rejects_non_finite_normal() {
        let r = Plane3::new(p(0.0, 0.0, 0.0), v(0.0, f64::NAN, 1.0));
        assert!(matches!(r, Err(GeometryError::InvalidInput(_))));
        assert!(Plane3::new(p(0.0, 0.0, 0.0), v(f64::NEG_INFINITY, 0.0, 0.0)).is_err());
    }

    #[test]
    fn point_distance() {
        let plane = Plane3::new(p(1.0, 1.0, 1.0), v(1.0, 0.0, 0.0)).unwrap();
        assert_abs_diff_eq!(plane.distance(&p(2.0, 2.0, 1.0)), 1.0, epsilon = EPS);
        assert_abs_diff_eq!(plane.distance(&p(0.0, 2.0, 1.0)), 1.0, epsilon = EPS);
    }

    #[test]
    fn signed_distance_follows_normal() {
        let plane = Plane3::new(p(0.0, 0.0, 2.0), v(0.0, 0.0, 5.0)).unwrap();
        assert_abs_diff_eq!(plane.signed_distance(&p(3.0, 1.0, 5.0)), 3.0, epsilon = EPS);
        assert_abs_diff_eq!(plane.signed_distance(&p(3.0, 1.0, -1.0)), -3.0, epsilon = EPS);
        assert_abs_diff_eq!(*plane.unit_normal(), v(0.0, 0.0, 1.0), epsilon = EPS);
    }

    #[test]
    fn planar_hyperplane_is_a_line() {
        let plane = Plane::<2>::new(Point2::new(0.0, 1.0), Vector2::new(1.0, 1.0)).unwrap();
        let d = plane.distance(&Point2::new(1.0, 2.0));
        assert_abs_diff_eq!(d, 2.0_f64.sqrt(), epsilon = EPS);
    }

    #[test]
    fn line_intersection() {
        let plane = Plane3::new(p(1.0, 1.0, 1.0), v(1.0, 0.0, 0.0)).unwrap();

        let line = Line3::from_two_points(p(5.0, 3.0, 6.0), p(1.0, 20.0, 30.0)).unwrap();
        let x = plane.intersect_line(&line).unwrap();
        assert_abs_diff_eq!(x, p(1.0, 20.0, 30.0), epsilon = EPS);

        let line = Line3::from_dir(p(5.0, 4.0, 3.0), v(1.0, 0.0, 0.0)).unwrap();
        let x = plane.intersect_line(&line).unwrap();
        assert_abs_diff_eq!(x, p(1.0, 4.0, 3.0), epsilon = EPS);
    }

    #[test]
    fn parallel_line_is_degenerate() {
        let plane = Plane3::new(p(1.0, 1.0, 1.0), v(1.0, 0.0, 0.0)).unwrap();
        let off = Line3::from_dir(p(5.0, 0.0, 0.0), v(0.0, 1.0, 1.0)).unwrap();
        let on = Line3::from_dir(p(1.0, 0.0, 0.0), v(0.0, 1.0, 1.0)).unwrap();
        assert!(plane.intersect_line(&off).unwrap_err().is_degenerate());
        assert!(plane.intersect_line(&on).unwrap_err().is_degenerate());
    }

    #[test]
    fn plane_intersection() {
        let p1 = Plane3::new(p(0.5, 0.5, 3.0), v(1.0, 1.0, 0.0)).unwrap();
        let p2 = Plane3::new(p(-4.0, 2.0, 8.0), v(0.0, 0.0, 1.0)).unwrap();

        let line = p1.intersect_plane(&p2).unwrap();
        let expected = v(1.0, -1.0, 0.0).normalize();
        assert_abs_diff_eq!(line.unit_dir().dot(&expected).abs(), 1.0, epsilon = EPS);
        assert_abs_diff_eq!(line.distance_to_point(&p(1.0, 0.0, 8.0)), 0.0, epsilon = EPS);
    }

    #[test]
    fn intersection_line_lies_on_both_planes() {
        let a = Plane3::new(p(1.0, 2.0, 3.0), v(1.0, -2.0, 0.5)).unwrap();
        let b = Plane3::new(p(-1.0, 0.0, 4.0), v(0.0, 3.0, 1.0)).unwrap();
        let line = a.intersect_plane(&b).unwrap();
        for t in [-2.0, 0.0, 0.5, 3.0] {
            let q = line.point_at(t);
            assert_abs_diff_eq!(a.distance(&q), 0.0, epsilon = EPS);
            assert_abs_diff_eq!(b.distance(&q), 0.0, epsilon = EPS);
        }
    }

    #[test]
    fn parallel_planes_are_degenerate() {
        let p1 = Plane3::new(p(3.0, 4.0, -5.0), v(4.0, 0.0, 0.0)).unwrap();
        let p2 = Plane3::new(p(42.0, -231.0, 7.0), v(-1.0, 0.0, 0.0)).unwrap();
        let err = p1.intersect_plane(&p2).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn rederived_plane_gives_same_results() {
        let plane = Plane3::new(p(0.2, -1.0, 3.0), v(1.0, 2.0, -0.5)).unwrap();
        let again = Plane3::new(*plane.point(), *plane.normal()).unwrap();
        let line = Line3::from_dir(p(4.0, 4.0, 4.0), v(-1.0, 0.3, 2.0)).unwrap();
        let q = p(7.0, -3.0, 1.0);

        assert_abs_diff_eq!(plane.distance(&q), again.distance(&q), epsilon = EPS);
        assert_abs_diff_eq!(
            plane.intersect_line(&line).unwrap(),
            again.intersect_line(&line).unwrap(),
            epsilon = EPS
        );
    }
}
