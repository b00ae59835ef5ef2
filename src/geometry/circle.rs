use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

use super::{Line3, Plane3};

/// A circle in 3D space.
///
/// Defined by its center `C`, radius `r`, and the unit normal `N` of the
/// plane containing it. Center and normal are kept as a [`Line3`], the axis
/// the circle is swept around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle3 {
    axis: Line3,
    radius: f64,
    radial: Vector3,
}

impl Circle3 {
    /// Creates a new circle.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the circle
    /// * `normal` - Normal of the circle plane; need not be unit length
    /// * `radius` - Radius (must be positive)
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidInput`] if the radius is not a positive
    /// finite number or the normal is shorter than [`EPS`](crate::math::EPS).
    pub fn new(center: Point3, normal: Vector3, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidInput(
                "circle radius must be positive".into(),
            ));
        }
        let axis = Line3::from_dir(center, normal)?;
        let radial = radial_vector(axis.unit_dir()) * radius;
        Ok(Self {
            axis,
            radius,
            radial,
        })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        self.axis.point()
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the unit normal of the circle plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        self.axis.unit_dir()
    }

    /// Returns the line through the center along the normal.
    #[must_use]
    pub fn axis(&self) -> &Line3 {
        &self.axis
    }

    /// Returns the point on the circumference at `radians`.
    ///
    /// The point at angle zero is unspecified but fixed for a given circle.
    #[must_use]
    pub fn point_at(&self, radians: f64) -> Point3 {
        self.center() + self.axis.rotation(radians) * self.radial
    }

    /// Returns the plane containing the circle.
    #[must_use]
    pub fn plane(&self) -> Plane3 {
        Plane3::from_checked_normal(*self.center(), *self.axis.dir())
    }
}

/// Unit vector orthogonal to the unit vector `n`.
///
/// Solves `r . n = 0` for the coordinate where `n` is largest in magnitude,
/// fixing the other two coordinates of `r` at one.
fn radial_vector(n: &Vector3) -> Vector3 {
    let (xabs, yabs, zabs) = (n.x.abs(), n.y.abs(), n.z.abs());
    let r = if xabs >= yabs && xabs >= zabs {
        Vector3::new(-(n.y + n.z) / n.x, 1.0, 1.0)
    } else if yabs >= zabs {
        Vector3::new(1.0, -(n.x + n.z) / n.y, 1.0)
    } else {
        Vector3::new(1.0, 1.0, -(n.x + n.y) / n.z)
    };
    r / r.norm()
}
