mod rotation;

pub use rotation::axis_angle_rotation;

/// Point in `D`-dimensional space.
pub type PointN<const D: usize> = nalgebra::Point<f64, D>;

/// Vector in `D`-dimensional space.
pub type VectorN<const D: usize> = nalgebra::SVector<f64, D>;

/// 2D point type.
pub type Point2 = PointN<2>;

/// 3D point type.
pub type Point3 = PointN<3>;

/// 2D vector type.
pub type Vector2 = VectorN<2>;

/// 3D vector type.
pub type Vector3 = VectorN<3>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Shared threshold below which a length, dot product or determinant-like
/// quantity counts as zero.
///
/// Every constructor and degeneracy check in the crate compares against this
/// value; nothing picks its own tolerance.
pub const EPS: f64 = 1e-8;
