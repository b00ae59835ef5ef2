use super::{Matrix3, Vector3};

/// Builds the matrix rotating by `angle` radians around the unit vector `axis`
/// (Rodrigues' formula).
///
/// `axis` must already be normalized; the result is not a rotation otherwise.
#[must_use]
#[allow(clippy::many_single_char_names, clippy::suspicious_operation_groupings)]
pub fn axis_angle_rotation(axis: &Vector3, angle: f64) -> Matrix3 {
    let c = angle.cos();
    let s = angle.sin();
    let mc = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    Matrix3::new(
        c + x * x * mc,     x * y * mc - z * s, x * z * mc + y * s,
        y * x * mc + z * s, c + y * y * mc,     y * z * mc - x * s,
        z * x * mc - y * s, z * y * mc + x * s, c + z * z * mc,
    )
}
