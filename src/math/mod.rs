/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Rigid transformation (rotation followed by translation).
pub type Isometry3 = nalgebra::Isometry3<f64>;

/// Unit quaternion used for rotations.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for degeneracy checks.
///
/// Surface equality does not use it: two surfaces are the same only when
/// their canonical parameters are bit-for-bit equal.
pub const TOLERANCE: f64 = 1e-10;
