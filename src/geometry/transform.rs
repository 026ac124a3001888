use crate::math::{Isometry3, Point3, UnitQuaternion, Vector3};

/// A rigid transformation applied to surfaces when a universe is
/// instantiated inside a cell.
///
/// Internally a rotation followed by a translation:
/// `x' = R * x + t`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    isometry: Isometry3,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transformation {
    /// The transformation that leaves every point in place.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            isometry: Isometry3::identity(),
        }
    }

    /// A pure translation by `offset`.
    #[must_use]
    pub fn translation(offset: Vector3) -> Self {
        Self {
            isometry: Isometry3::translation(offset.x, offset.y, offset.z),
        }
    }

    /// A pure rotation, given as angles in degrees about the x, y and z axes.
    ///
    /// The x rotation is applied first, then y, then z.
    #[must_use]
    pub fn rotation_degrees(angles: Vector3) -> Self {
        Self::new(Vector3::zeros(), angles)
    }

    /// Rotation by `angles` (degrees about x, y, z) followed by a translation.
    #[must_use]
    pub fn new(offset: Vector3, angles: Vector3) -> Self {
        let rotation = UnitQuaternion::from_euler_angles(
            angles.x.to_radians(),
            angles.y.to_radians(),
            angles.z.to_radians(),
        );
        Self {
            isometry: Isometry3::from_parts(offset.into(), rotation),
        }
    }

    /// Returns the transformation equivalent to applying `inner` first and
    /// then `self`.
    ///
    /// Used when descending one nesting level: the accumulated transformation
    /// of the parent is composed with the local transformation of the cell.
    #[must_use]
    pub fn compose(&self, inner: &Transformation) -> Transformation {
        Self {
            isometry: self.isometry * inner.isometry,
        }
    }

    /// Returns `true` if this is exactly the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.isometry == Isometry3::identity()
    }

    /// Applies the transformation to a point.
    #[must_use]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        self.isometry.transform_point(point)
    }

    /// Applies the rotational part of the transformation to a direction.
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        self.isometry.transform_vector(vector)
    }

    /// Returns the translational part.
    #[must_use]
    pub fn offset(&self) -> Vector3 {
        self.isometry.translation.vector
    }
}
