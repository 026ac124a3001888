use std::fmt;

use crate::math::{Point3, Vector3};

use super::SurfaceId;

/// Geometric parameters of a user surface, before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceParameters {
    /// Plane `normal · x = offset`.
    Plane { normal: Vector3, offset: f64 },
    /// Sphere around `center`.
    Sphere { center: Point3, radius: f64 },
    /// Infinite cylinder through `point` along `axis`.
    Cylinder {
        point: Point3,
        axis: Vector3,
        radius: f64,
    },
}

/// A user-authored surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceDefinition {
    /// The id the user gave the surface.
    pub user_id: SurfaceId,
    /// Geometric parameters.
    pub parameters: SurfaceParameters,
}

impl SurfaceDefinition {
    /// Creates a new surface definition.
    #[must_use]
    pub fn new(user_id: SurfaceId, parameters: SurfaceParameters) -> Self {
        Self {
            user_id,
            parameters,
        }
    }

    /// Plane `x = position`.
    #[must_use]
    pub fn plane_x(user_id: SurfaceId, position: f64) -> Self {
        Self::plane(user_id, Vector3::x(), position)
    }

    /// Plane `y = position`.
    #[must_use]
    pub fn plane_y(user_id: SurfaceId, position: f64) -> Self {
        Self::plane(user_id, Vector3::y(), position)
    }

    /// Plane `z = position`.
    #[must_use]
    pub fn plane_z(user_id: SurfaceId, position: f64) -> Self {
        Self::plane(user_id, Vector3::z(), position)
    }

    /// General plane `normal · x = offset`.
    #[must_use]
    pub fn plane(user_id: SurfaceId, normal: Vector3, offset: f64) -> Self {
        Self::new(user_id, SurfaceParameters::Plane { normal, offset })
    }

    /// Sphere with the given center and radius.
    #[must_use]
    pub fn sphere(user_id: SurfaceId, center: Point3, radius: f64) -> Self {
        Self::new(user_id, SurfaceParameters::Sphere { center, radius })
    }

    /// Cylinder parallel to the z axis, through `(x, y)`.
    #[must_use]
    pub fn cylinder_z(user_id: SurfaceId, x: f64, y: f64, radius: f64) -> Self {
        Self::cylinder(user_id, Point3::new(x, y, 0.0), Vector3::z(), radius)
    }

    /// General infinite cylinder.
    #[must_use]
    pub fn cylinder(user_id: SurfaceId, point: Point3, axis: Vector3, radius: f64) -> Self {
        Self::new(
            user_id,
            SurfaceParameters::Cylinder {
                point,
                axis,
                radius,
            },
        )
    }
}

/// A signed reference from a cell to one of its bounding surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceRef {
    /// The referenced user surface.
    pub id: SurfaceId,
    /// `true` if the cell lies on the positive side of the surface.
    pub sense: bool,
}

impl SurfaceRef {
    /// Reference to the positive side of `id`.
    #[must_use]
    pub fn positive(id: u32) -> Self {
        Self {
            id: SurfaceId(id),
            sense: true,
        }
    }

    /// Reference to the negative side of `id`.
    #[must_use]
    pub fn negative(id: u32) -> Self {
        Self {
            id: SurfaceId(id),
            sense: false,
        }
    }

    /// Builds a reference from the signed notation used in input files,
    /// where the sign selects the side.
    ///
    /// Returns `None` for `0`, which has no sign, and for magnitudes that
    /// don't fit a surface id.
    #[must_use]
    pub fn from_signed(value: i64) -> Option<Self> {
        if value == 0 {
            return None;
        }
        let id = u32::try_from(value.unsigned_abs()).ok()?;
        Some(Self {
            id: SurfaceId(id),
            sense: value > 0,
        })
    }
}

impl fmt::Display for SurfaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sense { '+' } else { '-' };
        write!(f, "{sign}{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_references() {
        assert_eq!(SurfaceRef::from_signed(3), Some(SurfaceRef::positive(3)));
        assert_eq!(SurfaceRef::from_signed(-12), Some(SurfaceRef::negative(12)));
        assert_eq!(SurfaceRef::from_signed(0), None);
        assert_eq!(SurfaceRef::from_signed(i64::MIN), None);
    }

    #[test]
    fn display_keeps_sign() {
        assert_eq!(SurfaceRef::negative(5).to_string(), "-5");
        assert_eq!(SurfaceRef::positive(5).to_string(), "+5");
    }
}
