mod cylinder;
mod plane;
mod sphere;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;

use std::fmt;

use crate::definition::{SurfaceDefinition, SurfaceId, SurfaceParameters};
use crate::error::{GeometryError, SurfaceError};
use crate::geometry::Transformation;
use crate::math::Point3;
use crate::scene::InternalSurfaceId;

/// The geometric primitive behind a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceKind {
    /// An infinite plane.
    Plane(Plane),
    /// A sphere.
    Sphere(Sphere),
    /// An infinite cylinder.
    Cylinder(Cylinder),
}

impl SurfaceKind {
    /// Evaluates the implicit function of the primitive at `point`.
    #[must_use]
    pub fn function(&self, point: &Point3) -> f64 {
        match self {
            Self::Plane(p) => p.function(point),
            Self::Sphere(s) => s.function(point),
            Self::Cylinder(c) => c.function(point),
        }
    }

    /// Returns the primitive moved by `trans`.
    #[must_use]
    pub fn transformed(&self, trans: &Transformation) -> Self {
        match self {
            Self::Plane(p) => Self::Plane(p.transformed(trans)),
            Self::Sphere(s) => Self::Sphere(s.transformed(trans)),
            Self::Cylinder(c) => Self::Cylinder(c.transformed(trans)),
        }
    }

    fn from_parameters(params: &SurfaceParameters) -> Result<Self, GeometryError> {
        Ok(match *params {
            SurfaceParameters::Plane { normal, offset } => Self::Plane(Plane::new(normal, offset)?),
            SurfaceParameters::Sphere { center, radius } => {
                Self::Sphere(Sphere::new(center, radius)?)
            }
            SurfaceParameters::Cylinder {
                point,
                axis,
                radius,
            } => Self::Cylinder(Cylinder::new(point, axis, radius)?),
        })
    }
}

/// A runtime surface: a primitive tagged with the user id it was created
/// from.
///
/// Clones living in different universe instances share the same user id
/// but get distinct internal ids once registered in a geometry.
#[derive(Debug, Clone)]
pub struct Surface {
    user_id: SurfaceId,
    internal_id: Option<InternalSurfaceId>,
    kind: SurfaceKind,
}

impl Surface {
    /// Creates an unregistered surface.
    #[must_use]
    pub fn new(user_id: SurfaceId, kind: SurfaceKind) -> Self {
        Self {
            user_id,
            internal_id: None,
            kind,
        }
    }

    /// Builds the surface described by a user definition.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::BadSurfaceCreation`] if the parameters are
    /// degenerate.
    pub fn from_definition(definition: &SurfaceDefinition) -> Result<Self, SurfaceError> {
        let kind = SurfaceKind::from_parameters(&definition.parameters)
            .map_err(|e| SurfaceError::bad(definition.user_id, e.to_string()))?;
        Ok(Self::new(definition.user_id, kind))
    }

    /// Returns the user-facing id this surface was created from.
    #[must_use]
    pub fn user_id(&self) -> SurfaceId {
        self.user_id
    }

    /// Returns the dense internal id, or `None` if the surface was never
    /// registered in a geometry.
    #[must_use]
    pub fn internal_id(&self) -> Option<InternalSurfaceId> {
        self.internal_id
    }

    pub(crate) fn set_internal_id(&mut self, id: InternalSurfaceId) {
        self.internal_id = Some(id);
    }

    /// Returns the geometric primitive.
    #[must_use]
    pub fn kind(&self) -> &SurfaceKind {
        &self.kind
    }

    /// Returns an unregistered copy moved by `trans`, keeping the user id.
    #[must_use]
    pub fn transformed(&self, trans: &Transformation) -> Self {
        if trans.is_identity() {
            return Self::new(self.user_id, self.kind.clone());
        }
        Self::new(self.user_id, self.kind.transformed(trans))
    }

    /// Returns `true` if both surfaces describe the same geometry,
    /// regardless of their ids.
    #[must_use]
    pub fn same_geometry(&self, other: &Surface) -> bool {
        self.kind == other.kind
    }

    /// Evaluates the implicit function at `point`.
    #[must_use]
    pub fn function(&self, point: &Point3) -> f64 {
        self.kind.function(point)
    }

    /// Returns `true` if `point` lies on the positive side.
    #[must_use]
    pub fn sense_of(&self, point: &Point3) -> bool {
        self.function(point) > 0.0
    }
}

/// A surface reference paired with the side of it a cell lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenseSurface {
    /// The bounding surface.
    pub surface: InternalSurfaceId,
    /// `true` if the cell lies on the positive side of the surface.
    pub sense: bool,
}

impl SenseSurface {
    /// Creates a new surface-with-sense pair.
    #[must_use]
    pub fn new(surface: InternalSurfaceId, sense: bool) -> Self {
        Self { surface, sense }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plane(p) => {
                let n = p.normal();
                write!(f, "plane n = ({}, {}, {}) d = {}", n.x, n.y, n.z, p.offset())
            }
            Self::Sphere(s) => {
                let c = s.center();
                write!(f, "sphere c = ({}, {}, {}) r = {}", c.x, c.y, c.z, s.radius())
            }
            Self::Cylinder(cy) => {
                let a = cy.anchor();
                let u = cy.axis();
                write!(
                    f,
                    "cylinder p = ({}, {}, {}) u = ({}, {}, {}) r = {}",
                    a.x,
                    a.y,
                    a.z,
                    u.x,
                    u.y,
                    u.z,
                    cy.radius()
                )
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    #[test]
    fn definition_builds_surface() {
        let def = SurfaceDefinition::sphere(SurfaceId(7), Point3::origin(), 2.0);
        let s = Surface::from_definition(&def).unwrap();
        assert_eq!(s.user_id(), SurfaceId(7));
        assert!(s.internal_id().is_none());
        assert!(!s.sense_of(&Point3::origin()));
        assert!(s.sense_of(&Point3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn degenerate_definition_names_surface() {
        let def = SurfaceDefinition::sphere(SurfaceId(9), Point3::origin(), 0.0);
        let err = Surface::from_definition(&def).unwrap_err();
        let SurfaceError::BadSurfaceCreation { id, reason } = err;
        assert_eq!(id, SurfaceId(9));
        assert!(reason.contains("radius"));
    }

    #[test]
    fn equality_ignores_user_id() {
        let a = Surface::from_definition(&SurfaceDefinition::plane_x(SurfaceId(1), 2.0)).unwrap();
        let b = Surface::from_definition(&SurfaceDefinition::plane_x(SurfaceId(2), 2.0)).unwrap();
        let c = Surface::from_definition(&SurfaceDefinition::plane_y(SurfaceId(3), 2.0)).unwrap();
        assert!(a.same_geometry(&b));
        assert!(!a.same_geometry(&c));
    }

    #[test]
    fn transformed_keeps_user_id() {
        let a = Surface::from_definition(&SurfaceDefinition::plane_z(SurfaceId(4), 0.0)).unwrap();
        let t = a.transformed(&Transformation::translation(Vector3::new(0.0, 0.0, 1.0)));
        assert_eq!(t.user_id(), SurfaceId(4));
        assert!(!t.same_geometry(&a));
    }

    #[test]
    fn kind_display_lists_parameters() {
        let plane = Surface::from_definition(&SurfaceDefinition::plane_x(SurfaceId(1), 2.5)).unwrap();
        assert_eq!(plane.kind().to_string(), "plane n = (1, 0, 0) d = 2.5");
        let sphere =
            Surface::from_definition(&SurfaceDefinition::sphere(SurfaceId(2), Point3::new(1.0, 2.0, 3.0), 4.0))
                .unwrap();
        assert_eq!(sphere.kind().to_string(), "sphere c = (1, 2, 3) r = 4");
    }

    #[test]
    fn identity_transform_keeps_geometry() {
        let a = Surface::from_definition(&SurfaceDefinition::plane_z(SurfaceId(4), 1.5)).unwrap();
        let t = a.transformed(&Transformation::identity());
        assert_eq!(t.kind(), a.kind());
        assert!(t.internal_id().is_none());
    }
}
