use crate::error::GeometryError;
use crate::geometry::Transformation;
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite cylindrical surface.
///
/// Stored in canonical form so that two descriptions of the same cylinder
/// compare equal: the axis is a unit vector whose first non-zero component
/// is positive, and the anchor is the point on the axis closest to the
/// origin.
///
/// The positive side is the outside of the cylinder.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    anchor: Point3,
    axis: Vector3,
    radius: f64,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Arguments
    ///
    /// * `point` - Any point on the cylinder axis
    /// * `axis` - Axis direction (will be normalized)
    /// * `radius` - Radius (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or the axis is
    /// zero-length.
    pub fn new(point: Point3, axis: Vector3, radius: f64) -> Result<Self, GeometryError> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "cylinder radius must be positive".into(),
            ));
        }
        let len = axis.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector);
        }
        Ok(Self::canonical(point, axis / len, radius))
    }

    fn canonical(point: Point3, axis: Vector3, radius: f64) -> Self {
        let flip = axis
            .iter()
            .find(|c| c.abs() > TOLERANCE)
            .is_some_and(|c| *c < 0.0);
        let axis = if flip { -axis } else { axis };
        let anchor = point - axis * point.coords.dot(&axis);
        Self {
            anchor,
            axis,
            radius,
        }
    }

    /// Returns the point on the axis closest to the origin.
    #[must_use]
    pub fn anchor(&self) -> &Point3 {
        &self.anchor
    }

    /// Returns the axis direction (unit vector).
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Evaluates the squared distance to the axis minus `r^2`.
    #[must_use]
    pub fn function(&self, point: &Point3) -> f64 {
        let d = point - self.anchor;
        let radial = d - self.axis * d.dot(&self.axis);
        radial.norm_squared() - self.radius * self.radius
    }

    /// Returns the cylinder moved by `trans`.
    #[must_use]
    pub fn transformed(&self, trans: &Transformation) -> Self {
        let axis = trans.transform_vector(&self.axis);
        let axis = axis / axis.norm();
        Self::canonical(trans.transform_point(&self.anchor), axis, self.radius)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn z_cylinder(x: f64, y: f64, radius: f64) -> Cylinder {
        Cylinder::new(Point3::new(x, y, 0.0), Vector3::z(), radius).unwrap()
    }

    #[test]
    fn invalid_parameters() {
        assert!(Cylinder::new(Point3::origin(), Vector3::z(), 0.0).is_err());
        assert!(Cylinder::new(Point3::origin(), Vector3::zeros(), 1.0).is_err());
    }

    #[test]
    fn anchor_is_projected_onto_axis() {
        let c = Cylinder::new(Point3::new(1.0, 2.0, 5.0), Vector3::z(), 1.0).unwrap();
        assert_eq!(*c.anchor(), Point3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn reversed_axis_is_same_cylinder() {
        let up = Cylinder::new(Point3::new(1.0, 0.0, 0.0), Vector3::z(), 1.0).unwrap();
        let down = Cylinder::new(Point3::new(1.0, 0.0, 3.0), -Vector3::z(), 1.0).unwrap();
        assert_eq!(up, down);
    }

    #[test]
    fn translation_along_axis_keeps_cylinder() {
        let c = z_cylinder(0.5, 0.5, 0.4);
        let moved = c.transformed(&Transformation::translation(Vector3::new(0.0, 0.0, 10.0)));
        assert_eq!(moved, c);
    }

    #[test]
    fn translation_across_axis_moves_cylinder() {
        let c = z_cylinder(0.0, 0.0, 0.4);
        let moved = c.transformed(&Transformation::translation(Vector3::new(1.0, 0.0, 0.0)));
        assert_eq!(moved, z_cylinder(1.0, 0.0, 0.4));
    }

    #[test]
    fn function_sign() {
        let c = z_cylinder(0.0, 0.0, 1.0);
        assert!(c.function(&Point3::new(0.5, 0.0, 100.0)) < 0.0);
        assert!(c.function(&Point3::new(0.0, 2.0, -3.0)) > 0.0);
    }
}
