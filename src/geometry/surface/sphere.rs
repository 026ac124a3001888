use crate::error::GeometryError;
use crate::geometry::Transformation;
use crate::math::{Point3, TOLERANCE};

/// A spherical surface given by its center and radius.
///
/// The positive side is the outside of the sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn new(center: Point3, radius: f64) -> Result<Self, GeometryError> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "sphere radius must be positive".into(),
            ));
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the sphere.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Evaluates `|x - c|^2 - r^2`.
    #[must_use]
    pub fn function(&self, point: &Point3) -> f64 {
        (point - self.center).norm_squared() - self.radius * self.radius
    }

    /// Returns the sphere moved by `trans`.
    #[must_use]
    pub fn transformed(&self, trans: &Transformation) -> Self {
        Self {
            center: trans.transform_point(&self.center),
            radius: self.radius,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    #[test]
    fn invalid_radius() {
        assert!(Sphere::new(Point3::origin(), 0.0).is_err());
        assert!(Sphere::new(Point3::origin(), -1.0).is_err());
    }

    #[test]
    fn inside_is_negative() {
        let s = Sphere::new(Point3::new(1.0, 1.0, 1.0), 2.0).unwrap();
        assert!(s.function(&Point3::new(1.0, 1.0, 1.0)) < 0.0);
        assert!(s.function(&Point3::new(4.0, 1.0, 1.0)) > 0.0);
    }

    #[test]
    fn rotation_about_center_is_no_op_for_origin_sphere() {
        let s = Sphere::new(Point3::origin(), 1.5).unwrap();
        let r = s.transformed(&Transformation::rotation_degrees(Vector3::new(30.0, 60.0, 90.0)));
        assert_eq!(r, s);
    }

    #[test]
    fn translation_moves_center() {
        let s = Sphere::new(Point3::origin(), 1.0).unwrap();
        let t = s.transformed(&Transformation::translation(Vector3::new(0.0, 0.0, 4.0)));
        assert_eq!(*t.center(), Point3::new(0.0, 0.0, 4.0));
        assert!((t.radius() - 1.0).abs() < f64::EPSILON);
    }
}
