use crate::error::GeometryError;
use crate::geometry::Transformation;
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite plane `n · x = d` with unit normal `n`.
///
/// The positive side is the half-space the normal points into.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vector3,
    offset: f64,
}

impl Plane {
    /// Creates a plane from a (not necessarily unit) normal and the offset
    /// `d` in `n · x = d`.
    ///
    /// Normal and offset are rescaled together so the normal has unit length.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length.
    pub fn new(normal: Vector3, offset: f64) -> Result<Self, GeometryError> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector);
        }
        Ok(Self::normalized(normal, offset, len))
    }

    /// Creates the plane through `point` with the given normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length.
    pub fn from_point_normal(point: &Point3, normal: Vector3) -> Result<Self, GeometryError> {
        let offset = normal.dot(&point.coords);
        Self::new(normal, offset)
    }

    fn normalized(normal: Vector3, offset: f64, len: f64) -> Self {
        Self {
            normal: normal / len,
            offset: offset / len,
        }
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the offset `d` in `n · x = d`.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Evaluates `n · x - d`.
    #[must_use]
    pub fn function(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) - self.offset
    }

    /// Returns the plane moved by `trans`.
    #[must_use]
    pub fn transformed(&self, trans: &Transformation) -> Self {
        let normal = trans.transform_vector(&self.normal);
        let anchor = Point3::from(self.normal * self.offset);
        let offset = normal.dot(&trans.transform_point(&anchor).coords);
        let len = normal.norm();
        Self::normalized(normal, offset, len)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn normal_is_rescaled() {
        let p = Plane::new(Vector3::new(0.0, 2.0, 0.0), 4.0).unwrap();
        assert_eq!(*p.normal(), Vector3::y());
        assert!((p.offset() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_normal_is_rejected() {
        assert!(Plane::new(Vector3::zeros(), 1.0).is_err());
    }

    #[test]
    fn function_sign_follows_normal() {
        let p = Plane::new(Vector3::x(), 1.0).unwrap();
        assert!(p.function(&Point3::new(2.0, 0.0, 0.0)) > 0.0);
        assert!(p.function(&Point3::new(0.0, 5.0, 0.0)) < 0.0);
    }

    #[test]
    fn translation_shifts_offset_exactly() {
        let p = Plane::new(Vector3::x(), 1.0).unwrap();
        let moved = p.transformed(&Transformation::translation(Vector3::new(2.5, 7.0, -3.0)));
        assert_eq!(moved, Plane::new(Vector3::x(), 3.5).unwrap());
    }

    #[test]
    fn rotation_turns_normal() {
        let p = Plane::new(Vector3::x(), 2.0).unwrap();
        let turned = p.transformed(&Transformation::rotation_degrees(Vector3::new(0.0, 0.0, 90.0)));
        assert_relative_eq!(*turned.normal(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(turned.offset(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn from_point_normal_contains_point() {
        let point = Point3::new(1.0, 2.0, 3.0);
        let p = Plane::from_point_normal(&point, Vector3::new(1.0, 1.0, 0.0)).unwrap();
        assert!(p.function(&point).abs() < 1e-12);
    }
}
