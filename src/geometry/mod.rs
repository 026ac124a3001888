pub mod surface;
pub mod transform;

pub use surface::{Cylinder, Plane, SenseSurface, Sphere, Surface, SurfaceKind};
pub use transform::Transformation;
