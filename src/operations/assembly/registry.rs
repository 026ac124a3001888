use tracing::warn;

use crate::definition::SurfaceId;
use crate::error::SceneError;
use crate::geometry::{SenseSurface, Surface, Transformation};
use crate::scene::{Geometry, InternalSurfaceId};

/// Clones user surfaces into the geometry, collapsing clones that coincide
/// with a surface already bounding the enclosing cells.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SurfaceRegistry {
    /// Largest surface id the user declared directly. Surfaces above it
    /// were generated by features and never trigger a redundancy warning.
    max_user_surface: SurfaceId,
    warn_redundant: bool,
}

impl SurfaceRegistry {
    pub(crate) fn new(max_user_surface: SurfaceId, warn_redundant: bool) -> Self {
        Self {
            max_user_surface,
            warn_redundant,
        }
    }

    /// Returns the surface to use for `surface` moved by `trans`.
    ///
    /// Only `parent_surfaces` is searched for an equal surface: the same
    /// geometry may exist as distinct surfaces in unrelated branches.
    pub(crate) fn add_surface(
        &self,
        geometry: &mut Geometry,
        surface: &Surface,
        trans: &Transformation,
        parent_surfaces: &[SenseSurface],
    ) -> Result<InternalSurfaceId, SceneError> {
        let new_surface = surface.transformed(trans);

        for parent in parent_surfaces {
            let existing = geometry.surface(parent.surface).ok_or_else(|| {
                SceneError::EntityNotFound(format!("surface {}", parent.surface))
            })?;
            if !existing.same_geometry(&new_surface) {
                continue;
            }
            if self.warn_redundant
                && existing.user_id() != new_surface.user_id()
                && new_surface.user_id() <= self.max_user_surface
            {
                warn!(
                    surface = %new_surface.user_id(),
                    kept = %existing.user_id(),
                    geometry = %existing.kind(),
                    "surface {} is redundant and is eliminated from the geometry",
                    new_surface.user_id()
                );
            }
            return Ok(parent.surface);
        }

        Ok(geometry.add_surface(new_surface))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::definition::SurfaceDefinition;
    use crate::math::Vector3;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Resolves user surface `user` against an equal parent surface 1 and
    /// returns the log output.
    fn log_of_collapse(user: u32, max_user_surface: u32, warn_redundant: bool) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut geo = Geometry::new();
            let registry = SurfaceRegistry::new(SurfaceId(max_user_surface), warn_redundant);
            let id = Transformation::identity();
            let outer = registry.add_surface(&mut geo, &plane_x(1, 2.0), &id, &[]).unwrap();
            let parents = [SenseSurface::new(outer, true)];
            let kept = registry.add_surface(&mut geo, &plane_x(user, 2.0), &id, &parents).unwrap();
            assert_eq!(kept, outer);
        });
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn plane_x(id: u32, x: f64) -> Surface {
        Surface::from_definition(&SurfaceDefinition::plane_x(SurfaceId(id), x)).unwrap()
    }

    #[test]
    fn new_surfaces_get_dense_ids() {
        let mut geo = Geometry::new();
        let registry = SurfaceRegistry::new(SurfaceId(10), true);
        let id = Transformation::identity();
        let a = registry.add_surface(&mut geo, &plane_x(1, 0.0), &id, &[]).unwrap();
        let b = registry.add_surface(&mut geo, &plane_x(2, 1.0), &id, &[]).unwrap();
        assert_eq!((a.index(), b.index()), (0, 1));
        assert_eq!(geo.surface_user_id(b), Some(SurfaceId(2)));
    }

    #[test]
    fn equal_parent_surface_is_reused() {
        let mut geo = Geometry::new();
        let registry = SurfaceRegistry::new(SurfaceId(10), true);
        let id = Transformation::identity();
        let outer = registry.add_surface(&mut geo, &plane_x(1, 2.0), &id, &[]).unwrap();
        let parents = [SenseSurface::new(outer, true)];

        // Same plane under another user id, and the same user surface again.
        let twin = registry.add_surface(&mut geo, &plane_x(7, 2.0), &id, &parents).unwrap();
        let again = registry.add_surface(&mut geo, &plane_x(1, 2.0), &id, &parents).unwrap();
        assert_eq!(twin, outer);
        assert_eq!(again, outer);
        assert_eq!(geo.surfaces().len(), 1);
    }

    #[test]
    fn dedup_is_scoped_to_parent_surfaces() {
        let mut geo = Geometry::new();
        let registry = SurfaceRegistry::new(SurfaceId(10), true);
        let id = Transformation::identity();
        let first = registry.add_surface(&mut geo, &plane_x(1, 2.0), &id, &[]).unwrap();
        let second = registry.add_surface(&mut geo, &plane_x(1, 2.0), &id, &[]).unwrap();
        assert_ne!(first, second);
        assert_eq!(geo.surfaces().len(), 2);
    }

    #[test]
    fn transformed_clone_is_compared_after_transform() {
        let mut geo = Geometry::new();
        let registry = SurfaceRegistry::new(SurfaceId(10), false);
        let outer = registry.add_surface(&mut geo, &plane_x(1, 3.0), &Transformation::identity(), &[]).unwrap();
        let parents = [SenseSurface::new(outer, false)];
        let shift = Transformation::translation(Vector3::new(2.0, 0.0, 0.0));
        let moved = registry.add_surface(&mut geo, &plane_x(2, 1.0), &shift, &parents).unwrap();
        assert_eq!(moved, outer);
        let other = registry.add_surface(&mut geo, &plane_x(3, 3.0), &shift, &parents).unwrap();
        assert_ne!(other, outer);
    }

    #[test]
    fn redundant_warning_only_for_declared_ids() {
        let declared = log_of_collapse(7, 10, true);
        assert_eq!(declared.matches("is redundant").count(), 1);
        assert!(declared.contains("surface 7 is redundant"));

        assert!(!log_of_collapse(11, 10, true).contains("is redundant"));
        assert!(!log_of_collapse(1, 10, true).contains("is redundant"));
        assert!(!log_of_collapse(7, 10, false).contains("is redundant"));
    }

    #[test]
    fn unknown_parent_surface_is_reported() {
        let mut donor = Geometry::new();
        let registry = SurfaceRegistry::new(SurfaceId(10), true);
        let id = Transformation::identity();
        let foreign = registry.add_surface(&mut donor, &plane_x(1, 0.0), &id, &[]).unwrap();

        let mut geo = Geometry::new();
        let parents = [SenseSurface::new(foreign, true)];
        let err = registry
            .add_surface(&mut geo, &plane_x(2, 0.0), &id, &parents)
            .unwrap_err();
        assert!(err.to_string().contains("surface 0"));
        assert!(geo.surfaces().is_empty());
    }
}
