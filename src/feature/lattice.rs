use crate::definition::{
    CellDefinition, CellId, LatticeDefinition, SurfaceDefinition, SurfaceId, SurfaceRef,
};
use crate::error::{FeatureError, Result};
use crate::geometry::Transformation;
use crate::math::Vector3;

use super::{Feature, MaxIds};

/// Expands a rectangular lattice into bounding planes and one filled cell
/// per element.
///
/// Surface ids are allocated x planes first, then y planes; cell ids follow
/// the row-major order of the fills.
#[derive(Debug)]
pub struct Lattice {
    definition: LatticeDefinition,
    max_ids: MaxIds,
}

impl Lattice {
    /// Validates the definition and prepares the expansion.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero, a pitch is not positive,
    /// the fill count does not match the dimensions, or the generated ids
    /// would overflow.
    pub fn new(definition: &LatticeDefinition, max_ids: MaxIds) -> Result<Self> {
        let bad = |reason: &str| FeatureError::bad(definition.name.as_str(), reason);
        let [nx, ny] = definition.dimension;
        if nx == 0 || ny == 0 {
            return Err(bad("lattice dimensions must be non-zero").into());
        }
        if definition.pitch.iter().any(|p| !p.is_finite() || *p <= 0.0) {
            return Err(bad("lattice pitch must be positive").into());
        }
        let too_large = || bad("lattice is too large for the remaining id range");
        let (Some(element_count), Some(plane_count)) = (
            nx.checked_mul(ny),
            nx.checked_add(ny).and_then(|n| n.checked_add(2)),
        ) else {
            return Err(too_large().into());
        };
        if definition.fills.len() != element_count {
            return Err(bad(&format!(
                "expected {element_count} fill universes, got {}",
                definition.fills.len()
            ))
            .into());
        }
        let planes = u32::try_from(plane_count).ok();
        let elements = u64::try_from(element_count).ok();
        let fits = planes.and_then(|p| max_ids.surface.checked_add(p)).is_some()
            && elements.and_then(|e| max_ids.cell.checked_add(e)).is_some();
        if !fits {
            return Err(too_large().into());
        }
        Ok(Self {
            definition: definition.clone(),
            max_ids,
        })
    }

    /// Positions of the `n + 1` boundaries along one axis.
    #[allow(clippy::cast_precision_loss)]
    fn boundaries(n: usize, pitch: f64, center: f64) -> Vec<f64> {
        let start = center - pitch * n as f64 / 2.0;
        (0..=n).map(|i| start + pitch * i as f64).collect()
    }
}

impl Feature for Lattice {
    #[allow(clippy::cast_possible_truncation)]
    fn expand(
        &self,
        surfaces: &mut Vec<SurfaceDefinition>,
        cells: &mut Vec<CellDefinition>,
    ) -> Result<MaxIds> {
        let def = &self.definition;
        let [nx, ny] = def.dimension;
        let [px, py] = def.pitch;
        let xs = Self::boundaries(nx, px, def.center[0]);
        let ys = Self::boundaries(ny, py, def.center[1]);

        // Bounds were checked in `new`, so these casts are lossless.
        let x_id = |i: usize| self.max_ids.surface + 1 + i as u32;
        let y_id = |j: usize| self.max_ids.surface + 1 + (nx + 1 + j) as u32;

        for (i, x) in xs.iter().enumerate() {
            surfaces.push(SurfaceDefinition::plane_x(SurfaceId(x_id(i)), *x));
        }
        for (j, y) in ys.iter().enumerate() {
            surfaces.push(SurfaceDefinition::plane_y(SurfaceId(y_id(j)), *y));
        }

        let mut cell_id = self.max_ids.cell;
        for j in 0..ny {
            for i in 0..nx {
                cell_id += 1;
                let center = Vector3::new(
                    (xs[i] + xs[i + 1]) / 2.0,
                    (ys[j] + ys[j + 1]) / 2.0,
                    0.0,
                );
                let bounds = vec![
                    SurfaceRef::positive(x_id(i)),
                    SurfaceRef::negative(x_id(i + 1)),
                    SurfaceRef::positive(y_id(j)),
                    SurfaceRef::negative(y_id(j + 1)),
                ];
                cells.push(
                    CellDefinition::new(CellId::new(cell_id.to_string()), bounds)
                        .with_universe(def.universe.clone())
                        .with_fill(def.fills[j * nx + i].clone())
                        .with_transformation(Transformation::translation(center)),
                );
            }
        }

        Ok(MaxIds {
            cell: cell_id,
            surface: y_id(ny),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::definition::{SurfaceParameters, UniverseId};

    fn definition(nx: usize, ny: usize) -> LatticeDefinition {
        LatticeDefinition {
            name: "core".into(),
            universe: UniverseId::from("1"),
            dimension: [nx, ny],
            pitch: [2.0, 1.0],
            center: [0.0, 0.0],
            fills: (0..nx * ny).map(|k| UniverseId::new(format!("p{k}"))).collect(),
        }
    }

    fn expand(def: &LatticeDefinition, max: MaxIds) -> (Vec<SurfaceDefinition>, Vec<CellDefinition>, MaxIds) {
        let mut surfaces = Vec::new();
        let mut cells = Vec::new();
        let max = Lattice::new(def, max)
            .unwrap()
            .expand(&mut surfaces, &mut cells)
            .unwrap();
        (surfaces, cells, max)
    }

    #[test]
    fn generates_planes_and_cells() {
        let (surfaces, cells, max) = expand(&definition(2, 2), MaxIds { cell: 100, surface: 50 });
        assert_eq!(surfaces.len(), 6);
        assert_eq!(cells.len(), 4);
        assert_eq!(max, MaxIds { cell: 104, surface: 56 });
        assert_eq!(surfaces[0].user_id, SurfaceId(51));
        assert_eq!(
            surfaces[0].parameters,
            SurfaceParameters::Plane {
                normal: Vector3::x(),
                offset: -2.0
            }
        );
        assert_eq!(cells[0].user_id.as_str(), "101");
        assert_eq!(cells[3].user_id.as_str(), "104");
    }

    #[test]
    fn element_cells_are_filled_and_translated() {
        let (_, cells, _) = expand(&definition(2, 1), MaxIds::default());
        let second = &cells[1];
        assert_eq!(second.universe, UniverseId::from("1"));
        assert_eq!(second.fill, Some(UniverseId::from("p1")));
        assert_eq!(
            second.surfaces,
            vec![
                SurfaceRef::positive(2),
                SurfaceRef::negative(3),
                SurfaceRef::positive(4),
                SurfaceRef::negative(5),
            ]
        );
        assert_relative_eq!(second.transformation.offset(), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn fill_count_must_match() {
        let mut def = definition(2, 2);
        def.fills.pop();
        let err = Lattice::new(&def, MaxIds::default()).unwrap_err();
        assert!(err.to_string().contains("expected 4 fill universes"));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(Lattice::new(&definition(0, 3), MaxIds::default()).is_err());
    }

    #[test]
    fn non_positive_pitch_is_rejected() {
        let mut def = definition(1, 1);
        def.pitch = [1.0, 0.0];
        assert!(Lattice::new(&def, MaxIds::default()).is_err());
    }

    #[test]
    fn id_overflow_is_rejected() {
        let max = MaxIds {
            cell: 0,
            surface: u32::MAX - 2,
        };
        assert!(Lattice::new(&definition(1, 1), max).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let mut def = definition(1, 1);
        def.dimension = [usize::MAX, 2];
        let err = Lattice::new(&def, MaxIds::default()).unwrap_err();
        assert!(err.to_string().contains("lattice is too large"));

        def.dimension = [usize::MAX - 1, 1];
        let err = Lattice::new(&def, MaxIds::default()).unwrap_err();
        assert!(err.to_string().contains("lattice is too large"));
    }
}
