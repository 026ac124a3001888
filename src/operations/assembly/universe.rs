use std::collections::HashMap;

use tracing::debug;

use crate::definition::{CellDefinition, SurfaceId, UniverseId};
use crate::error::{CellError, Result};
use crate::geometry::{SenseSurface, Surface, Transformation};
use crate::scene::{Geometry, InternalSurfaceId, InternalUniverseId, PATH_SEPARATOR};

use super::registry::SurfaceRegistry;

/// Recursively instantiates universes into a geometry.
///
/// Every call creates a fresh universe instance, so a universe used as a
/// fill in several places gets one instance, with its own transformed
/// surfaces, per place.
pub(crate) struct UniverseAssembler<'a> {
    geometry: &'a mut Geometry,
    cells_by_universe: &'a HashMap<UniverseId, Vec<CellDefinition>>,
    user_surfaces: &'a HashMap<SurfaceId, Surface>,
    registry: SurfaceRegistry,
    /// Universes on the current nesting chain, outermost first.
    chain: Vec<UniverseId>,
}

impl<'a> UniverseAssembler<'a> {
    pub(crate) fn new(
        geometry: &'a mut Geometry,
        cells_by_universe: &'a HashMap<UniverseId, Vec<CellDefinition>>,
        user_surfaces: &'a HashMap<SurfaceId, Surface>,
        registry: SurfaceRegistry,
    ) -> Self {
        Self {
            geometry,
            cells_by_universe,
            user_surfaces,
            registry,
            chain: Vec::new(),
        }
    }

    /// Builds one instance of `universe_id`.
    ///
    /// `trans` is the transformation accumulated from the enclosing cells,
    /// `parent_surfaces` the surfaces bounding them (innermost first) and
    /// `parent_path` the path of the cell being filled, empty for the root.
    ///
    /// Returns `None` if the universe has no cells; the instance is still
    /// registered.
    pub(crate) fn add_universe(
        &mut self,
        universe_id: &UniverseId,
        trans: &Transformation,
        parent_surfaces: &[SenseSurface],
        parent_path: &str,
    ) -> Result<Option<InternalUniverseId>> {
        let universe = self.geometry.add_universe(universe_id.clone());

        let cells_by_universe = self.cells_by_universe;
        let Some(definitions) = cells_by_universe.get(universe_id) else {
            return Ok(None);
        };
        debug!(
            universe = %universe_id,
            instance = %universe,
            cells = definitions.len(),
            "assembling universe"
        );

        self.chain.push(universe_id.clone());
        // Clones already made for this instance, by user surface id.
        let mut created: HashMap<SurfaceId, InternalSurfaceId> = HashMap::new();

        for definition in definitions {
            let bounding =
                self.bounding_surfaces(definition, trans, parent_surfaces, &mut created)?;

            let path = if parent_path.is_empty() {
                definition.user_id.to_string()
            } else {
                format!("{}{PATH_SEPARATOR}{parent_path}", definition.user_id)
            };

            let cell = self.geometry.add_cell(
                definition.user_id.clone(),
                universe,
                bounding.clone(),
                definition.material.clone(),
                path.clone(),
            )?;

            let Some(fill) = &definition.fill else {
                continue;
            };
            if self.chain.contains(fill) {
                return Err(CellError::bad(
                    definition.user_id.clone(),
                    format!("Universe {fill} is filled with itself through {path}"),
                )
                .into());
            }

            let mut inherited = bounding;
            inherited.extend_from_slice(parent_surfaces);
            let combined = trans.compose(&definition.transformation);

            match self.add_universe(fill, &combined, &inherited, &path)? {
                Some(child) => self.geometry.set_fill(cell, child)?,
                None => {
                    return Err(CellError::bad(
                        definition.user_id.clone(),
                        format!("Attempting to fill with an empty universe (fill = {fill})"),
                    )
                    .into())
                }
            }
        }

        self.chain.pop();
        Ok(Some(universe))
    }

    /// Resolves the signed surface references of a cell definition.
    fn bounding_surfaces(
        &mut self,
        definition: &CellDefinition,
        trans: &Transformation,
        parent_surfaces: &[SenseSurface],
        created: &mut HashMap<SurfaceId, InternalSurfaceId>,
    ) -> Result<Vec<SenseSurface>> {
        let user_surfaces = self.user_surfaces;
        let mut bounding = Vec::with_capacity(definition.surfaces.len());
        for reference in &definition.surfaces {
            let Some(source) = user_surfaces.get(&reference.id) else {
                return Err(CellError::bad(
                    definition.user_id.clone(),
                    format!("Surface number {} doesn't exist.", reference.id),
                )
                .into());
            };
            let surface = match created.get(&reference.id) {
                Some(&existing) => existing,
                None => {
                    let id =
                        self.registry
                            .add_surface(self.geometry, source, trans, parent_surfaces)?;
                    created.insert(reference.id, id);
                    id
                }
            };
            bounding.push(SenseSurface::new(surface, reference.sense));
        }
        Ok(bounding)
    }
}
