use std::sync::Arc;

use crate::definition::CellId;
use crate::geometry::SenseSurface;
use crate::material::Material;

use super::{InternalCellId, InternalUniverseId};

/// A runtime cell: a region bounded by surfaces with senses.
///
/// Once assembly and material binding are done, a cell is either filled
/// with a material, filled with a universe, or void.
#[derive(Debug, Clone)]
pub struct Cell {
    internal_id: InternalCellId,
    user_id: CellId,
    universe: InternalUniverseId,
    surfaces: Vec<SenseSurface>,
    fill: Option<InternalUniverseId>,
    material: Option<Arc<Material>>,
    void: bool,
}

impl Cell {
    pub(crate) fn new(
        internal_id: InternalCellId,
        user_id: CellId,
        universe: InternalUniverseId,
        surfaces: Vec<SenseSurface>,
        void: bool,
    ) -> Self {
        Self {
            internal_id,
            user_id,
            universe,
            surfaces,
            fill: None,
            material: None,
            void,
        }
    }

    /// Returns the dense internal id.
    #[must_use]
    pub fn internal_id(&self) -> InternalCellId {
        self.internal_id
    }

    /// Returns the user id of the cell definition this cell was built from.
    #[must_use]
    pub fn user_id(&self) -> &CellId {
        &self.user_id
    }

    /// Returns the universe instance containing this cell.
    #[must_use]
    pub fn universe(&self) -> InternalUniverseId {
        self.universe
    }

    /// Returns the bounding surfaces with their senses.
    #[must_use]
    pub fn surfaces(&self) -> &[SenseSurface] {
        &self.surfaces
    }

    /// Returns the universe instance filling this cell.
    #[must_use]
    pub fn fill(&self) -> Option<InternalUniverseId> {
        self.fill
    }

    /// Returns the material bound to this cell.
    #[must_use]
    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }

    /// Returns `true` if the cell was declared void.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.void
    }

    pub(crate) fn set_fill(&mut self, universe: InternalUniverseId) {
        self.fill = Some(universe);
    }

    pub(crate) fn set_material(&mut self, material: Arc<Material>) {
        self.material = Some(material);
    }
}
