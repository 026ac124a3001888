pub mod cell;
mod print;
pub mod universe;

pub use cell::Cell;
pub use universe::Universe;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::definition::{CellId, MaterialRef, SurfaceId, UniverseId};
use crate::error::SceneError;
use crate::geometry::{SenseSurface, Surface};
use crate::material::Material;

/// Separator between the segments of a cell path.
pub const PATH_SEPARATOR: char = '<';

macro_rules! dense_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// Returns the position of the entity in its store.
            #[must_use]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

dense_id! {
    /// Dense index of a surface, assigned in creation order.
    InternalSurfaceId
}

dense_id! {
    /// Dense index of a cell, assigned in creation order.
    InternalCellId
}

dense_id! {
    /// Dense index of a universe instance, assigned in creation order.
    InternalUniverseId
}

/// Central arena that owns every runtime surface, cell and universe, plus
/// the tables mapping them back to user ids.
///
/// Entities reference each other through dense internal ids, which double
/// as indices into the stores. Everything is appended during assembly and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct Geometry {
    surfaces: Vec<Surface>,
    cells: Vec<Cell>,
    universes: Vec<Universe>,
    /// internal surface -> user surface
    surface_map: Vec<SurfaceId>,
    /// internal cell -> full path
    cell_paths: Vec<String>,
    /// user cell -> every instance of it
    cell_internal_map: HashMap<CellId, Vec<InternalCellId>>,
    /// user universe -> every instance of it
    universe_map: HashMap<UniverseId, Vec<InternalUniverseId>>,
    /// Declared materials awaiting binding.
    material_map: BTreeMap<InternalCellId, MaterialRef>,
    root: Option<InternalUniverseId>,
}

impl Geometry {
    /// Creates a new, empty geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Surface operations ---

    /// Registers a surface under the next internal id.
    pub(crate) fn add_surface(&mut self, mut surface: Surface) -> InternalSurfaceId {
        let id = InternalSurfaceId(self.surfaces.len());
        surface.set_internal_id(id);
        self.surface_map.push(surface.user_id());
        self.surfaces.push(surface);
        id
    }

    /// Returns a surface by internal id.
    #[must_use]
    pub fn surface(&self, id: InternalSurfaceId) -> Option<&Surface> {
        self.surfaces.get(id.0)
    }

    /// Returns all surfaces, indexed by internal id.
    #[must_use]
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Returns the user id a surface was cloned from.
    #[must_use]
    pub fn surface_user_id(&self, id: InternalSurfaceId) -> Option<SurfaceId> {
        self.surface_map.get(id.0).copied()
    }

    // --- Universe operations ---

    /// Creates an empty instance of `user_id` under the next internal id.
    pub(crate) fn add_universe(&mut self, user_id: UniverseId) -> InternalUniverseId {
        let id = InternalUniverseId(self.universes.len());
        self.universe_map
            .entry(user_id.clone())
            .or_default()
            .push(id);
        self.universes.push(Universe::new(id, user_id));
        id
    }

    /// Returns a universe instance by internal id.
    #[must_use]
    pub fn universe(&self, id: InternalUniverseId) -> Option<&Universe> {
        self.universes.get(id.0)
    }

    /// Returns all universe instances, indexed by internal id.
    #[must_use]
    pub fn universes(&self) -> &[Universe] {
        &self.universes
    }

    /// Returns every instance of a user universe, in creation order.
    #[must_use]
    pub fn universe_instances(&self, user_id: &UniverseId) -> &[InternalUniverseId] {
        self.universe_map.get(user_id).map_or(&[][..], Vec::as_slice)
    }

    /// Returns the root universe instance.
    #[must_use]
    pub fn root(&self) -> Option<&Universe> {
        self.root.and_then(|id| self.universe(id))
    }

    pub(crate) fn set_root(&mut self, id: InternalUniverseId) {
        self.root = Some(id);
    }

    // --- Cell operations ---

    /// Creates a cell under the next internal id, records its path and
    /// declared material, and links it into `universe`.
    pub(crate) fn add_cell(
        &mut self,
        user_id: CellId,
        universe: InternalUniverseId,
        surfaces: Vec<SenseSurface>,
        material: MaterialRef,
        path: String,
    ) -> Result<InternalCellId, SceneError> {
        let id = InternalCellId(self.cells.len());
        self.universes
            .get_mut(universe.0)
            .ok_or_else(|| SceneError::EntityNotFound(format!("universe {universe}")))?
            .add_cell(id);
        let void = material == MaterialRef::Void;
        self.cell_paths.push(path);
        self.cell_internal_map
            .entry(user_id.clone())
            .or_default()
            .push(id);
        self.material_map.insert(id, material);
        self.cells
            .push(Cell::new(id, user_id, universe, surfaces, void));
        Ok(id)
    }

    /// Returns a cell by internal id.
    #[must_use]
    pub fn cell(&self, id: InternalCellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    pub(crate) fn cell_mut(&mut self, id: InternalCellId) -> Result<&mut Cell, SceneError> {
        self.cells
            .get_mut(id.0)
            .ok_or_else(|| SceneError::EntityNotFound(format!("cell {id}")))
    }

    /// Returns all cells, indexed by internal id.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns every instance of a user cell, in creation order.
    #[must_use]
    pub fn cell_instances(&self, user_id: &CellId) -> &[InternalCellId] {
        self.cell_internal_map.get(user_id).map_or(&[][..], Vec::as_slice)
    }

    /// Returns the full path of a cell, e.g. `"5<3<1"` for cell 5 placed in
    /// cell 3, itself placed in cell 1.
    #[must_use]
    pub fn path(&self, cell: &Cell) -> Option<&str> {
        self.cell_paths
            .get(cell.internal_id().0)
            .map(String::as_str)
    }

    /// Returns the first segment of a cell path: the user id of the cell
    /// definition the instance was built from.
    #[must_use]
    pub fn user_id(&self, cell: &Cell) -> Option<&str> {
        let path = self.path(cell)?;
        path.split([PATH_SEPARATOR, ' '])
            .find(|segment| !segment.is_empty())
    }

    pub(crate) fn set_fill(
        &mut self,
        cell: InternalCellId,
        universe: InternalUniverseId,
    ) -> Result<(), SceneError> {
        if self.universe(universe).is_none() {
            return Err(SceneError::EntityNotFound(format!("universe {universe}")));
        }
        self.cell_mut(cell)?.set_fill(universe);
        Ok(())
    }

    // --- Material binding ---

    pub(crate) fn take_material_map(&mut self) -> BTreeMap<InternalCellId, MaterialRef> {
        std::mem::take(&mut self.material_map)
    }

    /// Returns `true` while some declared materials are not yet bound.
    #[must_use]
    pub fn has_pending_materials(&self) -> bool {
        !self.material_map.is_empty()
    }

    pub(crate) fn bind_material(
        &mut self,
        cell: InternalCellId,
        material: Arc<Material>,
    ) -> Result<(), SceneError> {
        self.cell_mut(cell)?.set_material(material);
        Ok(())
    }
}
