use tracing::info;

use crate::definition::{CellId, MaterialRef};
use crate::error::{CellError, CellgeomError, Result, SceneError};
use crate::material::MaterialCatalogue;
use crate::scene::{Cell, Geometry};

/// Attaches materials from a catalogue to the cells of an assembled
/// geometry and checks that every cell ends up with exactly one content:
/// a material, a fill universe, or void.
pub struct BindMaterials<'a, C: MaterialCatalogue + ?Sized> {
    catalogue: &'a C,
}

impl<'a, C: MaterialCatalogue + ?Sized> BindMaterials<'a, C> {
    /// Creates a new `BindMaterials` operation.
    #[must_use]
    pub fn new(catalogue: &'a C) -> Self {
        Self { catalogue }
    }

    /// Executes the binding.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::BadCellCreation`] naming the cell if a material
    /// is missing from the catalogue, if a cell has neither a material nor
    /// a fill, or if a filled cell also declares a material or void.
    pub fn execute(&self, geometry: &mut Geometry) -> Result<()> {
        let pending = geometry.take_material_map();
        let mut bound = 0_usize;

        for (cell_id, material) in pending {
            let cell = geometry
                .cell(cell_id)
                .ok_or_else(|| SceneError::EntityNotFound(format!("cell {cell_id}")))?;
            let filled = cell.fill().is_some();
            match material {
                MaterialRef::Material(id) => {
                    if filled {
                        return Err(bad_cell(
                            geometry,
                            cell,
                            format!("The cell is filled with both material {id} and a universe"),
                        ));
                    }
                    let material = self
                        .catalogue
                        .material(&id)
                        .map_err(|e| bad_cell(geometry, cell, e.to_string()))?;
                    geometry.bind_material(cell_id, material)?;
                    bound += 1;
                }
                MaterialRef::Void => {
                    if filled {
                        return Err(bad_cell(
                            geometry,
                            cell,
                            "The cell is declared void but filled with a universe",
                        ));
                    }
                }
                MaterialRef::None => {
                    if !filled {
                        return Err(bad_cell(
                            geometry,
                            cell,
                            "The cell is not filled with a material or a universe",
                        ));
                    }
                }
            }
        }

        info!(cells = geometry.cells().len(), bound, "materials bound");
        Ok(())
    }
}

fn bad_cell(
    geometry: &Geometry,
    cell: &Cell,
    reason: impl Into<String>,
) -> CellgeomError {
    let id = geometry
        .user_id(cell)
        .map_or_else(|| cell.user_id().clone(), CellId::from);
    CellError::bad(id, reason).into()
}
