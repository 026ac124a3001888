use crate::definition::UniverseId;

use super::{InternalCellId, InternalUniverseId};

/// One instance of a universe: the cells that partition the region it
/// fills.
///
/// The same user universe yields a separate instance every place it is
/// used as a fill.
#[derive(Debug, Clone)]
pub struct Universe {
    internal_id: InternalUniverseId,
    user_id: UniverseId,
    cells: Vec<InternalCellId>,
}

impl Universe {
    pub(crate) fn new(internal_id: InternalUniverseId, user_id: UniverseId) -> Self {
        Self {
            internal_id,
            user_id,
            cells: Vec::new(),
        }
    }

    /// Returns the dense internal id.
    #[must_use]
    pub fn internal_id(&self) -> InternalUniverseId {
        self.internal_id
    }

    /// Returns the user-facing id.
    #[must_use]
    pub fn user_id(&self) -> &UniverseId {
        &self.user_id
    }

    /// Returns the cells of this instance in declaration order.
    #[must_use]
    pub fn cells(&self) -> &[InternalCellId] {
        &self.cells
    }

    pub(crate) fn add_cell(&mut self, cell: InternalCellId) {
        self.cells.push(cell);
    }
}
