use crate::geometry::Transformation;

use super::{CellId, MaterialId, SurfaceRef, UniverseId};

/// What a cell declares about its material content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MaterialRef {
    /// Filled with a material from the catalogue.
    Material(MaterialId),
    /// Explicitly empty space.
    Void,
    /// Nothing declared; the cell must be filled with a universe.
    #[default]
    None,
}

/// A user-authored cell.
#[derive(Debug, Clone)]
pub struct CellDefinition {
    /// The id the user gave the cell.
    pub user_id: CellId,
    /// Signed references to the bounding surfaces.
    pub surfaces: Vec<SurfaceRef>,
    /// Universe the cell belongs to.
    pub universe: UniverseId,
    /// Universe filling the cell, if any.
    pub fill: Option<UniverseId>,
    /// Declared material content.
    pub material: MaterialRef,
    /// Local transformation applied to the fill universe.
    pub transformation: Transformation,
}

impl CellDefinition {
    /// Creates a cell in the root universe with no content declared.
    #[must_use]
    pub fn new(user_id: impl Into<CellId>, surfaces: Vec<SurfaceRef>) -> Self {
        Self {
            user_id: user_id.into(),
            surfaces,
            universe: UniverseId::root(),
            fill: None,
            material: MaterialRef::None,
            transformation: Transformation::identity(),
        }
    }

    /// Places the cell in `universe`.
    #[must_use]
    pub fn with_universe(mut self, universe: impl Into<UniverseId>) -> Self {
        self.universe = universe.into();
        self
    }

    /// Fills the cell with `universe`.
    #[must_use]
    pub fn with_fill(mut self, universe: impl Into<UniverseId>) -> Self {
        self.fill = Some(universe.into());
        self
    }

    /// Fills the cell with a material.
    #[must_use]
    pub fn with_material(mut self, material: impl Into<MaterialId>) -> Self {
        self.material = MaterialRef::Material(material.into());
        self
    }

    /// Declares the cell void.
    #[must_use]
    pub fn void(mut self) -> Self {
        self.material = MaterialRef::Void;
        self
    }

    /// Sets the local transformation of the fill universe.
    #[must_use]
    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformation = transformation;
        self
    }
}
