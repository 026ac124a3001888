//! The material side of the geometry: what cells are filled with.
//!
//! Materials are owned by a catalogue outside the geometry; cells only hold
//! shared references to them.

use std::collections::HashMap;
use std::sync::Arc;

use crate::definition::MaterialId;
use crate::error::MaterialError;

/// A material a cell can be filled with.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    id: MaterialId,
    density: f64,
}

impl Material {
    /// Creates a material with the given density in g/cm^3.
    #[must_use]
    pub fn new(id: impl Into<MaterialId>, density: f64) -> Self {
        Self {
            id: id.into(),
            density,
        }
    }

    /// Returns the user-facing id.
    #[must_use]
    pub fn id(&self) -> &MaterialId {
        &self.id
    }

    /// Returns the density in g/cm^3.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }
}

/// A source of materials keyed by id.
pub trait MaterialCatalogue {
    /// Looks up a material.
    ///
    /// # Errors
    ///
    /// Returns an error if no material with this id exists.
    fn material(&self, id: &MaterialId) -> Result<Arc<Material>, MaterialError>;
}

/// A map-backed [`MaterialCatalogue`].
#[derive(Debug, Default)]
pub struct MaterialContainer {
    materials: HashMap<MaterialId, Arc<Material>>,
}

impl MaterialContainer {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a material, replacing any previous one with the same id.
    pub fn insert(&mut self, material: Material) {
        self.materials
            .insert(material.id().clone(), Arc::new(material));
    }

    /// Returns the number of materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns `true` if the container holds no materials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl FromIterator<Material> for MaterialContainer {
    fn from_iter<I: IntoIterator<Item = Material>>(iter: I) -> Self {
        let mut container = Self::new();
        for material in iter {
            container.insert(material);
        }
        container
    }
}

impl MaterialCatalogue for MaterialContainer {
    fn material(&self, id: &MaterialId) -> Result<Arc<Material>, MaterialError> {
        self.materials
            .get(id)
            .cloned()
            .ok_or_else(|| MaterialError::NotFound { id: id.clone() })
    }
}
