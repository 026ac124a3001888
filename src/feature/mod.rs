//! Repeated-pattern features, expanded into plain definitions before
//! assembly.

mod lattice;

pub use lattice::Lattice;

use tracing::debug;

use crate::definition::{CellDefinition, FeatureDefinition, SurfaceDefinition};
use crate::error::Result;

/// Largest user ids in use, so that generated ids never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxIds {
    /// Largest numeric cell id (non-numeric ids are ignored).
    pub cell: u64,
    /// Largest surface id.
    pub surface: u32,
}

impl MaxIds {
    /// Scans definitions for the largest ids in use.
    #[must_use]
    pub fn scan(surfaces: &[SurfaceDefinition], cells: &[CellDefinition]) -> Self {
        Self {
            cell: cells
                .iter()
                .filter_map(|c| c.user_id.numeric())
                .max()
                .unwrap_or(0),
            surface: surfaces.iter().map(|s| s.user_id.0).max().unwrap_or(0),
        }
    }
}

/// A handler that materializes one feature into surfaces and cells.
pub trait Feature {
    /// Appends the generated definitions and returns the new largest ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature cannot be materialized.
    fn expand(
        &self,
        surfaces: &mut Vec<SurfaceDefinition>,
        cells: &mut Vec<CellDefinition>,
    ) -> Result<MaxIds>;
}

/// Builds the handler for a feature definition. Generated ids start above
/// `max_ids`.
///
/// # Errors
///
/// Returns an error if the definition is malformed.
pub fn create_feature(definition: &FeatureDefinition, max_ids: MaxIds) -> Result<Box<dyn Feature>> {
    match definition {
        FeatureDefinition::Lattice(lattice) => Ok(Box::new(Lattice::new(lattice, max_ids)?)),
    }
}

/// Expands every feature in declaration order, each one seeing the ids
/// generated by the previous ones.
///
/// Returns the largest ids after expansion.
///
/// # Errors
///
/// Returns the first feature error encountered.
pub fn expand_features(
    features: &[FeatureDefinition],
    surfaces: &mut Vec<SurfaceDefinition>,
    cells: &mut Vec<CellDefinition>,
) -> Result<MaxIds> {
    let mut max_ids = MaxIds::scan(surfaces.as_slice(), cells.as_slice());
    for definition in features {
        let feature = create_feature(definition, max_ids)?;
        max_ids = feature.expand(surfaces, cells)?;
        debug!(
            feature = definition.name(),
            max_cell = max_ids.cell,
            max_surface = max_ids.surface,
            "expanded feature"
        );
    }
    Ok(max_ids)
}
