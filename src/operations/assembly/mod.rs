mod registry;
mod universe;

use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::definition::{
    CellDefinition, FeatureDefinition, GeometricDefinition, SurfaceDefinition, SurfaceId,
    UniverseId,
};
use crate::error::{CellError, Result, SurfaceError, UniverseError};
use crate::feature::{expand_features, MaxIds};
use crate::geometry::{Surface, Transformation};
use crate::scene::Geometry;

use registry::SurfaceRegistry;
use universe::UniverseAssembler;

/// Parameters controlling geometry assembly.
#[derive(Debug, Clone)]
pub struct AssemblyOptions {
    /// Universe assembly starts from.
    pub root_universe: UniverseId,
    /// Log a warning when a declared surface duplicates an enclosing one.
    pub warn_redundant_surfaces: bool,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            root_universe: UniverseId::root(),
            warn_redundant_surfaces: true,
        }
    }
}

impl AssemblyOptions {
    /// Sets the root universe.
    #[must_use]
    pub fn with_root_universe(mut self, root: impl Into<UniverseId>) -> Self {
        self.root_universe = root.into();
        self
    }

    /// Enables or disables redundant-surface warnings.
    #[must_use]
    pub fn with_redundant_surface_warnings(mut self, enabled: bool) -> Self {
        self.warn_redundant_surfaces = enabled;
        self
    }
}

/// Builds a runtime [`Geometry`] from flat user definitions.
///
/// Features are expanded first, then top-level ids are validated, and
/// finally the root universe is instantiated recursively. The definitions
/// are consumed.
pub struct AssembleGeometry {
    definitions: Vec<GeometricDefinition>,
    options: AssemblyOptions,
}

impl AssembleGeometry {
    /// Creates a new `AssembleGeometry` operation with default options.
    #[must_use]
    pub fn new(definitions: Vec<GeometricDefinition>) -> Self {
        Self {
            definitions,
            options: AssemblyOptions::default(),
        }
    }

    /// Replaces the assembly options.
    #[must_use]
    pub fn with_options(mut self, options: AssemblyOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the assembly.
    ///
    /// # Errors
    ///
    /// Returns an error on a duplicated top-level surface or cell id, a cell
    /// filled with its own universe, a malformed feature or surface, a
    /// reference to an unknown surface, a fill with an empty universe, or
    /// a root universe without cells. Nothing of a failed assembly is kept.
    pub fn execute(self) -> Result<Geometry> {
        let mut surfaces = Vec::new();
        let mut cells = Vec::new();
        let mut features = Vec::new();
        for definition in self.definitions {
            match definition {
                GeometricDefinition::Surface(def) => surfaces.push(def),
                GeometricDefinition::Cell(def) => cells.push(def),
                GeometricDefinition::Feature(def) => features.push(def),
            }
        }
        assemble(surfaces, cells, &features, &self.options)
    }
}

fn assemble(
    mut surfaces: Vec<SurfaceDefinition>,
    mut cells: Vec<CellDefinition>,
    features: &[FeatureDefinition],
    options: &AssemblyOptions,
) -> Result<Geometry> {
    let declared = MaxIds::scan(&surfaces, &cells);
    if !features.is_empty() {
        expand_features(features, &mut surfaces, &mut cells)?;
    }

    let user_surfaces = user_surface_catalogue(&surfaces)?;
    check_cells(&cells)?;

    let mut cells_by_universe: HashMap<UniverseId, Vec<CellDefinition>> = HashMap::new();
    for cell in cells {
        cells_by_universe
            .entry(cell.universe.clone())
            .or_default()
            .push(cell);
    }

    let root = &options.root_universe;
    if !cells_by_universe.contains_key(root) {
        return Err(UniverseError::EmptyRoot { id: root.clone() }.into());
    }

    let mut geometry = Geometry::new();
    let registry = SurfaceRegistry::new(
        SurfaceId(declared.surface),
        options.warn_redundant_surfaces,
    );
    let root_instance =
        UniverseAssembler::new(&mut geometry, &cells_by_universe, &user_surfaces, registry)
            .add_universe(root, &Transformation::identity(), &[], "")?;
    if let Some(id) = root_instance {
        geometry.set_root(id);
    }

    info!(
        surfaces = geometry.surfaces().len(),
        cells = geometry.cells().len(),
        universes = geometry.universes().len(),
        "geometry assembled"
    );
    Ok(geometry)
}

/// Creates one untransformed surface per definition, rejecting duplicated
/// ids.
fn user_surface_catalogue(
    surfaces: &[SurfaceDefinition],
) -> Result<HashMap<SurfaceId, Surface>> {
    let mut catalogue = HashMap::with_capacity(surfaces.len());
    for definition in surfaces {
        if catalogue.contains_key(&definition.user_id) {
            return Err(SurfaceError::bad(definition.user_id, "Duplicated id").into());
        }
        catalogue.insert(definition.user_id, Surface::from_definition(definition)?);
    }
    Ok(catalogue)
}

/// Rejects duplicated cell ids and cells filled with their own universe.
fn check_cells(cells: &[CellDefinition]) -> Result<()> {
    let mut seen = HashSet::with_capacity(cells.len());
    for cell in cells {
        if !seen.insert(&cell.user_id) {
            return Err(CellError::bad(cell.user_id.clone(), "Duplicated id").into());
        }
        if cell.fill.as_ref() == Some(&cell.universe) {
            return Err(CellError::bad(
                cell.user_id.clone(),
                format!(
                    "a cell can't be filled with the universe that contains it (universe = {})",
                    cell.universe
                ),
            )
            .into());
        }
    }
    Ok(())
}
