use super::UniverseId;

/// A repeated-pattern structure expanded into plain surfaces and cells
/// before assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureDefinition {
    /// A rectangular lattice in the xy plane.
    Lattice(LatticeDefinition),
}

impl FeatureDefinition {
    /// Returns the user-facing name of the feature.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Lattice(lattice) => &lattice.name,
        }
    }
}

/// A rectangular `nx` by `ny` lattice.
///
/// Every element is a cell of `universe` bounded by four planes, filled with
/// one of `fills` translated to the element center. `fills` is row-major
/// with x varying fastest, starting at the lowest x and y.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeDefinition {
    /// Feature name, used in diagnostics.
    pub name: String,
    /// Universe the generated cells belong to.
    pub universe: UniverseId,
    /// Number of elements along x and y.
    pub dimension: [usize; 2],
    /// Element size along x and y.
    pub pitch: [f64; 2],
    /// Center of the whole lattice in the xy plane.
    pub center: [f64; 2],
    /// Universe filling each element.
    pub fills: Vec<UniverseId>,
}
