//! Flat, user-facing geometry definitions as produced by an input parser.
//!
//! Definitions are consumed by assembly and discarded afterwards; the
//! runtime geometry keeps its own transformed copies.

mod cell;
mod feature;
mod surface;

pub use cell::{CellDefinition, MaterialRef};
pub use feature::{FeatureDefinition, LatticeDefinition};
pub use surface::{SurfaceDefinition, SurfaceParameters, SurfaceRef};

use std::fmt;

/// User-facing surface id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u32);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from its textual form.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as written by the user.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// User-facing cell id.
    CellId
}

string_id! {
    /// User-facing universe id.
    UniverseId
}

string_id! {
    /// User-facing material id.
    MaterialId
}

impl UniverseId {
    /// The universe cells belong to unless told otherwise.
    #[must_use]
    pub fn root() -> Self {
        Self::new("0")
    }
}

impl CellId {
    /// Returns the id as an integer, if it is purely numeric.
    #[must_use]
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

/// A flat geometry definition of any kind.
#[derive(Debug, Clone)]
pub enum GeometricDefinition {
    /// A surface.
    Surface(SurfaceDefinition),
    /// A cell.
    Cell(CellDefinition),
    /// A repeated-pattern feature.
    Feature(FeatureDefinition),
}

impl From<SurfaceDefinition> for GeometricDefinition {
    fn from(def: SurfaceDefinition) -> Self {
        Self::Surface(def)
    }
}

impl From<CellDefinition> for GeometricDefinition {
    fn from(def: CellDefinition) -> Self {
        Self::Cell(def)
    }
}

impl From<FeatureDefinition> for GeometricDefinition {
    fn from(def: FeatureDefinition) -> Self {
        Self::Feature(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cell_ids() {
        assert_eq!(CellId::from("42").numeric(), Some(42));
        assert_eq!(CellId::from("fuel").numeric(), None);
    }

    #[test]
    fn root_universe_is_zero() {
        assert_eq!(UniverseId::root().as_str(), "0");
    }
}
