//! Assembly of the constructive-solid-geometry model used by Monte Carlo
//! particle transport.
//!
//! User input arrives as flat surface, cell and feature definitions.
//! [`AssembleGeometry`] expands features, instantiates the root universe
//! recursively (one universe instance per fill, each with its own
//! transformed surfaces) and returns a [`Geometry`] arena addressed by dense
//! internal ids. [`BindMaterials`] then attaches materials from an external
//! catalogue.

pub mod definition;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod material;
pub mod math;
pub mod operations;
pub mod scene;

pub use error::{CellgeomError, Result};
pub use operations::{AssembleGeometry, AssemblyOptions, BindMaterials};
pub use scene::Geometry;
