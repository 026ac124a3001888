use thiserror::Error;

use crate::definition::{CellId, MaterialId, SurfaceId, UniverseId};

/// Top-level error type for geometry assembly.
#[derive(Debug, Error)]
pub enum CellgeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Cell(#[from] CellError),

    #[error(transparent)]
    Universe(#[from] UniverseError),

    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Material(#[from] MaterialError),
}

/// Errors related to geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the geometry arena.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors raised while creating surfaces.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("cannot create surface {id}: {reason}")]
    BadSurfaceCreation { id: SurfaceId, reason: String },
}

/// Errors raised while creating cells or binding their contents.
#[derive(Debug, Error)]
pub enum CellError {
    #[error("cannot create cell {id}: {reason}")]
    BadCellCreation { id: CellId, reason: String },
}

/// Errors related to universes.
#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("root universe {id} has no cells")]
    EmptyRoot { id: UniverseId },
}

/// Errors raised while expanding geometric features.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("cannot create feature {id}: {reason}")]
    BadFeatureCreation { id: String, reason: String },
}

/// Errors raised by material catalogues.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("material {id} is not defined")]
    NotFound { id: MaterialId },
}

impl SurfaceError {
    pub(crate) fn bad(id: SurfaceId, reason: impl Into<String>) -> Self {
        Self::BadSurfaceCreation {
            id,
            reason: reason.into(),
        }
    }
}

impl CellError {
    pub(crate) fn bad(id: CellId, reason: impl Into<String>) -> Self {
        Self::BadCellCreation {
            id,
            reason: reason.into(),
        }
    }
}

impl FeatureError {
    pub(crate) fn bad(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BadFeatureCreation {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for results using [`CellgeomError`].
pub type Result<T> = std::result::Result<T, CellgeomError>;
