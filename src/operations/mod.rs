pub mod assembly;
pub mod materials;

pub use assembly::{AssembleGeometry, AssemblyOptions};
pub use materials::BindMaterials;
