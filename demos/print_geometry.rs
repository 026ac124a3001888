//! Assembles a small pin-cell lattice and prints the resulting geometry.
//!
//! Usage:
//! ```text
//! cargo run --example print_geometry
//! RUST_LOG=cellgeom=debug cargo run --example print_geometry
//! ```

use cellgeom::definition::{
    CellDefinition, FeatureDefinition, GeometricDefinition, LatticeDefinition, SurfaceDefinition,
    SurfaceId, SurfaceRef, UniverseId,
};
use cellgeom::material::{Material, MaterialContainer};
use cellgeom::{AssembleGeometry, BindMaterials, CellgeomError};

fn definitions() -> Vec<GeometricDefinition> {
    let mut defs: Vec<GeometricDefinition> = vec![
        SurfaceDefinition::plane_x(SurfaceId(1), -2.0).into(),
        SurfaceDefinition::plane_x(SurfaceId(2), 2.0).into(),
        SurfaceDefinition::plane_y(SurfaceId(3), -2.0).into(),
        SurfaceDefinition::plane_y(SurfaceId(4), 2.0).into(),
        SurfaceDefinition::cylinder_z(SurfaceId(5), 0.0, 0.0, 0.4).into(),
    ];
    let inside = [
        SurfaceRef::positive(1),
        SurfaceRef::negative(2),
        SurfaceRef::positive(3),
        SurfaceRef::negative(4),
    ];
    defs.push(CellDefinition::new("1", inside.to_vec()).with_fill("core").into());
    for (id, reference) in [("2", SurfaceRef::negative(1)), ("3", SurfaceRef::positive(2))] {
        defs.push(CellDefinition::new(id, vec![reference]).void().into());
    }
    defs.push(
        CellDefinition::new("fuel", vec![SurfaceRef::negative(5)])
            .with_universe("pin")
            .with_material("UO2")
            .into(),
    );
    defs.push(
        CellDefinition::new("water", vec![SurfaceRef::positive(5)])
            .with_universe("pin")
            .with_material("H2O")
            .into(),
    );
    defs.push(
        FeatureDefinition::Lattice(LatticeDefinition {
            name: "core".into(),
            universe: UniverseId::from("core"),
            dimension: [2, 2],
            pitch: [2.0, 2.0],
            center: [0.0, 0.0],
            fills: vec![UniverseId::from("pin"); 4],
        })
        .into(),
    );
    defs
}

fn main() -> Result<(), CellgeomError> {
    // Default: WARN for everything, INFO for cellgeom.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("cellgeom=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut geometry = AssembleGeometry::new(definitions()).execute()?;

    let materials: MaterialContainer = [Material::new("UO2", 10.4), Material::new("H2O", 1.0)]
        .into_iter()
        .collect();
    BindMaterials::new(&materials).execute(&mut geometry)?;

    print!("{geometry}");
    Ok(())
}
