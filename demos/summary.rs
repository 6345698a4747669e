//! Prints the geometry of a cube or rectangular prism.
//!
//! ```text
//! cargo run --example summary -- cube 3
//! cargo run --example summary -- rectangular-prism 4 3 2
//! RUST_LOG=cuboid=trace cargo run --example summary -- cube 25
//! ```

use cuboid::display::DisplaySettings;
use cuboid::scene::BuildScene;
use cuboid::shape::DimensionLimits;
use cuboid::{ComputeGeometry, Dimensions, ShapeKind};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let kind: ShapeKind = args.next().as_deref().unwrap_or("cube").parse()?;
    let values = args.map(|a| a.parse::<f64>()).collect::<Result<Vec<_>, _>>()?;

    let requested = if values.is_empty() {
        kind.default_dimensions()
    } else {
        Dimensions::from_values(kind, &values)?
    };
    let limits = DimensionLimits::default();
    let dimensions = limits.clamp(&requested)?;
    let geometry = ComputeGeometry::new(dimensions).execute()?;

    let info = geometry.info();
    println!("{} ({})", info.name, info.name_indonesian);
    println!("  accepted range: [{}, {}]", limits.min(), limits.max());
    for (name, value) in dimensions.values() {
        println!("  {name} = {value}");
    }

    println!("Vertices:");
    for (label, point) in geometry.vertices().iter() {
        println!("  {label}: ({:.2}, {:.2}, {:.2})", point.x, point.y, point.z);
    }

    println!("Formulas:");
    for line in geometry.report() {
        println!("  {line}");
    }

    let settings = DisplaySettings::default()
        .toggled("spaceDiagonalAG")?
        .toggled("diagonalPlaneABGH")?;
    let scene = BuildScene::new(&geometry, &settings).execute()?;
    println!(
        "Scene: {} lines, {} planes, {} hatch lines",
        scene.lines.len(),
        scene.planes.len(),
        scene.planes.iter().map(|p| p.hatching.len()).sum::<usize>()
    );
    Ok(())
}
