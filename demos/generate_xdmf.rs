//! Writes a small descriptor for a 2D co-rectilinear mesh to `test.xmf`.
//!
//! run with `RUST_LOG=debug cargo run --example generate_xdmf` to see diagnostics.

use xdmf::ndarray::array;
use xdmf::XdmfDocument;

fn main() -> Result<(), xdmf::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut doc = XdmfDocument::new();
    doc.begin_domain();
    doc.begin_grid("Uniform")?;
    doc.set_name("plate")?;

    doc.begin_topology("2DCoRectMesh")?;
    doc.set_dimensions([3, 4])?;
    doc.end_topology()?;

    doc.begin_geometry("ORIGIN_DXDY")?;
    doc.write_data_item(&array![0.0, 0.0])?;
    doc.write_data_item(&array![0.5, 0.25])?;
    doc.end_geometry()?;

    doc.begin_attribute("Scalar")?;
    doc.set_name("temperature")?;
    doc.set_center("Node")?;
    doc.write_data_item(&array![
        [290.0, 291.5, 293.0, 294.5],
        [290.5, 292.0, 293.5, 295.0],
        [291.0, 292.5, 294.0, 295.5],
    ])?;
    doc.end_attribute()?;

    doc.end_grid()?;
    doc.end_domain()?;
    doc.generate("test.xmf")?;

    Ok(())
}
