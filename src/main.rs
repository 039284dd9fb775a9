use std::fs;
use std::path::Path;

use geo_viewer::viewer::controller::MapViewer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: geo-viewer <file.geojson>")?;
    let file_name = Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.clone());

    let text = fs::read_to_string(&path)?;

    let mut viewer = MapViewer::new();
    let outcome = viewer.load_geojson_str(&text, &file_name)?;

    for layer in &outcome.layers {
        println!(
            "{}: {} ({} graphics)",
            layer.id,
            layer.display_name,
            layer.graphics.len()
        );
    }
    if outcome.skipped > 0 {
        println!("skipped {} unsupported feature(s)", outcome.skipped);
    }
    if let Some(camera) = &outcome.camera {
        println!("camera: {camera:?}");
    }

    Ok(())
}
