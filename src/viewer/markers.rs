use serde::Serialize;

/// A manually dropped point marker. The location is whatever the view
/// reported as its current center; the core does not compute it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lon: f64,
    pub lat: f64,
    pub name: String,
    pub description: String,
}

/// Build the marker placed by the "add marker" action.
pub fn marker_at(lon: f64, lat: f64) -> Marker {
    Marker {
        lon,
        lat,
        name: "Custom Marker".to_string(),
        description: format!("Lat: {lat:.4}, Lon: {lon:.4}"),
    }
}
