use thiserror::Error;

// Define error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse GeoJSON: {0}")]
    Parse(#[from] geojson::Error),
    #[error("Extent requires at least one coordinate")]
    EmptyCoordinates,
    #[error("Invalid location selection: {0}")]
    InvalidLocation(String),
    #[error("Unknown basemap: {0}")]
    UnknownBasemap(String),
}
