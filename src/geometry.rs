use geo::{LineString, MultiLineString, MultiPoint, Point};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

pub mod extract;
pub mod normalize;

/// Coarse classification of a GeoJSON geometry type, used for layer
/// grouping and default styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryFamily {
    Point,
    Line,
    Polygon,
}

impl GeometryFamily {
    /// Stable lowercase tag, used in generated layer identifiers.
    pub fn tag(&self) -> &'static str {
        match self {
            GeometryFamily::Point => "point",
            GeometryFamily::Line => "line",
            GeometryFamily::Polygon => "polygon",
        }
    }

    /// Plural label for layer display names.
    pub fn label(&self) -> &'static str {
        match self {
            GeometryFamily::Point => "points",
            GeometryFamily::Line => "lines",
            GeometryFamily::Polygon => "polygons",
        }
    }
}

impl std::fmt::Display for GeometryFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Internal geometry encoding handed to the rendering sink.
///
/// Lines keep one path per source LineString; polygons are a flat list of
/// rings. MultiPolygon rings are flattened into that single list, which
/// drops the grouping of rings into sub-polygons. Known limitation.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point<f64>),
    MultiPoint(MultiPoint<f64>),
    Line(MultiLineString<f64>),
    Polygon(Vec<LineString<f64>>),
}

/// A geometry converted out of its GeoJSON encoding, plus the family it
/// was classified into and the original type tag.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGeometry {
    pub family: GeometryFamily,
    pub shape: Shape,
    pub source_type: String,
}

/// A normalized geometry together with the feature's properties.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFeature {
    pub geometry: NormalizedGeometry,
    pub properties: Map<String, JsonValue>,
}
