use geo::{LineString, MultiLineString, MultiPoint, Point};
use geojson::{Feature, Geometry, Value};
use serde_json::Map;

use crate::geometry::{GeometryFamily, NormalizedFeature, NormalizedGeometry, Shape};

fn to_line_string(coords: &[Vec<f64>]) -> LineString<f64> {
    LineString::from(
        coords
            .iter()
            .map(|p| Point::new(p[0], p[1]))
            .collect::<Vec<Point<f64>>>(),
    )
}

/// Convert a GeoJSON geometry into the internal encoding.
///
/// Dispatches on the geometry type; the six standard kinds are supported.
/// `GeometryCollection` (or anything else) yields `None` so callers can
/// skip the feature without aborting the batch.
pub fn normalize_geometry(geometry: &Geometry) -> Option<NormalizedGeometry> {
    let source_type = geometry.value.type_name().to_string();

    let (family, shape) = match &geometry.value {
        Value::Point(coords) => (
            GeometryFamily::Point,
            Shape::Point(Point::new(coords[0], coords[1])),
        ),
        Value::MultiPoint(coords) => (
            GeometryFamily::Point,
            Shape::MultiPoint(MultiPoint::from(
                coords
                    .iter()
                    .map(|p| Point::new(p[0], p[1]))
                    .collect::<Vec<Point<f64>>>(),
            )),
        ),
        Value::LineString(coords) => (
            GeometryFamily::Line,
            Shape::Line(MultiLineString::new(vec![to_line_string(coords)])),
        ),
        Value::MultiLineString(lines) => (
            GeometryFamily::Line,
            Shape::Line(MultiLineString::new(
                lines.iter().map(|line| to_line_string(line)).collect(),
            )),
        ),
        Value::Polygon(rings) => (
            GeometryFamily::Polygon,
            Shape::Polygon(rings.iter().map(|ring| to_line_string(ring)).collect()),
        ),
        Value::MultiPolygon(polygons) => {
            // Flatten every sub-polygon's rings into one ring list. The
            // per-polygon grouping is lost; renderers treat the result as a
            // single polygon with many rings.
            let rings: Vec<LineString<f64>> = polygons
                .iter()
                .flat_map(|polygon| polygon.iter().map(|ring| to_line_string(ring)))
                .collect();
            (GeometryFamily::Polygon, Shape::Polygon(rings))
        }
        Value::GeometryCollection(_) => {
            log::warn!("Unsupported geometry type: {source_type}");
            return None;
        }
    };

    Some(NormalizedGeometry {
        family,
        shape,
        source_type,
    })
}

/// Convert a feature's geometry and properties.
///
/// Features with a missing or unsupported geometry yield `None`; a `null`
/// properties member becomes an empty map.
pub fn normalize_feature(feature: &Feature) -> Option<NormalizedFeature> {
    let geometry = match &feature.geometry {
        Some(geometry) => normalize_geometry(geometry)?,
        None => {
            log::warn!("Skipping feature without geometry");
            return None;
        }
    };

    Some(NormalizedFeature {
        geometry,
        properties: feature.properties.clone().unwrap_or_else(Map::new),
    })
}
