use geo::Coord;
use geojson::{Geometry, Value};

/// Flatten a geometry's nested coordinate arrays into one ordered list of
/// lon/lat pairs, outer array first. Used only for extent computation, so
/// duplicates (shared ring endpoints and the like) are kept as-is.
///
/// Unknown geometry types produce an empty list rather than an error.
pub fn extract_coordinates(geometry: &Geometry) -> Vec<Coord<f64>> {
    let mut coords: Vec<Coord<f64>> = Vec::new();

    match &geometry.value {
        Value::Point(position) => {
            coords.push(Coord {
                x: position[0],
                y: position[1],
            });
        }
        Value::MultiPoint(positions) | Value::LineString(positions) => {
            coords.extend(positions.iter().map(|p| Coord { x: p[0], y: p[1] }));
        }
        Value::MultiLineString(lines) => {
            for line in lines {
                coords.extend(line.iter().map(|p| Coord { x: p[0], y: p[1] }));
            }
        }
        Value::Polygon(rings) => {
            for ring in rings {
                coords.extend(ring.iter().map(|p| Coord { x: p[0], y: p[1] }));
            }
        }
        Value::MultiPolygon(polygons) => {
            for polygon in polygons {
                for ring in polygon {
                    coords.extend(ring.iter().map(|p| Coord { x: p[0], y: p[1] }));
                }
            }
        }
        Value::GeometryCollection(_) => {
            log::warn!(
                "Unknown geometry type for coordinate extraction: {}",
                geometry.value.type_name()
            );
        }
    }

    coords
}
