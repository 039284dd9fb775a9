use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::Map;

// Fractional parts of multiples of large irrational-ish constants spread
// the points out without a random number generator, keeping runs
// reproducible.
const STRIDE_X: f64 = 1_414_213.5623;
const STRIDE_Y: f64 = 1_732_050.8075;

/// Next deterministic lon/lat position within the given ranges, driven by
/// a running counter.
fn deterministic_coord(
    counter: &mut usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Vec<f64> {
    let step = *counter;
    *counter += 1;

    let x_progress = (step as f64 * STRIDE_X).fract();
    let y_progress = (step as f64 * STRIDE_Y).fract();

    vec![
        x_range.0 + x_progress * (x_range.1 - x_range.0),
        y_range.0 + y_progress * (y_range.1 - y_range.0),
    ]
}

fn deterministic_ring(
    counter: &mut usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Vec<Vec<f64>> {
    let corner = deterministic_coord(counter, x_range, y_range);
    let size = 0.5;
    vec![
        vec![corner[0], corner[1]],
        vec![corner[0] + size, corner[1]],
        vec![corner[0] + size, corner[1] + size],
        vec![corner[0], corner[1] + size],
        vec![corner[0], corner[1]],
    ]
}

/// Generates a synthetic GeoJSON FeatureCollection for benchmarks and
/// tests, cycling through the six supported geometry types plus an
/// occasional unsupported GeometryCollection. Deterministic for a given
/// feature count and ranges.
pub fn generate_synthetic_featurecollection(
    num_features: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> FeatureCollection {
    let mut point_counter: usize = 0;
    let mut features: Vec<Feature> = Vec::with_capacity(num_features);

    for i in 0..num_features {
        let geometry = match i % 7 {
            0 => Geometry::new(Value::Point(deterministic_coord(
                &mut point_counter,
                x_range,
                y_range,
            ))),
            1 => {
                let coords = (0..3)
                    .map(|_| deterministic_coord(&mut point_counter, x_range, y_range))
                    .collect();
                Geometry::new(Value::MultiPoint(coords))
            }
            2 => {
                let num_points = 3 + (i % 3);
                let coords = (0..num_points)
                    .map(|_| deterministic_coord(&mut point_counter, x_range, y_range))
                    .collect();
                Geometry::new(Value::LineString(coords))
            }
            3 => {
                let lines = (0..2)
                    .map(|_| {
                        (0..3)
                            .map(|_| {
                                deterministic_coord(&mut point_counter, x_range, y_range)
                            })
                            .collect()
                    })
                    .collect();
                Geometry::new(Value::MultiLineString(lines))
            }
            4 => Geometry::new(Value::Polygon(vec![deterministic_ring(
                &mut point_counter,
                x_range,
                y_range,
            )])),
            5 => {
                let polygons = (0..2)
                    .map(|_| vec![deterministic_ring(&mut point_counter, x_range, y_range)])
                    .collect();
                Geometry::new(Value::MultiPolygon(polygons))
            }
            _ => {
                // Unsupported on purpose, to exercise the skip path.
                Geometry::new(Value::GeometryCollection(vec![Geometry::new(
                    Value::Point(deterministic_coord(&mut point_counter, x_range, y_range)),
                )]))
            }
        };

        let mut properties = Map::new();
        properties.insert(
            "name".to_string(),
            serde_json::Value::String(format!("feature-{i}")),
        );

        features.push(Feature {
            bbox: None,
            geometry: Some(geometry),
            id: Some(geojson::feature::Id::Number((i as u64).into())),
            properties: Some(properties),
            foreign_members: None,
        });
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
