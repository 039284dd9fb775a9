use geojson::GeoJson;
use serde_json::Value as JsonValue;

use crate::geometry::GeometryFamily;
use crate::ingest::ingest;
use crate::registry::{LayerId, LayerRecord, LayerRegistry};
use crate::style::style_for_family;
use crate::utils::error::Error;
use crate::viewer::basemap::Basemap;
use crate::viewer::camera::{CameraCommand, frame_coordinates, parse_location};
use crate::viewer::graphic::{Graphic, graphic_for_feature};
use crate::viewer::markers::{Marker, marker_at};

/// One layer produced by an upload, ready for the rendering sink.
#[derive(Debug, Clone)]
pub struct LoadedLayer {
    pub id: LayerId,
    pub family: GeometryFamily,
    pub display_name: String,
    pub graphics: Vec<Graphic>,
}

/// Result of loading one GeoJSON document.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub layers: Vec<LoadedLayer>,
    pub camera: Option<CameraCommand>,
    pub skipped: usize,
}

/// Top-level controller: owns the layer registry, the dropped markers, and
/// the basemap selection. The external map widget renders what this hands
/// out and calls back in through the removal methods.
#[derive(Debug, Default)]
pub struct MapViewer {
    registry: LayerRegistry,
    markers: Vec<Marker>,
    basemap: Basemap,
}

impl MapViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a GeoJSON document from its raw text. A parse failure is fatal
    /// for the whole upload; no layers are registered.
    pub fn load_geojson_str(&mut self, text: &str, file_name: &str) -> Result<LoadOutcome, Error> {
        let document = text.parse::<GeoJson>()?;
        self.load_geojson(&document, file_name)
    }

    /// Load a GeoJSON document that arrived as generic parsed JSON.
    pub fn load_geojson_value(
        &mut self,
        json: JsonValue,
        file_name: &str,
    ) -> Result<LoadOutcome, Error> {
        let document = GeoJson::from_json_value(json)?;
        self.load_geojson(&document, file_name)
    }

    /// Load an already-parsed document: normalize and group the features,
    /// register one layer per non-empty geometry family (all sharing the
    /// file name as group key), and derive the camera move from the raw
    /// coordinate sequence.
    pub fn load_geojson(
        &mut self,
        document: &GeoJson,
        file_name: &str,
    ) -> Result<LoadOutcome, Error> {
        let report = ingest(document);

        if report.skipped > 0 {
            log::warn!(
                "{}: skipped {} feature(s) with unsupported geometry",
                file_name,
                report.skipped
            );
        }

        let mut layers = Vec::new();
        for (family, features) in report.grouped.partitions() {
            let display_name = format!("{} ({})", file_name, family.label());
            let id = self
                .registry
                .register(family, display_name.clone(), file_name, file_name);

            let style = style_for_family(family);
            let graphics = features
                .iter()
                .cloned()
                .map(|feature| graphic_for_feature(feature.geometry, feature.properties, style))
                .collect();

            layers.push(LoadedLayer {
                id,
                family,
                display_name,
                graphics,
            });
        }

        Ok(LoadOutcome {
            layers,
            camera: frame_coordinates(&report.coordinates)?,
            skipped: report.skipped,
        })
    }

    /// Registered layers in registration order, for the layer panel.
    pub fn layers(&self) -> &[(LayerId, LayerRecord)] {
        self.registry.list()
    }

    /// Remove one layer; unknown ids are a benign no-op.
    pub fn remove_layer(&mut self, id: &LayerId) -> Option<LayerRecord> {
        self.registry.remove(id)
    }

    /// Remove every layer that came from one source file.
    pub fn remove_group(&mut self, group_key: &str) -> Vec<LayerRecord> {
        self.registry.remove_group(group_key)
    }

    /// Resolve a preset-location selection into a camera move.
    pub fn navigate(&self, selection: &str) -> Result<Option<CameraCommand>, Error> {
        parse_location(selection)
    }

    pub fn set_basemap(&mut self, basemap: Basemap) {
        self.basemap = basemap;
    }

    pub fn basemap(&self) -> Basemap {
        self.basemap
    }

    /// Drop a marker at the view's current center (a pass-through value
    /// reported by the external view).
    pub fn add_marker(&mut self, lon: f64, lat: f64) -> &Marker {
        self.markers.push(marker_at(lon, lat));
        &self.markers[self.markers.len() - 1]
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Remove every dropped marker, returning how many there were. Zero
    /// tells the caller there was nothing to remove.
    pub fn clear_markers(&mut self) -> usize {
        let count = self.markers.len();
        self.markers.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::camera::SINGLE_POINT_ZOOM;

    const TWO_FAMILY_COLLECTION: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name": "station"},
                "geometry": {"type": "Point", "coordinates": [10.0, 20.0]}
            },
            {
                "type": "Feature",
                "properties": {"name": "district"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0,0.0],[4.0,0.0],[4.0,4.0],[0.0,4.0],[0.0,0.0]]]
                }
            }
        ]
    }
    "#;

    #[test]
    fn test_load_registers_one_layer_per_family() {
        let mut viewer = MapViewer::new();
        let outcome = viewer
            .load_geojson_str(TWO_FAMILY_COLLECTION, "city.geojson")
            .unwrap();

        assert_eq!(outcome.layers.len(), 2);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(viewer.layers().len(), 2);

        let families: Vec<GeometryFamily> =
            outcome.layers.iter().map(|layer| layer.family).collect();
        assert_eq!(families, vec![GeometryFamily::Point, GeometryFamily::Polygon]);
        assert_eq!(outcome.layers[0].display_name, "city.geojson (points)");
        assert_eq!(outcome.layers[1].display_name, "city.geojson (polygons)");
    }

    #[test]
    fn test_remove_group_clears_an_upload_in_one_call() {
        let mut viewer = MapViewer::new();
        viewer
            .load_geojson_str(TWO_FAMILY_COLLECTION, "city.geojson")
            .unwrap();

        let removed = viewer.remove_group("city.geojson");
        assert_eq!(removed.len(), 2);
        assert!(viewer.layers().is_empty());
    }

    #[test]
    fn test_single_point_upload_centers_the_camera() {
        let mut viewer = MapViewer::new();
        let outcome = viewer
            .load_geojson_str(
                r#"
                {
                    "type": "Feature",
                    "properties": null,
                    "geometry": {"type": "Point", "coordinates": [13.4, 52.5]}
                }
                "#,
                "point.geojson",
            )
            .unwrap();

        assert_eq!(
            outcome.camera,
            Some(CameraCommand::CenterZoom {
                lon: 13.4,
                lat: 52.5,
                zoom: SINGLE_POINT_ZOOM,
                duration_ms: 2000,
            })
        );
    }

    #[test]
    fn test_multi_feature_upload_frames_an_extent() {
        let mut viewer = MapViewer::new();
        let outcome = viewer
            .load_geojson_str(TWO_FAMILY_COLLECTION, "city.geojson")
            .unwrap();

        assert!(matches!(
            outcome.camera,
            Some(CameraCommand::FrameExtent { .. })
        ));
    }

    #[test]
    fn test_unsupported_features_are_counted_not_fatal() {
        let mut viewer = MapViewer::new();
        let outcome = viewer
            .load_geojson_str(
                r#"
                {
                    "type": "FeatureCollection",
                    "features": [
                        {
                            "type": "Feature",
                            "properties": null,
                            "geometry": {
                                "type": "GeometryCollection",
                                "geometries": []
                            }
                        }
                    ]
                }
                "#,
                "odd.geojson",
            )
            .unwrap();

        assert!(outcome.layers.is_empty());
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.camera, None);
        assert!(viewer.layers().is_empty());
    }

    #[test]
    fn test_malformed_document_registers_nothing() {
        let mut viewer = MapViewer::new();

        let result = viewer.load_geojson_str("{\"type\": \"Nonsense\"}", "bad.geojson");
        assert!(matches!(result, Err(Error::Parse(_))));
        assert!(viewer.layers().is_empty());
    }

    #[test]
    fn test_markers_accumulate_and_clear() {
        let mut viewer = MapViewer::new();
        viewer.add_marker(1.0, 2.0);
        viewer.add_marker(3.0, 4.0);

        assert_eq!(viewer.markers().len(), 2);
        assert_eq!(viewer.clear_markers(), 2);
        assert_eq!(viewer.clear_markers(), 0);
    }

    #[test]
    fn test_basemap_switch() {
        let mut viewer = MapViewer::new();
        assert_eq!(viewer.basemap(), Basemap::Streets);

        viewer.set_basemap("satellite".parse().unwrap());
        assert_eq!(viewer.basemap(), Basemap::Satellite);
    }

    #[test]
    fn test_navigate_delegates_location_parsing() {
        let viewer = MapViewer::new();

        assert!(viewer.navigate("def").unwrap().is_none());
        assert!(viewer.navigate("13.4,52.5,11").unwrap().is_some());
        assert!(viewer.navigate("not-a-location").is_err());
    }
}
