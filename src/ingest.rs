use geo::Coord;
use geojson::{Feature, GeoJson};
use rayon::prelude::*;

use crate::geometry::extract::extract_coordinates;
use crate::geometry::normalize::normalize_feature;
use crate::geometry::{GeometryFamily, NormalizedFeature};

/// Normalized features partitioned by geometry family.
#[derive(Debug, Clone, Default)]
pub struct GroupedFeatures {
    pub points: Vec<NormalizedFeature>,
    pub lines: Vec<NormalizedFeature>,
    pub polygons: Vec<NormalizedFeature>,
}

impl GroupedFeatures {
    pub fn for_family(&self, family: GeometryFamily) -> &[NormalizedFeature] {
        match family {
            GeometryFamily::Point => &self.points,
            GeometryFamily::Line => &self.lines,
            GeometryFamily::Polygon => &self.polygons,
        }
    }

    fn push(&mut self, feature: NormalizedFeature) {
        match feature.geometry.family {
            GeometryFamily::Point => self.points.push(feature),
            GeometryFamily::Line => self.lines.push(feature),
            GeometryFamily::Polygon => self.polygons.push(feature),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len() + self.lines.len() + self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-empty partitions in fixed family order, for stable layer
    /// registration and display.
    pub fn partitions(&self) -> impl Iterator<Item = (GeometryFamily, &[NormalizedFeature])> {
        [
            GeometryFamily::Point,
            GeometryFamily::Line,
            GeometryFamily::Polygon,
        ]
        .into_iter()
        .map(|family| (family, self.for_family(family)))
        .filter(|(_, features)| !features.is_empty())
    }
}

/// Result of one ingest call: the grouped features, the number of features
/// skipped because their geometry could not be converted, and the flat
/// coordinate sequence of the whole document (for camera framing).
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub grouped: GroupedFeatures,
    pub skipped: usize,
    pub coordinates: Vec<Coord<f64>>,
}

// A bare geometry is accepted as if it were a feature without properties.
fn features_of(document: &GeoJson) -> Vec<Feature> {
    match document {
        GeoJson::FeatureCollection(collection) => collection.features.clone(),
        GeoJson::Feature(feature) => vec![feature.clone()],
        GeoJson::Geometry(geometry) => vec![Feature {
            bbox: None,
            geometry: Some(geometry.clone()),
            id: None,
            properties: None,
            foreign_members: None,
        }],
    }
}

fn fold_feature(report: &mut IngestReport, feature: &Feature) {
    if let Some(geometry) = &feature.geometry {
        report.coordinates.extend(extract_coordinates(geometry));
    }

    match normalize_feature(feature) {
        Some(normalized) => report.grouped.push(normalized),
        None => report.skipped += 1,
    }
}

/// Ingest a parsed GeoJSON document.
///
/// Accepts a `FeatureCollection`, a single `Feature`, or a bare geometry;
/// malformed documents never get this far (the text parse rejects them).
/// Features whose geometry cannot be converted are skipped and counted;
/// they never abort the batch.
pub fn ingest(document: &GeoJson) -> IngestReport {
    let features = features_of(document);

    let mut report = IngestReport::default();
    for feature in &features {
        fold_feature(&mut report, feature);
    }

    log::debug!(
        "Ingested {} features ({} skipped)",
        report.grouped.len(),
        report.skipped
    );
    report
}

/// Parallel variant of [`ingest`]. Per-feature normalization is pure, so
/// features are processed on the rayon pool and the partial reports are
/// merged back in input order; the result is identical to the sequential
/// path.
pub fn ingest_par(document: &GeoJson) -> IngestReport {
    let features = features_of(document);

    features
        .par_chunks(256)
        .map(|chunk| {
            let mut partial = IngestReport::default();
            for feature in chunk {
                fold_feature(&mut partial, feature);
            }
            partial
        })
        .collect::<Vec<IngestReport>>()
        .into_iter()
        .fold(IngestReport::default(), |mut merged, partial| {
            merged.grouped.points.extend(partial.grouped.points);
            merged.grouped.lines.extend(partial.grouped.lines);
            merged.grouped.polygons.extend(partial.grouped.polygons);
            merged.skipped += partial.skipped;
            merged.coordinates.extend(partial.coordinates);
            merged
        })
}
