use geo::Coord;
use serde::Serialize;

use crate::extent::{Extent, compute_extent};
use crate::utils::error::Error;

/// Zoom level used when framing a single coordinate, where an extent would
/// collapse to a point.
pub const SINGLE_POINT_ZOOM: u32 = 15;

/// Animation duration for the single-point centered move.
const CENTER_DURATION_MS: u64 = 2000;

/// Animation duration for extent framing and preset navigation.
const NAVIGATE_DURATION_MS: u64 = 1000;

/// A camera move for the external view to animate. The core never reads
/// camera state back; it only emits these.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CameraCommand {
    CenterZoom {
        lon: f64,
        lat: f64,
        zoom: u32,
        duration_ms: u64,
    },
    FrameExtent {
        extent: Extent,
        duration_ms: u64,
    },
}

/// Decide how to frame a set of coordinates.
///
/// No coordinates means no camera move. A single coordinate gets a direct
/// centered move at a fixed zoom; the extent math is reserved for two or
/// more points, where a padded bounding box is meaningful.
pub fn frame_coordinates(coords: &[Coord<f64>]) -> Result<Option<CameraCommand>, Error> {
    match coords {
        [] => Ok(None),
        [only] => Ok(Some(CameraCommand::CenterZoom {
            lon: only.x,
            lat: only.y,
            zoom: SINGLE_POINT_ZOOM,
            duration_ms: CENTER_DURATION_MS,
        })),
        many => Ok(Some(CameraCommand::FrameExtent {
            extent: compute_extent(many)?,
            duration_ms: NAVIGATE_DURATION_MS,
        })),
    }
}

/// Parse a preset-location selection of the form `"lon,lat,zoom"`.
///
/// The default sentinel (`"def"` or empty) means no navigation. Anything
/// else that does not parse is reported as an invalid selection.
pub fn parse_location(selection: &str) -> Result<Option<CameraCommand>, Error> {
    let selection = selection.trim();
    if selection.is_empty() || selection == "def" {
        return Ok(None);
    }

    let invalid = || Error::InvalidLocation(selection.to_string());

    let mut parts = selection.split(',');
    let lon: f64 = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .ok_or_else(invalid)?;
    let lat: f64 = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .ok_or_else(invalid)?;
    let zoom: u32 = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(Some(CameraCommand::CenterZoom {
        lon,
        lat,
        zoom,
        duration_ms: NAVIGATE_DURATION_MS,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn test_no_coordinates_means_no_move() {
        assert_eq!(frame_coordinates(&[]).unwrap(), None);
    }

    #[test]
    fn test_single_coordinate_centers_at_fixed_zoom() {
        let command = frame_coordinates(&[c(13.4, 52.5)]).unwrap().unwrap();

        assert_eq!(
            command,
            CameraCommand::CenterZoom {
                lon: 13.4,
                lat: 52.5,
                zoom: SINGLE_POINT_ZOOM,
                duration_ms: 2000,
            }
        );
    }

    #[test]
    fn test_multiple_coordinates_frame_a_padded_extent() {
        let command = frame_coordinates(&[c(0.0, 0.0), c(10.0, 10.0)])
            .unwrap()
            .unwrap();

        match command {
            CameraCommand::FrameExtent { extent, duration_ms } => {
                assert_eq!(extent.xmin, -1.0);
                assert_eq!(extent.xmax, 11.0);
                assert_eq!(duration_ms, 1000);
            }
            other => panic!("expected extent framing, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_location_round_trip() {
        let command = parse_location("13.405, 52.52, 11").unwrap().unwrap();

        assert_eq!(
            command,
            CameraCommand::CenterZoom {
                lon: 13.405,
                lat: 52.52,
                zoom: 11,
                duration_ms: 1000,
            }
        );
    }

    #[test]
    fn test_parse_location_default_sentinel() {
        assert_eq!(parse_location("def").unwrap(), None);
        assert_eq!(parse_location("").unwrap(), None);
        assert_eq!(parse_location("  ").unwrap(), None);
    }

    #[test]
    fn test_parse_location_rejects_malformed_selections() {
        for bad in ["13.4", "13.4,52.5", "a,b,c", "1,2,3,4", "1,2,zoom"] {
            assert!(
                matches!(parse_location(bad), Err(Error::InvalidLocation(_))),
                "expected rejection of {bad:?}"
            );
        }
    }
}
