use geo::{Coord, Rect};
use serde::Serialize;

use crate::utils::error::Error;

/// Well-known id of the WGS84 geographic coordinate system.
pub const WGS84_WKID: i32 = 4326;

/// Fraction of the coordinate span added as padding on each side.
const PADDING_RATIO: f64 = 0.1;

/// Minimum padding in degrees, so degenerate (single-point or collinear)
/// inputs still get a visible margin.
const MIN_PADDING: f64 = 0.01;

/// Axis-aligned bounding rectangle in geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    pub wkid: i32,
}

impl Extent {
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord {
                x: self.xmin,
                y: self.ymin,
            },
            Coord {
                x: self.xmax,
                y: self.ymax,
            },
        )
    }
}

impl From<Rect<f64>> for Extent {
    fn from(rect: Rect<f64>) -> Self {
        Extent {
            xmin: rect.min().x,
            ymin: rect.min().y,
            xmax: rect.max().x,
            ymax: rect.max().y,
            wkid: WGS84_WKID,
        }
    }
}

/// Reduce a coordinate sequence to a padded bounding rectangle.
///
/// Padding is `max(span * 0.1, 0.01)` per axis, added symmetrically, so the
/// box always strictly contains every input coordinate. An empty input is a
/// contract violation and returns `Error::EmptyCoordinates`.
pub fn compute_extent(coords: &[Coord<f64>]) -> Result<Extent, Error> {
    if coords.is_empty() {
        return Err(Error::EmptyCoordinates);
    }

    let (min_lon, min_lat, max_lon, max_lat) = coords.iter().fold(
        (
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        ),
        |(min_lon, min_lat, max_lon, max_lat), c| {
            (
                min_lon.min(c.x),
                min_lat.min(c.y),
                max_lon.max(c.x),
                max_lat.max(c.y),
            )
        },
    );

    let lon_padding = ((max_lon - min_lon) * PADDING_RATIO).max(MIN_PADDING);
    let lat_padding = ((max_lat - min_lat) * PADDING_RATIO).max(MIN_PADDING);

    Ok(Extent {
        xmin: min_lon - lon_padding,
        ymin: min_lat - lat_padding,
        xmax: max_lon + lon_padding,
        ymax: max_lat + lat_padding,
        wkid: WGS84_WKID,
    })
}

/// Scale an extent around its center by the given factor.
pub fn expand(extent: &Extent, factor: f64) -> Extent {
    let grow_x = (extent.xmax - extent.xmin) * (factor - 1.0) / 2.0;
    let grow_y = (extent.ymax - extent.ymin) * (factor - 1.0) / 2.0;

    Extent {
        xmin: extent.xmin - grow_x,
        ymin: extent.ymin - grow_y,
        xmax: extent.xmax + grow_x,
        ymax: extent.ymax + grow_y,
        wkid: extent.wkid,
    }
}
