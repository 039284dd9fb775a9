use serde::Serialize;

use crate::geometry::GeometryFamily;

/// RGB color with an opacity fraction, matching what the external renderer
/// expects for symbol definitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outline {
    pub color: Color,
    pub width: f64,
}

/// Symbology hint handed to the rendering sink alongside each geometry.
/// The values are fixed per geometry family; they are not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StyleHint {
    Marker {
        color: Color,
        size: f64,
        outline: Outline,
    },
    Line {
        color: Color,
        width: f64,
    },
    Fill {
        color: Color,
        outline: Outline,
    },
}

const ACCENT: Color = Color::rgb(51, 51, 204);
const WHITE: Color = Color::rgb(255, 255, 255);

/// Default symbology for an uploaded feature, by geometry family.
pub fn style_for_family(family: GeometryFamily) -> StyleHint {
    match family {
        GeometryFamily::Point => StyleHint::Marker {
            color: Color::rgba(ACCENT.r, ACCENT.g, ACCENT.b, 0.7),
            size: 8.0,
            outline: Outline {
                color: WHITE,
                width: 1.0,
            },
        },
        GeometryFamily::Line => StyleHint::Line {
            color: Color::rgba(ACCENT.r, ACCENT.g, ACCENT.b, 0.8),
            width: 2.0,
        },
        GeometryFamily::Polygon => StyleHint::Fill {
            color: Color::rgba(ACCENT.r, ACCENT.g, ACCENT.b, 0.3),
            outline: Outline {
                color: Color::rgba(ACCENT.r, ACCENT.g, ACCENT.b, 0.8),
                width: 2.0,
            },
        },
    }
}

/// Symbology for a manually dropped marker, distinct from uploaded points.
pub fn custom_marker_style() -> StyleHint {
    StyleHint::Marker {
        color: Color::rgb(226, 119, 40),
        size: 12.0,
        outline: Outline {
            color: WHITE,
            width: 2.0,
        },
    }
}
