use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::geometry::NormalizedGeometry;
use crate::style::StyleHint;

/// Popup content for one rendered feature: a title plus the property
/// key/value pairs, left to the UI layer to lay out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupTemplate {
    pub title: String,
    pub entries: Vec<(String, String)>,
}

/// Everything the rendering sink needs to draw one feature.
#[derive(Debug, Clone)]
pub struct Graphic {
    pub geometry: NormalizedGeometry,
    pub properties: Map<String, JsonValue>,
    pub style: StyleHint,
    pub popup: PopupTemplate,
}

fn value_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Derive a popup from a feature's properties. The title prefers a `name`
/// or `title` property; featureless popups fall back to a fixed label.
pub fn popup_for_properties(properties: &Map<String, JsonValue>) -> PopupTemplate {
    if properties.is_empty() {
        return PopupTemplate {
            title: "Feature".to_string(),
            entries: Vec::new(),
        };
    }

    let title = properties
        .get("name")
        .or_else(|| properties.get("title"))
        .and_then(|value| value.as_str())
        .unwrap_or("Feature")
        .to_string();

    PopupTemplate {
        title,
        entries: properties
            .iter()
            .map(|(key, value)| (key.clone(), value_text(value)))
            .collect(),
    }
}

pub fn graphic_for_feature(
    geometry: NormalizedGeometry,
    properties: Map<String, JsonValue>,
    style: StyleHint,
) -> Graphic {
    let popup = popup_for_properties(&properties);
    Graphic {
        geometry,
        properties,
        style,
        popup,
    }
}
