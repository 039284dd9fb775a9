use serde::Serialize;

use crate::geometry::GeometryFamily;

/// Identifier of a registered layer, unique within one registry.
///
/// The string combines a strictly increasing sequence number with the
/// geometry-family tag, so two layers registered in the same instant for
/// different families stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LayerId(String);

impl LayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata kept per registered layer. Records are created once and removed
/// once; there is no in-place update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerRecord {
    pub display_name: String,
    pub family: GeometryFamily,
    pub source_file: String,
    pub group_key: String,
}

/// Owns the mapping from layer id to record.
///
/// The rendered layer objects live in the external map view; callers keep
/// the view in sync with this registry. Insertion order is preserved for
/// the layer panel.
#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: Vec<(LayerId, LayerRecord)>,
    sequence: u64,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record under a freshly generated identifier.
    pub fn register(
        &mut self,
        family: GeometryFamily,
        display_name: impl Into<String>,
        source_file: impl Into<String>,
        group_key: impl Into<String>,
    ) -> LayerId {
        self.sequence += 1;
        let id = LayerId(format!("layer-{}-{}", self.sequence, family.tag()));

        self.layers.push((
            id.clone(),
            LayerRecord {
                display_name: display_name.into(),
                family,
                source_file: source_file.into(),
                group_key: group_key.into(),
            },
        ));
        id
    }

    /// Remove one layer. An unknown id is a no-op returning `None`; UI
    /// races such as a double-clicked remove button are expected.
    pub fn remove(&mut self, id: &LayerId) -> Option<LayerRecord> {
        let index = self.layers.iter().position(|(known, _)| known == id)?;
        Some(self.layers.remove(index).1)
    }

    /// Remove every layer whose group key matches, returning the removed
    /// records in their registration order.
    pub fn remove_group(&mut self, group_key: &str) -> Vec<LayerRecord> {
        let mut removed = Vec::new();
        self.layers.retain(|(_, record)| {
            if record.group_key == group_key {
                removed.push(record.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// All registered layers in insertion order.
    pub fn list(&self) -> &[(LayerId, LayerRecord)] {
        &self.layers
    }

    pub fn get(&self, id: &LayerId) -> Option<&LayerRecord> {
        self.layers
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_two_groups() -> (LayerRegistry, LayerId, LayerId, LayerId) {
        let mut registry = LayerRegistry::new();
        let a = registry.register(
            GeometryFamily::Point,
            "parks.geojson (points)",
            "parks.geojson",
            "parks.geojson",
        );
        let b = registry.register(
            GeometryFamily::Polygon,
            "parks.geojson (polygons)",
            "parks.geojson",
            "parks.geojson",
        );
        let c = registry.register(
            GeometryFamily::Line,
            "roads.geojson (lines)",
            "roads.geojson",
            "roads.geojson",
        );
        (registry, a, b, c)
    }

    #[test]
    fn test_ids_are_unique_and_tagged_by_family() {
        let (_, a, b, c) = registry_with_two_groups();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a.as_str().ends_with("point"));
        assert!(b.as_str().ends_with("polygon"));
        assert!(c.as_str().ends_with("line"));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let (registry, a, b, c) = registry_with_two_groups();

        let ids: Vec<&LayerId> = registry.list().iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![&a, &b, &c]);
    }

    #[test]
    fn test_remove_returns_record_once() {
        let (mut registry, a, _, _) = registry_with_two_groups();

        let removed = registry.remove(&a).unwrap();
        assert_eq!(removed.family, GeometryFamily::Point);
        assert_eq!(registry.len(), 2);

        // Second removal of the same id is a benign no-op.
        assert!(registry.remove(&a).is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_group_takes_every_member() {
        let (mut registry, _, _, c) = registry_with_two_groups();

        let removed = registry.remove_group("parks.geojson");
        assert_eq!(removed.len(), 2);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&c).is_some());

        assert!(registry.remove_group("parks.geojson").is_empty());
    }

    #[test]
    fn test_removed_ids_are_never_reused() {
        let mut registry = LayerRegistry::new();
        let first = registry.register(GeometryFamily::Point, "a", "a.geojson", "a.geojson");
        registry.remove(&first);

        let second = registry.register(GeometryFamily::Point, "b", "b.geojson", "b.geojson");
        assert_ne!(first, second);
    }
}
