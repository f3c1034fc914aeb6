use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Property name → color string (`#rrggbb` or `#rrggbbaa`), in insertion order.
pub type PropertyMap = IndexMap<String, String>;

/// A custom map style as produced by the styling UI.
///
/// Both sections keep the order they were built (or parsed) in; the encoded
/// parameter follows that order exactly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Element name (e.g. "water") → its properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<IndexMap<String, PropertyMap>>,
    /// Global, non element-scoped properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<PropertyMap>,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one property of an element, creating the element if needed.
    pub fn with_element(mut self, element: &str, property: &str, color: &str) -> Self {
        self.elements
            .get_or_insert_with(IndexMap::new)
            .entry(element.to_string())
            .or_default()
            .insert(property.to_string(), color.to_string());
        self
    }

    /// Set one global property.
    pub fn with_setting(mut self, property: &str, color: &str) -> Self {
        self.settings
            .get_or_insert_with(IndexMap::new)
            .insert(property.to_string(), color.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_none() && self.settings.is_none()
    }
}
