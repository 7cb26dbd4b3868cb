//! Attribute model for the SDK

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Typed field on an entity, also used as a relation property.
///
/// Attributes carry an opaque `constraints` map. The `unique` flag lives on the
/// attribute itself; the wire format folds it into `constraints.unique`
/// (see [`crate::convert`]).
///
/// # Example
///
/// ```rust
/// use ontology_schema_sdk::models::Attribute;
///
/// let attr = Attribute::new("id", "string").required().unique();
/// assert!(attr.is_primary_key());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Attribute {
    /// Attribute name, unique within its owning entity or relation
    #[serde(default)]
    pub name: String,
    /// Human readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Data type (`string`, `int`, `array<date>`, ...)
    #[serde(rename = "type", default)]
    pub data_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    /// Opaque constraint map (`min_length`, `pattern`, ...). `unique` is reserved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<BTreeMap<String, serde_json::Value>>,
}

impl Attribute {
    /// Create an optional, non-unique attribute with the given name and type
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = Some(true);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_constraint(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.constraints
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value);
        self
    }

    /// `unique` with an absent flag read as false
    pub fn is_unique(&self) -> bool {
        self.unique.unwrap_or(false)
    }

    /// Required and unique: the informal primary key of an entity
    pub fn is_primary_key(&self) -> bool {
        self.required && self.is_unique()
    }
}
