//! Relation model for the SDK

use super::attribute::Attribute;
use super::enums::{Cardinality, Direction};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Edge-type definition connecting two entities ("link type" on the wire).
///
/// `source`/`target` hold entity ids while `source_type`/`target_type` hold
/// denormalized entity names. Validation checks that both agree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Relation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Source entity id
    #[serde(default)]
    pub source: String,
    /// Target entity id
    #[serde(default)]
    pub target: String,
    /// Source entity name
    #[serde(default)]
    pub source_type: String,
    /// Target entity name
    #[serde(default)]
    pub target_type: String,
    #[serde(rename = "type", default)]
    pub cardinality: Cardinality,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Attribute>>,
    /// Source-entity attribute name to target-entity attribute name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_mappings: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Relation {
    /// Create an unnamed, directed `1-N` relation between two entities
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        source_type: impl Into<String>,
        target_type: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("relation-{}", Uuid::new_v4()),
            source: source.into(),
            target: target.into(),
            source_type: source_type.into(),
            target_type: target_type.into(),
            properties: Some(Vec::new()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    pub fn with_property_mapping(
        mut self,
        source_attribute: impl Into<String>,
        target_attribute: impl Into<String>,
    ) -> Self {
        self.property_mappings
            .get_or_insert_with(BTreeMap::new)
            .insert(source_attribute.into(), target_attribute.into());
        self
    }

    pub fn is_self_loop(&self) -> bool {
        self.source_type == self.target_type
    }

    /// Key used to detect duplicate relations between the same entity pair
    pub fn triple_key(&self) -> (&str, &str, &str) {
        (&self.source_type, &self.target_type, &self.name)
    }
}
