//! Entity model for the SDK

use super::attribute::Attribute;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Canvas position of an entity node. Carries no invariant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Node-type definition in the ontology ("object type" on the wire)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Entity {
    /// Opaque id, unique within the model
    #[serde(default)]
    pub id: String,
    /// Entity name, unique within the model and a valid identifier
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Display fallback when no display name is set
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the parent entity (single inheritance)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Entity {
    /// Create a new entity with a fresh id and a required, unique `id` attribute
    ///
    /// # Example
    ///
    /// ```rust
    /// use ontology_schema_sdk::models::Entity;
    ///
    /// let person = Entity::new("Person");
    /// assert!(person.id.starts_with("entity-"));
    /// assert!(person.attributes[0].is_primary_key());
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("entity-{}", Uuid::new_v4()),
            label: name.clone(),
            name,
            attributes: vec![
                Attribute::new("id", "string")
                    .required()
                    .unique()
                    .with_description("Primary key"),
            ],
            position: Some(Position::default()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    /// Text shown on the canvas: display name, else label, else name
    pub fn display_label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(display) if !display.is_empty() => display,
            _ if !self.label.is_empty() => self.label.as_str(),
            _ => self.name.as_str(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn has_primary_key(&self) -> bool {
        self.attributes.iter().any(Attribute::is_primary_key)
    }
}
