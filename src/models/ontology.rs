//! Ontology model: the in-memory graph schema edited by frontends

use super::entity::Entity;
use super::relation::Relation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default namespace for newly created and loaded models
pub const DEFAULT_NAMESPACE: &str = "ontology.builder";

/// Default version for newly created and loaded models
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Graph-shaped schema: entities, their attributes, and relations between them.
///
/// The model is a plain mutable value. It does not enforce any invariant
/// itself; run [`crate::validation::validate_model`] over a snapshot to get
/// diagnostics.
///
/// Ids are not stable across a wire round trip. `metadata` is not emitted on
/// the wire either; it comes back on load only when the backend returns a
/// top-level `metadata` object, so key on entity names for stable identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OntologyModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}

impl OntologyModel {
    /// Create an empty model with default version and namespace
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: format!("model-{}", chrono::Utc::now().timestamp_millis()),
            name: name.into(),
            version: DEFAULT_VERSION.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            ..Default::default()
        }
    }

    pub fn entity_by_id(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    pub fn relation_by_id(&self, id: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.id == id)
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    /// Remove an entity and every relation that references it by id.
    ///
    /// Returns the removed entity, if any.
    pub fn remove_entity(&mut self, id: &str) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        let removed = self.entities.remove(index);
        self.relations.retain(|r| r.source != id && r.target != id);
        Some(removed)
    }

    pub fn remove_relation(&mut self, id: &str) -> Option<Relation> {
        let index = self.relations.iter().position(|r| r.id == id)?;
        Some(self.relations.remove(index))
    }
}
