//! Conversion between the ontology model and the wire document
//!
//! Both directions are total: they never fail and never validate. Defects that
//! survive conversion (dangling relation endpoints, invalid types) are left for
//! [`crate::validation::validate_model`] to report.
//!
//! The pair is not identity preserving. Loading regenerates entity ids as
//! `entity-<index>`, relation ids as `relation-<index>` and the model id from
//! the current time. Callers that need stable identity across reloads should
//! key on names. `to_wire_format` never emits model or entity `metadata`, so
//! ids carried there survive only if the backend echoes a top-level
//! `metadata` object back, which loads into the model's `metadata`.

pub mod error;
pub mod wire;

pub use error::ConversionError;
pub use wire::{WireDocument, WireLinkType, WireObjectType, WireProperty};

use crate::models::{
    Attribute, Cardinality, DEFAULT_NAMESPACE, DEFAULT_VERSION, Direction, Entity, OntologyModel,
    Relation,
};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// Model name used when a loaded document carries none
pub const DEFAULT_MODEL_NAME: &str = "Untitled Model";

const UNIQUE_CONSTRAINT: &str = "unique";

/// Convert a model into the wire document submitted to the schema service
pub fn to_wire_format(model: &OntologyModel) -> WireDocument {
    let document = WireDocument {
        name: None,
        version: model.version.clone(),
        namespace: model.namespace.clone(),
        object_types: model.entities.iter().map(object_type_to_wire).collect(),
        link_types: model.relations.iter().map(link_type_to_wire).collect(),
        data_sources: Vec::new(),
        metadata: None,
    };
    info!(
        "Converted model '{}' to wire document: {} object type(s), {} link type(s)",
        model.name,
        document.object_types.len(),
        document.link_types.len()
    );
    document
}

/// Convert a wire document into a fresh model
pub fn from_wire_format(document: &WireDocument) -> OntologyModel {
    let entities: Vec<Entity> = document
        .object_types
        .iter()
        .enumerate()
        .map(|(index, object_type)| object_type_from_wire(index, object_type))
        .collect();

    let mut ids_by_name: HashMap<&str, &str> = HashMap::new();
    for entity in &entities {
        ids_by_name
            .entry(entity.name.as_str())
            .or_insert(entity.id.as_str());
    }

    let relations: Vec<Relation> = document
        .link_types
        .iter()
        .enumerate()
        .map(|(index, link_type)| link_type_from_wire(index, link_type, &ids_by_name))
        .collect();

    let model = OntologyModel {
        id: format!("model-{}", chrono::Utc::now().timestamp_millis()),
        name: non_empty(document.name.as_deref())
            .unwrap_or(DEFAULT_MODEL_NAME)
            .to_string(),
        version: non_empty(Some(document.version.as_str()))
            .unwrap_or(DEFAULT_VERSION)
            .to_string(),
        namespace: non_empty(Some(document.namespace.as_str()))
            .unwrap_or(DEFAULT_NAMESPACE)
            .to_string(),
        entities,
        relations,
        metadata: document.metadata.clone(),
    };
    info!(
        "Loaded model '{}' from wire document: {} entities, {} relations",
        model.name,
        model.entities.len(),
        model.relations.len()
    );
    model
}

/// Narrow an untyped JSON tree and convert it into a model
pub fn from_wire_value(value: &Value) -> OntologyModel {
    from_wire_format(&WireDocument::from_value(value))
}

impl From<&OntologyModel> for WireDocument {
    fn from(model: &OntologyModel) -> Self {
        to_wire_format(model)
    }
}

impl From<&WireDocument> for OntologyModel {
    fn from(document: &WireDocument) -> Self {
        from_wire_format(document)
    }
}

fn object_type_to_wire(entity: &Entity) -> WireObjectType {
    WireObjectType {
        name: entity.name.clone(),
        display_name: entity.display_name.clone(),
        description: entity.description.clone(),
        base_type: entity.base_type.clone(),
        properties: entity.attributes.iter().map(attribute_to_wire).collect(),
        data_source: entity.data_source.clone(),
        url: entity.url.clone(),
    }
}

fn link_type_to_wire(relation: &Relation) -> WireLinkType {
    let property_mappings = match &relation.property_mappings {
        None => None,
        Some(mappings) if mappings.is_empty() => Some(None),
        Some(mappings) => Some(Some(mappings.clone())),
    };
    WireLinkType {
        name: relation.name.clone(),
        display_name: relation.display_name.clone(),
        description: relation.description.clone(),
        source_type: relation.source_type.clone(),
        target_type: relation.target_type.clone(),
        cardinality: relation.cardinality.to_wire().to_string(),
        direction: relation.direction.as_str().to_string(),
        properties: relation
            .properties
            .as_ref()
            .map(|properties| properties.iter().map(attribute_to_wire).collect()),
        property_mappings,
        data_source: relation.data_source.clone(),
        url: relation.url.clone(),
    }
}

/// Fold `unique` into the constraints map; an empty map becomes `null`
fn attribute_to_wire(attr: &Attribute) -> WireProperty {
    let mut constraints = attr.constraints.clone().unwrap_or_default();
    if let Some(unique) = attr.unique {
        constraints.insert(UNIQUE_CONSTRAINT.to_string(), Value::Bool(unique));
    }
    WireProperty {
        name: attr.name.clone(),
        data_type: attr.data_type.clone(),
        required: attr.required,
        description: attr.description.clone(),
        default_value: attr.default_value.clone(),
        constraints: (!constraints.is_empty()).then_some(constraints),
        display_name: non_empty(attr.display_name.as_deref()).map(str::to_string),
        unique: None,
    }
}

fn object_type_from_wire(index: usize, object_type: &WireObjectType) -> Entity {
    let label = non_empty(object_type.display_name.as_deref())
        .unwrap_or(object_type.name.as_str())
        .to_string();
    Entity {
        id: format!("entity-{}", index),
        name: object_type.name.clone(),
        display_name: object_type.display_name.clone(),
        label,
        description: object_type.description.clone(),
        base_type: object_type.base_type.clone(),
        attributes: object_type
            .properties
            .iter()
            .map(attribute_from_wire)
            .collect(),
        position: None,
        metadata: None,
        data_source: object_type.data_source.clone(),
        url: object_type.url.clone(),
    }
}

fn link_type_from_wire(
    index: usize,
    link_type: &WireLinkType,
    ids_by_name: &HashMap<&str, &str>,
) -> Relation {
    let id = format!("relation-{}", index);
    let resolve = |entity_name: &str, end: &str| match ids_by_name.get(entity_name) {
        Some(entity_id) => entity_id.to_string(),
        None => {
            debug!(
                "Relation {} ({}): no entity named '{}' for {}, leaving endpoint empty",
                link_type.name, id, entity_name, end
            );
            String::new()
        }
    };

    if Cardinality::parse_wire(&link_type.cardinality).is_none() {
        debug!(
            "Relation {} ({}): unknown cardinality '{}', defaulting to one-to-many",
            link_type.name, id, link_type.cardinality
        );
    }

    Relation {
        source: resolve(&link_type.source_type, "source"),
        target: resolve(&link_type.target_type, "target"),
        id,
        name: link_type.name.clone(),
        display_name: link_type.display_name.clone(),
        description: link_type.description.clone(),
        source_type: link_type.source_type.clone(),
        target_type: link_type.target_type.clone(),
        cardinality: Cardinality::from_wire(&link_type.cardinality),
        direction: Direction::from_str_lenient(&link_type.direction),
        properties: Some(
            link_type
                .properties
                .iter()
                .flatten()
                .map(attribute_from_wire)
                .collect(),
        ),
        property_mappings: link_type.property_mappings.clone().flatten(),
        metadata: None,
        data_source: link_type.data_source.clone(),
        url: link_type.url.clone(),
    }
}

/// Lift a boolean `constraints.unique` onto the attribute and drop it from the map.
/// A non-boolean entry stays in the map untouched.
fn attribute_from_wire(property: &WireProperty) -> Attribute {
    let mut constraints: BTreeMap<String, Value> =
        property.constraints.clone().unwrap_or_default();
    let unique = match constraints.get(UNIQUE_CONSTRAINT).map(Value::as_bool) {
        Some(Some(unique)) => {
            constraints.remove(UNIQUE_CONSTRAINT);
            Some(unique)
        }
        Some(None) => None,
        None => property.unique,
    };
    Attribute {
        name: property.name.clone(),
        display_name: property.display_name.clone(),
        data_type: property.data_type.clone(),
        required: property.required,
        unique,
        description: property.description.clone(),
        default_value: property.default_value.clone(),
        constraints: (!constraints.is_empty()).then_some(constraints),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
