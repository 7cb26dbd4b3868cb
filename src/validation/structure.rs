//! Structural validation
//!
//! Checks each entity and relation on its own, including the attributes of
//! both: required scalar fields, identifier syntax, uniqueness of ids and
//! names, attribute types.
//! Every check runs; nothing short-circuits.

use super::ValidationIssue;
use super::input::{is_valid_data_type, is_valid_identifier};
use crate::models::{Attribute, Entity, OntologyModel, Relation};
use std::collections::HashSet;
use tracing::debug;

/// Validate the structure of every entity and relation in the model
pub fn validate_structure(model: &OntologyModel) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if is_blank(&model.version) {
        issues.push(ValidationIssue::error("Model version cannot be empty"));
    }
    if is_blank(&model.namespace) {
        issues.push(ValidationIssue::error("Model namespace cannot be empty"));
    }

    let mut entity_ids = HashSet::new();
    let mut entity_names = HashSet::new();
    for (index, entity) in model.entities.iter().enumerate() {
        check_entity(entity, index, &mut entity_ids, &mut entity_names, &mut issues);
    }

    let mut relation_ids = HashSet::new();
    let mut relation_keys = HashSet::new();
    for (index, relation) in model.relations.iter().enumerate() {
        check_relation(relation, index, &mut relation_ids, &mut relation_keys, &mut issues);
    }

    debug!("Structural validation produced {} issue(s)", issues.len());
    issues
}

fn check_entity<'a>(
    entity: &'a Entity,
    index: usize,
    ids: &mut HashSet<&'a str>,
    names: &mut HashSet<&'a str>,
    issues: &mut Vec<ValidationIssue>,
) {
    if is_blank(&entity.id) {
        issues.push(ValidationIssue::error(format!(
            "Entity [{}] is missing an id",
            index
        )));
    } else if !ids.insert(&entity.id) {
        issues.push(
            ValidationIssue::error(format!("Duplicate entity id: {}", entity.id))
                .for_entity(&entity.id),
        );
    }

    if is_blank(&entity.name) {
        issues.push(
            ValidationIssue::error(format!("Entity [{}] name cannot be empty", index))
                .for_entity(&entity.id),
        );
    } else if !is_valid_identifier(&entity.name) {
        issues.push(
            ValidationIssue::error(format!(
                "Entity [{}] has an invalid name: {}",
                index, entity.name
            ))
            .for_entity(&entity.id),
        );
    } else if !names.insert(&entity.name) {
        issues.push(
            ValidationIssue::error(format!("Duplicate entity name: {}", entity.name))
                .for_entity(&entity.id),
        );
    }

    check_attributes(
        &entity.attributes,
        &format!("entity {}", entity.name),
        |issue| issue.for_entity(&entity.id),
        issues,
    );

    if !entity.has_primary_key() {
        issues.push(
            ValidationIssue::warning(format!(
                "Entity {} has no primary key (an attribute that is both required and unique)",
                entity.name
            ))
            .for_entity(&entity.id),
        );
    }
}

fn check_relation<'a>(
    relation: &'a Relation,
    index: usize,
    ids: &mut HashSet<&'a str>,
    keys: &mut HashSet<(&'a str, &'a str, &'a str)>,
    issues: &mut Vec<ValidationIssue>,
) {
    if is_blank(&relation.id) {
        issues.push(ValidationIssue::error(format!(
            "Relation [{}] is missing an id",
            index
        )));
    } else if !ids.insert(&relation.id) {
        issues.push(
            ValidationIssue::error(format!("Duplicate relation id: {}", relation.id))
                .for_relation(&relation.id),
        );
    }

    if is_blank(&relation.name) {
        issues.push(
            ValidationIssue::error(format!("Relation [{}] name cannot be empty", index))
                .for_relation(&relation.id),
        );
    } else if !is_valid_identifier(&relation.name) {
        issues.push(
            ValidationIssue::error(format!(
                "Relation [{}] has an invalid name: {}",
                index, relation.name
            ))
            .for_relation(&relation.id),
        );
    }

    if !keys.insert(relation.triple_key()) {
        issues.push(
            ValidationIssue::error(format!(
                "Duplicate relation: {} ({} -> {})",
                relation.name, relation.source_type, relation.target_type
            ))
            .for_relation(&relation.id),
        );
    }

    if relation.source.is_empty() || relation.target.is_empty() {
        issues.push(
            ValidationIssue::error(format!(
                "Relation {} must reference both a source and a target entity id",
                relation.name
            ))
            .for_relation(&relation.id),
        );
    }

    if relation.source_type.is_empty() || relation.target_type.is_empty() {
        issues.push(
            ValidationIssue::error(format!(
                "Relation {} must name both a source and a target entity type",
                relation.name
            ))
            .for_relation(&relation.id),
        );
    }

    if let Some(properties) = &relation.properties {
        check_attributes(
            properties,
            &format!("relation {}", relation.name),
            |issue| issue.for_relation(&relation.id),
            issues,
        );
    }
}

/// Name syntax, name uniqueness and data type of each attribute of one owner
fn check_attributes(
    attributes: &[Attribute],
    owner: &str,
    scope: impl Fn(ValidationIssue) -> ValidationIssue,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut names = HashSet::new();
    for (index, attr) in attributes.iter().enumerate() {
        if is_blank(&attr.name) {
            issues.push(scope(ValidationIssue::error(format!(
                "Attribute [{}] of {} has an empty name",
                index, owner
            ))));
        } else if !is_valid_identifier(&attr.name) {
            issues.push(
                scope(ValidationIssue::error(format!(
                    "Attribute {} of {} has an invalid name",
                    attr.name, owner
                )))
                .for_attribute(&attr.name),
            );
        } else if !names.insert(attr.name.as_str()) {
            issues.push(
                scope(ValidationIssue::error(format!(
                    "Duplicate attribute name in {}: {}",
                    owner, attr.name
                )))
                .for_attribute(&attr.name),
            );
        }

        if !is_valid_data_type(&attr.data_type) {
            issues.push(
                scope(ValidationIssue::error(format!(
                    "Attribute {} of {} has an invalid data type: {}",
                    attr.name, owner, attr.data_type
                )))
                .for_attribute(&attr.name),
            );
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
