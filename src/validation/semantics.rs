//! Semantic validation
//!
//! Checks cross references: relation endpoints against entities (by id and by
//! name), self-loops, inheritance pointers, and isolated entities. Runs
//! regardless of structural issues.

use super::ValidationIssue;
use crate::models::{Entity, OntologyModel, Relation};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Validate references between entities and relations
pub fn validate_semantics(model: &OntologyModel) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let entity_names: HashSet<&str> = model.entities.iter().map(|e| e.name.as_str()).collect();
    let mut entities_by_id: HashMap<&str, &Entity> = HashMap::new();
    for entity in &model.entities {
        entities_by_id.entry(entity.id.as_str()).or_insert(entity);
    }

    for relation in &model.relations {
        check_relation(relation, &entity_names, &entities_by_id, &mut issues);
    }

    for entity in &model.entities {
        let Some(base_type) = entity.base_type.as_deref().filter(|b| !b.is_empty()) else {
            continue;
        };
        if !entity_names.contains(base_type) {
            issues.push(
                ValidationIssue::error(format!(
                    "Base type of entity {} does not exist: {}",
                    entity.name, base_type
                ))
                .for_entity(&entity.id),
            );
        } else if base_type == entity.name {
            issues.push(
                ValidationIssue::error(format!(
                    "Entity {} cannot use itself as its base type",
                    entity.name
                ))
                .for_entity(&entity.id),
            );
        }
    }

    if model.entities.len() > 1 {
        let connected: HashSet<&str> = model
            .relations
            .iter()
            .flat_map(|r| [r.source_type.as_str(), r.target_type.as_str()])
            .collect();
        for entity in &model.entities {
            if !connected.contains(entity.name.as_str()) {
                issues.push(
                    ValidationIssue::warning(format!(
                        "Entity {} is isolated (it takes part in no relation)",
                        entity.name
                    ))
                    .for_entity(&entity.id),
                );
            }
        }
    }

    debug!("Semantic validation produced {} issue(s)", issues.len());
    issues
}

fn check_relation(
    relation: &Relation,
    entity_names: &HashSet<&str>,
    entities_by_id: &HashMap<&str, &Entity>,
    issues: &mut Vec<ValidationIssue>,
) {
    let relation_error =
        |message: String| ValidationIssue::error(message).for_relation(&relation.id);

    if !entity_names.contains(relation.source_type.as_str()) {
        issues.push(relation_error(format!(
            "Source entity type of relation {} does not exist: {}",
            relation.name, relation.source_type
        )));
    }
    if !entity_names.contains(relation.target_type.as_str()) {
        issues.push(relation_error(format!(
            "Target entity type of relation {} does not exist: {}",
            relation.name, relation.target_type
        )));
    }

    if relation.is_self_loop() {
        issues.push(relation_error(format!(
            "Relation {} cannot be a self-loop (source and target type are the same)",
            relation.name
        )));
    }

    match entities_by_id.get(relation.source.as_str()) {
        None => issues.push(relation_error(format!(
            "Source entity id of relation {} not found: {}",
            relation.name, relation.source
        ))),
        Some(source) if source.name != relation.source_type => issues.push(relation_error(format!(
            "Source entity id of relation {} does not match its source type {}",
            relation.name, relation.source_type
        ))),
        Some(_) => {}
    }

    match entities_by_id.get(relation.target.as_str()) {
        None => issues.push(relation_error(format!(
            "Target entity id of relation {} not found: {}",
            relation.name, relation.target
        ))),
        Some(target) if target.name != relation.target_type => issues.push(relation_error(format!(
            "Target entity id of relation {} does not match its target type {}",
            relation.name, relation.target_type
        ))),
        Some(_) => {}
    }
}
