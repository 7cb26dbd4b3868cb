//! Inheritance cycle detection
//!
//! Builds a directed graph from each entity to its base type and reports every
//! entity that sits on a cycle of two or more entities. Direct
//! self-inheritance is left to the semantic validator.

use super::ValidationIssue;
use crate::models::OntologyModel;
use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;
use petgraph::{Directed, Graph};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Report entities whose `base_type` chain leads back to themselves
pub fn validate_inheritance_cycles(model: &OntologyModel) -> Vec<ValidationIssue> {
    let mut graph = Graph::<&str, (), Directed>::new();
    let mut node_map: HashMap<&str, NodeIndex> = HashMap::new();
    let mut base_of: HashMap<&str, &str> = HashMap::new();

    for entity in &model.entities {
        node_map
            .entry(entity.name.as_str())
            .or_insert_with(|| graph.add_node(entity.name.as_str()));
    }

    for entity in &model.entities {
        let Some(base_type) = entity.base_type.as_deref() else {
            continue;
        };
        if base_type == entity.name {
            continue;
        }
        if let (Some(&child), Some(&parent)) =
            (node_map.get(entity.name.as_str()), node_map.get(base_type))
        {
            graph.add_edge(child, parent, ());
            base_of.entry(entity.name.as_str()).or_insert(base_type);
        }
    }

    let cyclic: HashSet<&str> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .flatten()
        .map(|node| graph[node])
        .collect();

    let mut issues = Vec::new();
    for entity in &model.entities {
        if cyclic.contains(entity.name.as_str()) {
            issues.push(
                ValidationIssue::error(format!(
                    "Entity {} is part of an inheritance cycle: {}",
                    entity.name,
                    cycle_path(&entity.name, &base_of)
                ))
                .for_entity(&entity.id),
            );
        }
    }

    debug!("Inheritance cycle check produced {} issue(s)", issues.len());
    issues
}

/// Render the base type chain from `start` until it returns to `start`
fn cycle_path(start: &str, base_of: &HashMap<&str, &str>) -> String {
    let mut path = vec![start];
    let mut seen = HashSet::from([start]);
    let mut current = start;
    while let Some(&next) = base_of.get(current) {
        path.push(next);
        if !seen.insert(next) {
            break;
        }
        current = next;
    }
    path.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entity;

    fn entity(id: &str, name: &str, base: Option<&str>) -> Entity {
        Entity {
            id: id.to_string(),
            name: name.to_string(),
            base_type: base.map(str::to_string),
            ..Default::default()
        }
    }

    fn model(entities: Vec<Entity>) -> OntologyModel {
        OntologyModel {
            entities,
            ..Default::default()
        }
    }

    #[test]
    fn test_two_entity_cycle() {
        let m = model(vec![entity("a", "A", Some("B")), entity("b", "B", Some("A"))]);
        let issues = validate_inheritance_cycles(&m);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message, "Entity A is part of an inheritance cycle: A -> B -> A");
        assert_eq!(issues[1].entity_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_chain_into_cycle_reports_only_cycle_members() {
        let m = model(vec![
            entity("a", "A", Some("B")),
            entity("b", "B", Some("C")),
            entity("c", "C", Some("B")),
        ]);
        let issues = validate_inheritance_cycles(&m);
        let ids: Vec<_> = issues.iter().filter_map(|i| i.entity_id.as_deref()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_acyclic_and_self_inheritance_are_ignored() {
        let m = model(vec![
            entity("a", "A", None),
            entity("b", "B", Some("A")),
            entity("s", "S", Some("S")),
            entity("x", "X", Some("Missing")),
        ]);
        assert!(validate_inheritance_cycles(&m).is_empty());
    }
}
