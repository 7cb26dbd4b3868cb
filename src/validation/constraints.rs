//! Constraint map validation
//!
//! Attribute constraints are an opaque map, but the schema service understands
//! a few keys per type:
//! - `string`: `min_length`, `max_length` (non-negative, max >= min), `pattern` (a regex)
//! - numeric types: `min`, `max` (max >= min)
//!
//! Values of the wrong JSON type are ignored.

use super::ValidationIssue;
use super::input::is_numeric_data_type;
use crate::models::{Attribute, Entity, OntologyModel};
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Validate constraint maps of every entity attribute
pub fn validate_constraints(model: &OntologyModel) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for entity in &model.entities {
        for attr in &entity.attributes {
            if let Some(constraints) = &attr.constraints {
                check_attribute(entity, attr, constraints, &mut issues);
            }
        }
    }
    debug!("Constraint validation produced {} issue(s)", issues.len());
    issues
}

fn check_attribute(
    entity: &Entity,
    attr: &Attribute,
    constraints: &BTreeMap<String, Value>,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut report = |message: String| {
        issues.push(
            ValidationIssue::error(format!(
                "Attribute {} of entity {}: {}",
                attr.name, entity.name, message
            ))
            .for_entity(&entity.id)
            .for_attribute(&attr.name),
        );
    };

    if attr.data_type == "string" {
        let min_length = number(constraints, "min_length");
        let max_length = number(constraints, "max_length");
        if min_length.is_some_and(|min| min < 0.0) {
            report("min_length must be >= 0".to_string());
        }
        if max_length.is_some_and(|max| max < 0.0) {
            report("max_length must be >= 0".to_string());
        }
        if let (Some(min), Some(max)) = (min_length, max_length) {
            if max < min {
                report("max_length must be >= min_length".to_string());
            }
        }
        if let Some(Value::String(pattern)) = constraints.get("pattern") {
            if let Err(e) = Regex::new(pattern) {
                report(format!("invalid regex pattern: {}", e));
            }
        }
    } else if is_numeric_data_type(&attr.data_type) {
        if let (Some(min), Some(max)) = (number(constraints, "min"), number(constraints, "max")) {
            if max < min {
                report("max must be >= min".to_string());
            }
        }
    }
}

fn number(constraints: &BTreeMap<String, Value>, key: &str) -> Option<f64> {
    constraints.get(key).and_then(Value::as_f64)
}
