//! Validation functionality
//!
//! Provides validation logic for:
//! - Structural validation (identifiers, uniqueness, attribute types, required fields)
//! - Semantic validation (cross references between entities and relations)
//! - Constraint map validation (opt-in)
//! - Inheritance cycle detection (opt-in)
//!
//! Validators never fail. Each returns a list of [`ValidationIssue`]s; an
//! `Error` level issue blocks save/export, a `Warning` never does.

pub mod config;
pub mod constraints;
pub mod inheritance;
pub mod input;
pub mod semantics;
pub mod structure;

use crate::models::OntologyModel;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub use config::{ValidationConfig, ValidationConfigBuilder};
pub use constraints::validate_constraints;
pub use inheritance::validate_inheritance_cycles;
pub use input::{is_valid_data_type, is_valid_identifier};
pub use semantics::validate_semantics;
pub use structure::validate_structure;

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    Error,
    Warning,
}

/// A single diagnostic produced by a validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub level: ValidationLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
}

impl ValidationIssue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Error,
            message: message.into(),
            entity_id: None,
            relation_id: None,
            attribute_name: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Warning,
            ..Self::error(message)
        }
    }

    pub fn for_entity(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    pub fn for_relation(mut self, relation_id: impl Into<String>) -> Self {
        self.relation_id = Some(relation_id.into());
        self
    }

    pub fn for_attribute(mut self, attribute_name: impl Into<String>) -> Self {
        self.attribute_name = Some(attribute_name.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == ValidationLevel::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            ValidationLevel::Error => "error",
            ValidationLevel::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

/// True when any issue is blocking
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(ValidationIssue::is_error)
}

/// Structural issues followed by semantic issues, without deduplication
pub fn validate_model(model: &OntologyModel) -> Vec<ValidationIssue> {
    let mut issues = validate_structure(model);
    issues.extend(validate_semantics(model));
    debug!(
        "Validated model '{}': {} issue(s), {} blocking",
        model.name,
        issues.len(),
        issues.iter().filter(|i| i.is_error()).count()
    );
    issues
}

/// [`validate_model`] followed by the opt-in checks enabled in `config`
pub fn validate_model_with(
    model: &OntologyModel,
    config: &ValidationConfig,
) -> Vec<ValidationIssue> {
    let mut issues = validate_model(model);
    if config.check_constraints {
        issues.extend(validate_constraints(model));
    }
    if config.detect_inheritance_cycles {
        issues.extend(validate_inheritance_cycles(model));
    }
    issues
}
