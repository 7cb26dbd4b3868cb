//! Ontology Schema SDK - Shared library for ontology schema operations across frontends
//!
//! Provides unified interfaces for:
//! - The ontology schema model (entities, attributes, relations)
//! - Structural and semantic validation
//! - Conversion to and from the schema service wire document
//!
//! A typical editor cycle: mutate an [`OntologyModel`], run
//! [`validate_model`] on it, and only when [`has_errors`] is false call
//! [`to_wire_format`] to produce the document to submit.

pub mod convert;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use convert::{
    ConversionError, WireDocument, WireLinkType, WireObjectType, WireProperty, from_wire_format,
    from_wire_value, to_wire_format,
};
pub use validation::{
    ValidationConfig, ValidationIssue, ValidationLevel, has_errors, validate_model,
    validate_model_with, validate_semantics, validate_structure,
};

// Re-export models
pub use models::enums::*;
pub use models::{Attribute, Entity, OntologyModel, Position, Relation};
