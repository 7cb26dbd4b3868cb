//! Models module for the SDK
//!
//! Defines the ontology schema model edited by frontends: entities, their
//! attributes, and relations between entities.

pub mod attribute;
pub mod entity;
pub mod enums;
pub mod ontology;
pub mod relation;

pub use attribute::Attribute;
pub use entity::{Entity, Position};
pub use enums::*;
pub use ontology::{DEFAULT_NAMESPACE, DEFAULT_VERSION, OntologyModel};
pub use relation::Relation;
