//! Enums shared by the ontology model and the wire format

use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplicity of a relation between its source and target entity populations.
///
/// The model spells cardinalities as `1-1`, `1-N`, `N-1`, `N-N`; the wire
/// document spells them `one-to-one`, `one-to-many`, `many-to-one`,
/// `many-to-many`. Unrecognized strings fall back to [`Cardinality::OneToMany`]
/// in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cardinality {
    /// `1-1`
    OneToOne,
    /// `1-N`
    #[default]
    OneToMany,
    /// `N-1`
    ManyToOne,
    /// `N-N`
    ManyToMany,
}

impl Cardinality {
    pub const ALL: [Cardinality; 4] = [
        Cardinality::OneToOne,
        Cardinality::OneToMany,
        Cardinality::ManyToOne,
        Cardinality::ManyToMany,
    ];

    /// Model spelling (`1-N`, ...)
    pub fn as_model_str(&self) -> &'static str {
        match self {
            Cardinality::OneToOne => "1-1",
            Cardinality::OneToMany => "1-N",
            Cardinality::ManyToOne => "N-1",
            Cardinality::ManyToMany => "N-N",
        }
    }

    /// Wire spelling (`one-to-many`, ...)
    pub fn to_wire(&self) -> &'static str {
        match self {
            Cardinality::OneToOne => "one-to-one",
            Cardinality::OneToMany => "one-to-many",
            Cardinality::ManyToOne => "many-to-one",
            Cardinality::ManyToMany => "many-to-many",
        }
    }

    /// Parse a model spelling, returning `None` for anything outside the four values.
    pub fn parse_model(value: &str) -> Option<Self> {
        match value {
            "1-1" => Some(Cardinality::OneToOne),
            "1-N" => Some(Cardinality::OneToMany),
            "N-1" => Some(Cardinality::ManyToOne),
            "N-N" => Some(Cardinality::ManyToMany),
            _ => None,
        }
    }

    /// Parse a wire spelling, returning `None` for anything outside the four values.
    pub fn parse_wire(value: &str) -> Option<Self> {
        match value {
            "one-to-one" => Some(Cardinality::OneToOne),
            "one-to-many" => Some(Cardinality::OneToMany),
            "many-to-one" => Some(Cardinality::ManyToOne),
            "many-to-many" => Some(Cardinality::ManyToMany),
            _ => None,
        }
    }

    /// Lenient model-side parse: unknown values become `1-N`.
    pub fn from_model_str(value: &str) -> Self {
        Self::parse_model(value).unwrap_or_default()
    }

    /// Lenient wire-side parse: unknown values become `1-N`.
    pub fn from_wire(value: &str) -> Self {
        Self::parse_wire(value).unwrap_or_default()
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_model_str())
    }
}

impl From<String> for Cardinality {
    fn from(value: String) -> Self {
        Cardinality::from_model_str(&value)
    }
}

impl From<Cardinality> for String {
    fn from(value: Cardinality) -> Self {
        value.as_model_str().to_string()
    }
}

/// Whether a relation is traversed one way or both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    #[default]
    Directed,
    Undirected,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Directed => "directed",
            Direction::Undirected => "undirected",
        }
    }

    /// Anything other than `undirected` is treated as `directed`.
    pub fn from_str_lenient(value: &str) -> Self {
        if value == "undirected" {
            Direction::Undirected
        } else {
            Direction::Directed
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Direction {
    fn from(value: String) -> Self {
        Direction::from_str_lenient(&value)
    }
}

impl From<Direction> for String {
    fn from(value: Direction) -> Self {
        value.as_str().to_string()
    }
}
