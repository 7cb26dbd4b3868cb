//! Identifier and data type rules.
//!
//! Entity, attribute and relation names share one identifier rule: a Unicode
//! letter followed by any mix of Unicode letters, digits and underscores.
//! Attribute types come from a closed set, optionally wrapped in any number of
//! `array<...>` layers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Primitive attribute types. `integer` is an alias of `int`.
pub const PRIMITIVE_DATA_TYPES: &[&str] = &[
    "string",
    "int",
    "long",
    "float",
    "double",
    "bigdecimal",
    "bool",
    "date",
    "datetime",
    "json",
    "array",
    "integer",
];

/// Integer and floating point types that accept `min`/`max` constraints
pub const NUMERIC_DATA_TYPES: &[&str] = &[
    "int",
    "integer",
    "long",
    "float",
    "double",
    "bigdecimal",
];

static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}[\p{L}\p{N}_]*$").unwrap());

const ARRAY_PREFIX: &str = "array<";
const ARRAY_SUFFIX: &str = ">";

/// Check a name against the identifier rule.
///
/// # Examples
///
/// ```
/// use ontology_schema_sdk::validation::input::is_valid_identifier;
///
/// assert!(is_valid_identifier("Person"));
/// assert!(is_valid_identifier("客户_2"));
/// assert!(!is_valid_identifier("2fast"));
/// assert!(!is_valid_identifier("_hidden"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }
    IDENTIFIER_REGEX.is_match(name)
}

/// Check an attribute type.
///
/// Array types nest to any depth; each layer is unwrapped iteratively.
///
/// # Examples
///
/// ```
/// use ontology_schema_sdk::validation::input::is_valid_data_type;
///
/// assert!(is_valid_data_type("integer"));
/// assert!(is_valid_data_type("array<array<int>>"));
/// assert!(!is_valid_data_type("array<bogus>"));
/// assert!(!is_valid_data_type("array<>"));
/// ```
pub fn is_valid_data_type(data_type: &str) -> bool {
    let mut current = data_type;
    while let Some(inner) = unwrap_array(current) {
        current = inner;
    }
    PRIMITIVE_DATA_TYPES.contains(&current)
}

/// Innermost element type of a (possibly nested) array type, or the type itself
pub fn element_type(data_type: &str) -> &str {
    let mut current = data_type;
    while let Some(inner) = unwrap_array(current) {
        current = inner;
    }
    current
}

pub fn is_numeric_data_type(data_type: &str) -> bool {
    NUMERIC_DATA_TYPES.contains(&data_type)
}

fn unwrap_array(data_type: &str) -> Option<&str> {
    if data_type.len() > ARRAY_PREFIX.len()
        && data_type.starts_with(ARRAY_PREFIX)
        && data_type.ends_with(ARRAY_SUFFIX)
    {
        Some(&data_type[ARRAY_PREFIX.len()..data_type.len() - ARRAY_SUFFIX.len()])
    } else {
        None
    }
}
