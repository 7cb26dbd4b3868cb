//! Wire document exchanged with the schema service
//!
//! Field presence rules on output:
//! - `display_name` on properties is omitted when absent or empty
//! - `constraints` is `null` or a non-empty object, never `{}`
//! - `property_mappings` is omitted, `null`, or a non-empty object
//! - other optional fields are emitted as `null` when absent
//!
//! Input is read as an untyped JSON tree and narrowed field by field. A field
//! with an unexpected JSON type is treated as absent, so narrowing never fails.

use super::error::ConversionError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Top-level wire document
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct WireDocument {
    /// Accepted on load, never emitted by `to_wire_format`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub version: String,
    pub namespace: String,
    pub object_types: Vec<WireObjectType>,
    pub link_types: Vec<WireLinkType>,
    pub data_sources: Vec<Value>,
    /// Accepted on load, never emitted by `to_wire_format`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

/// Entity on the wire
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct WireObjectType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub base_type: Option<String>,
    pub properties: Vec<WireProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Attribute on the wire, for both object types and link types
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct WireProperty {
    pub name: String,
    pub data_type: String,
    pub required: bool,
    pub description: Option<String>,
    pub default_value: Option<Value>,
    pub constraints: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Legacy top-level flag; `constraints.unique` wins when both are present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
}

/// Relation on the wire
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct WireLinkType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub source_type: String,
    pub target_type: String,
    pub cardinality: String,
    pub direction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<WireProperty>>,
    /// Outer `None`: field omitted. `Some(None)`: explicit `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_mappings: Option<Option<BTreeMap<String, String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl WireDocument {
    /// Narrow an untyped JSON tree. A non-object root yields an empty document.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            name: string(obj, "name"),
            version: string(obj, "version").unwrap_or_default(),
            namespace: string(obj, "namespace").unwrap_or_default(),
            object_types: array(obj, "object_types")
                .map(|items| items.iter().map(WireObjectType::from_value).collect())
                .unwrap_or_default(),
            link_types: array(obj, "link_types")
                .map(|items| items.iter().map(WireLinkType::from_value).collect())
                .unwrap_or_default(),
            data_sources: array(obj, "data_sources").cloned().unwrap_or_default(),
            metadata: object(obj, "metadata"),
        }
    }

    /// Parse a JSON wire document
    pub fn from_json_str(content: &str) -> Result<Self, ConversionError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_root(value)
    }

    /// Parse a YAML wire document
    pub fn from_yaml_str(content: &str) -> Result<Self, ConversionError> {
        let value: Value = serde_yaml::from_str(content)?;
        Self::from_root(value)
    }

    pub fn to_json_string(&self) -> Result<String, ConversionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConversionError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn from_root(value: Value) -> Result<Self, ConversionError> {
        if !value.is_object() {
            return Err(ConversionError::InvalidStructure(json_type_name(&value).to_string()));
        }
        Ok(Self::from_value(&value))
    }
}

impl<'de> Deserialize<'de> for WireDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl WireObjectType {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            name: string(obj, "name").unwrap_or_default(),
            display_name: string(obj, "display_name"),
            description: string(obj, "description"),
            base_type: string(obj, "base_type"),
            properties: properties(obj).unwrap_or_default(),
            data_source: present(obj, "data_source"),
            url: string(obj, "url"),
        }
    }
}

impl WireProperty {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            name: string(obj, "name").unwrap_or_default(),
            data_type: string(obj, "data_type").unwrap_or_default(),
            required: obj.get("required").and_then(Value::as_bool).unwrap_or(false),
            description: string(obj, "description"),
            default_value: present(obj, "default_value"),
            constraints: object(obj, "constraints"),
            display_name: string(obj, "display_name"),
            unique: obj.get("unique").and_then(Value::as_bool),
        }
    }
}

impl WireLinkType {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            name: string(obj, "name").unwrap_or_default(),
            display_name: string(obj, "display_name"),
            description: string(obj, "description"),
            source_type: string(obj, "source_type").unwrap_or_default(),
            target_type: string(obj, "target_type").unwrap_or_default(),
            cardinality: string(obj, "cardinality").unwrap_or_default(),
            direction: string(obj, "direction").unwrap_or_default(),
            properties: properties(obj),
            property_mappings: property_mappings(obj),
            data_source: present(obj, "data_source"),
            url: string(obj, "url"),
        }
    }
}

fn string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn array<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Vec<Value>> {
    obj.get(key).and_then(Value::as_array)
}

fn object(obj: &Map<String, Value>, key: &str) -> Option<BTreeMap<String, Value>> {
    obj.get(key)
        .and_then(Value::as_object)
        .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
}

/// Any value other than `null`
fn present(obj: &Map<String, Value>, key: &str) -> Option<Value> {
    obj.get(key).filter(|v| !v.is_null()).cloned()
}

fn properties(obj: &Map<String, Value>) -> Option<Vec<WireProperty>> {
    array(obj, "properties").map(|items| items.iter().map(WireProperty::from_value).collect())
}

/// Non-string mapping targets are dropped
fn property_mappings(obj: &Map<String, Value>) -> Option<Option<BTreeMap<String, String>>> {
    match obj.get("property_mappings") {
        None => None,
        Some(Value::Object(map)) => Some(Some(
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|target| (k.clone(), target.to_string())))
                .collect(),
        )),
        Some(_) => Some(None),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
