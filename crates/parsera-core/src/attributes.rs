//! Attribute schema parsing
//!
//! Users describe the fields they want extracted either as a list of
//! `{fieldName, fieldType, fieldDescription}` rows or as one JSON object keyed
//! by field name. Both shapes normalize into an [`AttributeMap`].

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::str::FromStr;

use crate::error::{ParseraError, ParseraResult};
use crate::types::json_kind;

/// One named field the API should extract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Declared data type (`string`, `number`, `list`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Natural-language extraction hint, possibly empty
    #[serde(default)]
    pub description: String,
}

impl AttributeDefinition {
    /// Create a definition
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
        }
    }
}

/// Ordered mapping from field name to definition
///
/// Re-inserting a name replaces its definition but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, AttributeDefinition)>,
}

impl AttributeMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a definition, returning the previous one
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        definition: AttributeDefinition,
    ) -> Option<AttributeDefinition> {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, definition)),
            None => {
                self.entries.push((name, definition));
                None
            }
        }
    }

    /// Look up a definition by field name
    pub fn get(&self, name: &str) -> Option<&AttributeDefinition> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, definition)| definition)
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no attributes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, definition)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeDefinition)> {
        self.entries
            .iter()
            .map(|(name, definition)| (name.as_str(), definition))
    }

    /// Field names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Re-express the map as fixed-field rows
    pub fn to_field_rows(&self) -> Vec<Value> {
        self.iter()
            .map(|(name, definition)| {
                json!({
                    "fieldName": name,
                    "fieldType": definition.kind,
                    "fieldDescription": definition.description,
                })
            })
            .collect()
    }

    /// Re-express the map as the JSON object accepted in `json` mode
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        for (name, definition) in self.iter() {
            object.insert(
                name.to_string(),
                json!({ "type": definition.kind, "description": definition.description }),
            );
        }
        Value::Object(object)
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, definition) in &self.entries {
            map.serialize_entry(name, definition)?;
        }
        map.end()
    }
}

/// How the user chose to describe attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeInputMode {
    /// One row per field
    #[default]
    Fields,
    /// A single JSON object
    Json,
}

impl AttributeInputMode {
    /// Parameter value for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeInputMode::Fields => "fields",
            AttributeInputMode::Json => "json",
        }
    }
}

impl FromStr for AttributeInputMode {
    type Err = ParseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fields" => Ok(AttributeInputMode::Fields),
            "json" => Ok(AttributeInputMode::Json),
            other => Err(ParseraError::Internal(format!(
                "Unhandled attributes input mode '{}'.",
                other
            ))),
        }
    }
}

/// User-supplied attribute schema in one of its two input shapes
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeSchema {
    /// Rows of the fixed-field collection
    Fields(Vec<Value>),
    /// JSON text or an already-structured object
    Json(Value),
}

impl AttributeSchema {
    /// Build the `fields` variant from the raw `{ "fieldValues": [...] }` collection.
    ///
    /// A missing collection or missing `fieldValues` yields no rows.
    pub fn from_fields_parameter(collection: Option<&Value>) -> ParseraResult<Self> {
        let rows = match collection.and_then(|c| c.get("fieldValues")) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(rows)) => rows.clone(),
            Some(other) => {
                return Err(ParseraError::validation(format!(
                    "Attribute definitions must be a list. Received: {}.",
                    json_kind(other)
                )))
            }
        };
        Ok(AttributeSchema::Fields(rows))
    }

    /// The input mode this schema was given in
    pub fn mode(&self) -> AttributeInputMode {
        match self {
            AttributeSchema::Fields(_) => AttributeInputMode::Fields,
            AttributeSchema::Json(_) => AttributeInputMode::Json,
        }
    }

    /// Normalize into an attribute map
    pub fn parse(&self) -> ParseraResult<AttributeMap> {
        match self {
            AttributeSchema::Fields(rows) => parse_fields(rows),
            AttributeSchema::Json(input) => parse_json(input),
        }
    }
}

/// Parse fixed-field rows into an attribute map
pub fn parse_fields(rows: &[Value]) -> ParseraResult<AttributeMap> {
    let mut attributes = AttributeMap::new();

    for (index, row) in rows.iter().enumerate() {
        let malformed = || {
            ParseraError::validation(format!(
                "Attribute at index {} is malformed or missing required properties (fieldName, fieldType). fieldDescription is optional.",
                index
            ))
        };

        let row = row.as_object().ok_or_else(malformed)?;
        let raw_name = row.get("fieldName").and_then(Value::as_str).ok_or_else(malformed)?;
        let field_type = row.get("fieldType").and_then(Value::as_str).ok_or_else(malformed)?;
        let description = match row.get("fieldDescription") {
            None => "",
            Some(Value::String(description)) => description.as_str(),
            Some(_) => return Err(malformed()),
        };

        let name = raw_name.trim();
        if name.is_empty() {
            return Err(ParseraError::validation(format!(
                "Empty Field Name at index {}.",
                index
            )));
        }
        // The type comes from a fixed option list, so only the raw value is checked
        if field_type.is_empty() {
            return Err(ParseraError::validation(format!(
                "Attribute Type for \"{}\" (at index {}) cannot be empty.",
                name, index
            )));
        }

        attributes.insert(name, AttributeDefinition::new(field_type, description.trim()));
    }

    Ok(attributes)
}

/// Parse JSON-mode input into an attribute map
pub fn parse_json(input: &Value) -> ParseraResult<AttributeMap> {
    let parsed = match input {
        Value::Null => return Ok(AttributeMap::new()),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(AttributeMap::new());
            }
            serde_json::from_str::<Value>(text).map_err(|e| {
                ParseraError::validation(format!(
                    "Attributes field contains invalid JSON: {}",
                    e
                ))
            })?
        }
        Value::Array(_) => {
            return Err(ParseraError::validation(
                "Attributes field must be a JSON object, not an array.",
            ))
        }
        Value::Object(_) => input.clone(),
        other => {
            return Err(ParseraError::validation(format!(
                "Attributes field is an unexpected type: {}.",
                json_kind(other)
            )))
        }
    };

    let object = match parsed {
        Value::Object(object) => object,
        Value::Array(_) => {
            return Err(ParseraError::validation(
                "Attributes must resolve to a JSON object. Received: an array.",
            ))
        }
        other => {
            return Err(ParseraError::validation(format!(
                "Attributes must resolve to a JSON object. Received: {}.",
                json_kind(&other)
            )))
        }
    };

    let mut attributes = AttributeMap::new();
    for (key, value) in &object {
        let name = key.trim();
        if name.is_empty() {
            return Err(ParseraError::validation(
                "Attribute name (JSON key) cannot be empty.",
            ));
        }

        let details = value.as_object().ok_or_else(|| {
            ParseraError::validation(format!(
                "Value for attribute \"{}\" in JSON must be an object.",
                name
            ))
        })?;

        let description = match details.get("description") {
            None => "",
            Some(Value::String(description)) => description.trim(),
            Some(other) => {
                return Err(ParseraError::validation(format!(
                    "Attribute \"{}\" in JSON has an invalid \"description\" type. It must be a string. Found: {}",
                    name,
                    json_kind(other)
                )))
            }
        };

        let kind = details
            .get("type")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|kind| !kind.is_empty())
            .ok_or_else(|| {
                ParseraError::validation(format!(
                    "Attribute \"{}\" in JSON is missing a valid \"type\".",
                    name
                ))
            })?;

        attributes.insert(name, AttributeDefinition::new(kind, description));
    }

    Ok(attributes)
}
