use serde_json::{Map, Value};

use crate::error::Result;

/// One row of a metadata section: key/value string pairs in document order.
///
/// Lookups scan the row front to back, so when a pair is pushed twice the
/// first one wins. Absent keys read as empty strings through `safe_value`;
/// the generated source treats "" and "not set" the same way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRow {
    fields: Vec<(String, String)>,
}

impl FieldRow {
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like `value`, but an absent key reads as an empty string.
    pub fn safe_value(&self, key: &str) -> &str {
        self.value(key).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parsed component metadata document with sectioned row access.
///
/// The root object keeps document order, so every section walk below yields
/// rows in the order the metadata author wrote them. A key repeated inside
/// one object collapses to its last value during parsing.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    root: Map<String, Value>,
}

impl SchemaDocument {
    pub fn parse(text: &str) -> Result<Self> {
        let root: Map<String, Value> = serde_json::from_str(text)?;
        Ok(Self { root })
    }

    /// A top-level object section flattened into one row of scalar fields.
    /// A missing or non-object section reads as an empty row.
    pub fn scalar_section(&self, name: &str) -> FieldRow {
        let mut row = FieldRow::default();
        if let Some(Value::Object(section)) = self.root.get(name) {
            for (key, value) in section {
                row.push(key.clone(), stringify(value));
            }
        }
        row
    }

    /// A keyed section ("componentProperties", "properties") as ordered rows.
    /// Each row starts with a "name" pair holding the entry's key, followed by
    /// the entry's own fields.
    pub fn list_section(&self, name: &str) -> Vec<FieldRow> {
        let mut rows = Vec::new();
        if let Some(Value::Object(section)) = self.root.get(name) {
            for (key, value) in section {
                let mut row = FieldRow::default();
                row.push("name", key.clone());
                if let Some(entry) = value.as_object() {
                    for (field, field_value) in entry {
                        row.push(field.clone(), stringify(field_value));
                    }
                }
                rows.push(row);
            }
        }
        rows
    }
}

/// Render a metadata value as the flat string the emitters work with:
/// strings unquoted, booleans and numbers via `to_string`, null as "",
/// arrays (enum values) comma-joined.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(stringify)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}
