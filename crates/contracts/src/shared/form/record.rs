use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::domain::common::LookupId;
use crate::shared::metadata::{EntitySchema, FieldKind};

/// Flat field-name -> value record as the inputs see it.
///
/// Values are kept as strings; the schema decides the JSON shape on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRecord {
    values: BTreeMap<String, String>,
}

impl FormRecord {
    /// Fresh create record: every key of the schema at its default
    pub fn empty(schema: &EntitySchema) -> Self {
        let mut values = BTreeMap::new();
        for field in schema.fields {
            values.insert(field.name.to_string(), field.default.to_string());
            if let Some(name_field) = field.reference_name_field() {
                values.insert(name_field.to_string(), String::new());
            }
        }
        Self { values }
    }

    /// Record fetched from the API. Keys the schema knows are taken from
    /// `row`; absent or null values become empty strings.
    pub fn from_json(schema: &EntitySchema, row: &Value) -> Self {
        let mut values = BTreeMap::new();
        for key in schema.record_keys() {
            let value = row.get(key).map(scalar_to_string).unwrap_or_default();
            values.insert(key.to_string(), value);
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub(crate) fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// JSON body for create/update
    pub fn to_json(&self, schema: &EntitySchema) -> Value {
        let mut body = Map::new();
        for field in schema.fields {
            let raw = self.get(field.name);
            let value = match field.kind {
                FieldKind::Number => number_or_null(raw),
                FieldKind::Reference { name_field, .. } => {
                    body.insert(
                        name_field.to_string(),
                        Value::from(self.get(name_field).to_string()),
                    );
                    LookupId::parse(raw)
                        .map(|id| id.to_json())
                        .unwrap_or(Value::Null)
                }
                FieldKind::Text
                | FieldKind::LongText
                | FieldKind::Date
                | FieldKind::Color
                | FieldKind::Derived { .. } => Value::from(raw.to_string()),
            };
            body.insert(field.name.to_string(), value);
        }
        Value::Object(body)
    }

    /// Scalar parts of a multipart body, same keys as the JSON body
    pub fn to_form_fields(&self, schema: &EntitySchema) -> Vec<(String, String)> {
        schema
            .record_keys()
            .into_iter()
            .map(|key| (key.to_string(), self.get(key).to_string()))
            .collect()
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        other => other.to_string(),
    }
}

fn number_or_null(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
