use contracts::domain::registry;
use contracts::shared::metadata::{EntitySchema, FieldKind};
use serde_json::Value;

use crate::shared::config::app_config;
use crate::shared::date_utils::{format_date, format_datetime};

const TIMESTAMP_KEYS: &[&str] = &["created_at", "updated_at", "CreatedAt", "UpdatedAt"];

pub fn raw_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => if *b { "1" } else { "0" }.to_string(),
        Some(other) => other.to_string(),
    }
}

/// What a table cell or detail row shows for `key` of `row`
pub fn cell_text(schema: &EntitySchema, row: &Value, key: &str) -> String {
    let raw = raw_text(row.get(key));
    if key == "Approved" && registry::is_submission(schema.key) {
        return app_config().approval().label(&raw).to_string();
    }
    if TIMESTAMP_KEYS.contains(&key) && !raw.is_empty() {
        return format_datetime(&raw);
    }
    match schema.field(key).map(|f| f.kind) {
        Some(FieldKind::Date) if !raw.is_empty() => format_date(&raw),
        _ => raw,
    }
}

/// (key, label) of the fields a detail page lists; references show their name
pub fn detail_rows(schema: &'static EntitySchema) -> Vec<(&'static str, &'static str)> {
    schema
        .fields
        .iter()
        .map(|field| match field.kind {
            FieldKind::Reference { name_field, .. } => (name_field, field.label),
            _ => (field.name, field.label),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{a007_book, a010_event, a011_kalam_submission, a013_mazmoon_submission};
    use serde_json::json;

    #[test]
    fn test_raw_text_of_scalars() {
        assert_eq!(raw_text(Some(&json!(3))), "3");
        assert_eq!(raw_text(Some(&json!("x"))), "x");
        assert_eq!(raw_text(Some(&Value::Null)), "");
        assert_eq!(raw_text(None), "");
    }

    #[test]
    fn test_date_fields_are_formatted() {
        let row = json!({"Title": "Mehfil", "EventDate": "2024-03-15T00:00:00.000Z"});
        let schema = &a010_event::schema::SCHEMA;
        assert_eq!(cell_text(schema, &row, "EventDate"), "15.03.2024");
        assert_eq!(cell_text(schema, &row, "Title"), "Mehfil");
    }

    #[test]
    fn test_submission_approval_uses_label() {
        for schema in [
            &a011_kalam_submission::schema::SCHEMA,
            &a013_mazmoon_submission::schema::SCHEMA,
        ] {
            assert_eq!(cell_text(schema, &json!({"Approved": 0}), "Approved"), "Yes");
            assert_eq!(cell_text(schema, &json!({"Approved": 1}), "Approved"), "No");
        }
        let row = json!({"Approved": 0});
        assert_eq!(cell_text(&a007_book::schema::SCHEMA, &row, "Approved"), "0");
    }

    #[test]
    fn test_detail_rows_show_reference_names() {
        let rows = detail_rows(&a007_book::schema::SCHEMA);
        assert!(rows.contains(&("AuthorName", "Author")));
        assert!(!rows.iter().any(|(key, _)| *key == "AuthorID"));
    }
}
