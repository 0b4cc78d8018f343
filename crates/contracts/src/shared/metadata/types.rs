//! Static schema types describing catalog entities
//!
//! All types use 'static lifetimes so schemas are compile-time constants.

use serde_json::Value;

use super::field_type::{Derivation, FieldKind};
use crate::domain::common::LookupSource;

// ============================================================================
// Field-level schema
// ============================================================================

/// One editable field of an entity record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Key in the API payload, e.g. "CategoryID"
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Initial value of a fresh create record
    pub default: &'static str,
}

impl FieldSchema {
    const fn with_kind(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            default: "",
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::with_kind(name, label, FieldKind::Text)
    }

    pub const fn long_text(name: &'static str, label: &'static str) -> Self {
        Self::with_kind(name, label, FieldKind::LongText)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::with_kind(name, label, FieldKind::Number)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::with_kind(name, label, FieldKind::Date)
    }

    pub const fn color(name: &'static str, label: &'static str) -> Self {
        Self::with_kind(name, label, FieldKind::Color)
    }

    pub const fn reference(
        name: &'static str,
        label: &'static str,
        name_field: &'static str,
        source: LookupSource,
    ) -> Self {
        Self::with_kind(name, label, FieldKind::Reference { name_field, source })
    }

    /// Slug derived from `from`
    pub const fn slug(name: &'static str, label: &'static str, from: &'static str) -> Self {
        Self::with_kind(
            name,
            label,
            FieldKind::Derived {
                from,
                derivation: Derivation::Slug,
            },
        )
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    /// Name of the paired display-name key for reference fields
    pub fn reference_name_field(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Reference { name_field, .. } => Some(name_field),
            _ => None,
        }
    }
}

/// Binary part sent alongside the scalar fields as multipart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentSpec {
    /// Multipart part name ("image", "pdf")
    pub part: &'static str,
    pub label: &'static str,
    /// `accept` attribute of the file input
    pub accept: &'static str,
}

/// Which screens and actions an entity offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
    pub export: bool,
}

impl Capabilities {
    pub const FULL: Capabilities = Capabilities {
        create: true,
        edit: true,
        delete: true,
        export: true,
    };

    /// Submissions coming from the public site: no create or edit
    pub const REVIEW_ONLY: Capabilities = Capabilities {
        create: false,
        edit: false,
        delete: true,
        export: true,
    };

    pub const READ_ONLY: Capabilities = Capabilities {
        create: false,
        edit: false,
        delete: false,
        export: true,
    };
}

// ============================================================================
// Entity-level schema
// ============================================================================

/// Static description of one catalog entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    /// Route segment, e.g. "topics"
    pub key: &'static str,
    /// Collection endpoint, e.g. "/api/topics"
    pub collection_path: &'static str,
    /// Candidate primary-key names in priority order
    pub id_keys: &'static [&'static str],
    /// UI name of one element ("Topic")
    pub element_name: &'static str,
    /// UI name of the list ("Topics")
    pub list_name: &'static str,
    pub fields: &'static [FieldSchema],
    pub attachments: &'static [AttachmentSpec],
    /// Record keys shown as list columns
    pub list_columns: &'static [&'static str],
    pub capabilities: Capabilities,
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSchema> {
        let fields: &'static [FieldSchema] = self.fields;
        fields.iter().find(|f| f.name == name)
    }

    /// Every key a record of this entity carries, reference names included
    pub fn record_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::with_capacity(self.fields.len() * 2);
        for field in self.fields {
            keys.push(field.name);
            if let Some(name_field) = field.reference_name_field() {
                keys.push(name_field);
            }
        }
        keys
    }

    /// Fields whose value is derived from `source`
    pub fn derived_from<'a>(
        &'a self,
        source: &'a str,
    ) -> impl Iterator<Item = (&'static FieldSchema, Derivation)> + 'a {
        let fields: &'static [FieldSchema] = self.fields;
        fields.iter().filter_map(move |f| match f.kind {
            FieldKind::Derived { from, derivation } if from == source => Some((f, derivation)),
            _ => None,
        })
    }

    /// Reference fields with their lookup sources
    pub fn references(&self) -> impl Iterator<Item = (&'static FieldSchema, LookupSource)> {
        let fields: &'static [FieldSchema] = self.fields;
        fields.iter().filter_map(|f| match f.kind {
            FieldKind::Reference { source, .. } => Some((f, source)),
            _ => None,
        })
    }

    /// Column header for a record key
    pub fn label_for(&self, key: &str) -> &'static str {
        if let Some(field) = self.field(key) {
            return field.label;
        }
        self.fields
            .iter()
            .find(|f| f.reference_name_field() == Some(key))
            .map(|f| f.label)
            .unwrap_or("")
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.collection_path, urlencoding::encode(id))
    }

    /// Primary key of an API row as a string
    pub fn row_id(&self, row: &Value) -> Option<String> {
        self.id_keys
            .iter()
            .filter_map(|key| row.get(*key))
            .find_map(|v| match v {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CATEGORIES: LookupSource = LookupSource::Remote {
        path: "/api/categories",
        id_keys: &["CategoryID"],
        name_keys: &["Name"],
    };

    const SAMPLE: EntitySchema = EntitySchema {
        key: "samples",
        collection_path: "/api/samples",
        id_keys: &["SampleID", "_id"],
        element_name: "Sample",
        list_name: "Samples",
        fields: &[
            FieldSchema::text("Title", "Title").required(),
            FieldSchema::slug("Slug", "Slug", "Title"),
            FieldSchema::reference("CategoryID", "Category", "CategoryName", CATEGORIES),
        ],
        attachments: &[],
        list_columns: &["Title", "CategoryName"],
        capabilities: Capabilities::FULL,
    };

    #[test]
    fn test_record_keys_include_reference_names() {
        assert_eq!(
            SAMPLE.record_keys(),
            vec!["Title", "Slug", "CategoryID", "CategoryName"]
        );
    }

    #[test]
    fn test_label_for_reference_name_uses_reference_label() {
        assert_eq!(SAMPLE.label_for("CategoryName"), "Category");
        assert_eq!(SAMPLE.label_for("Title"), "Title");
        assert_eq!(SAMPLE.label_for("Unknown"), "");
    }

    #[test]
    fn test_derived_from_finds_slug() {
        let derived: Vec<_> = SAMPLE.derived_from("Title").map(|(f, _)| f.name).collect();
        assert_eq!(derived, vec!["Slug"]);
        assert_eq!(SAMPLE.derived_from("Slug").count(), 0);
    }

    #[test]
    fn test_row_id_falls_back_and_stringifies() {
        assert_eq!(SAMPLE.row_id(&json!({"SampleID": 12})), Some("12".into()));
        assert_eq!(SAMPLE.row_id(&json!({"_id": "ab"})), Some("ab".into()));
        assert_eq!(SAMPLE.row_id(&json!({"Title": "x"})), None);
    }

    #[test]
    fn test_item_path_encodes_id() {
        assert_eq!(SAMPLE.item_path("7"), "/api/samples/7");
        assert_eq!(SAMPLE.item_path("a b"), "/api/samples/a%20b");
    }
}
