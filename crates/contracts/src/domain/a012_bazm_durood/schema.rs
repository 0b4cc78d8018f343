use crate::shared::metadata::{Capabilities, EntitySchema, FieldSchema};

/// Durood counts pledged through the public site
pub static SCHEMA: EntitySchema = EntitySchema {
    key: "bazmedurood",
    collection_path: "/api/bazmedurood",
    id_keys: &["id"],
    element_name: "Bazm-e-Durood Entry",
    list_name: "Bazm-e-Durood",
    fields: &[
        FieldSchema::text("full_name_roman", "Full Name (Roman)"),
        FieldSchema::text("country", "Country"),
        FieldSchema::text("city", "City"),
        FieldSchema::number("durood_count", "Durood Count"),
        FieldSchema::long_text("dua", "Dua (Urdu)"),
        FieldSchema::date("inserted_date", "Inserted Date"),
    ],
    attachments: &[],
    list_columns: &[
        "full_name_roman",
        "country",
        "city",
        "durood_count",
        "inserted_date",
    ],
    capabilities: Capabilities::READ_ONLY,
};
