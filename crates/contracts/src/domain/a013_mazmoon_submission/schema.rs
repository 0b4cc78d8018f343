use crate::shared::metadata::{Capabilities, EntitySchema, FieldSchema};

/// Mazmoon (essays) sent in through the public site, reviewed next to kalam
pub static SCHEMA: EntitySchema = EntitySchema {
    key: "mazmoonssub",
    collection_path: "/api/mazmoonssub",
    id_keys: &["id"],
    element_name: "Mazmoon Submission",
    list_name: "Mazmoon Submissions",
    fields: &[
        FieldSchema::text("id", "ID"),
        FieldSchema::text("name", "Name"),
        FieldSchema::text("mazmoon_title", "Mazmoon Title"),
        FieldSchema::text("city", "City"),
        FieldSchema::number("Approved", "Approved"),
    ],
    attachments: &[],
    list_columns: &["id", "name", "mazmoon_title", "city", "Approved"],
    capabilities: Capabilities::REVIEW_ONLY,
};
