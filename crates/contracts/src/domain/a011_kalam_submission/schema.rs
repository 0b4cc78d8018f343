use crate::shared::metadata::{Capabilities, EntitySchema, FieldSchema};

/// Kalam sent in through the public site, reviewed here
pub static SCHEMA: EntitySchema = EntitySchema {
    key: "kalamssub",
    collection_path: "/api/kalamssub",
    id_keys: &["id"],
    element_name: "Kalam Submission",
    list_name: "Kalam Submissions",
    fields: &[
        FieldSchema::text("name", "Name"),
        FieldSchema::text("email", "Email"),
        FieldSchema::text("whatsapp", "Whatsapp"),
        FieldSchema::text("city", "City"),
        FieldSchema::text("country", "Country"),
        FieldSchema::text("poet_name", "Poet Name"),
        FieldSchema::text("poet_book", "Poet Book"),
        FieldSchema::long_text("poet_intro", "Poet Intro"),
        FieldSchema::text("kalam_title", "Kalam Title"),
        FieldSchema::text("genre", "Genre"),
        FieldSchema::text("language", "Language"),
        FieldSchema::text("kalam_bahr", "Kalam Bahr"),
        FieldSchema::long_text("kalam", "Kalam"),
        FieldSchema::text("created_at", "Created At"),
        FieldSchema::text("updated_at", "Updated At"),
        FieldSchema::number("Approved", "Approved"),
    ],
    attachments: &[],
    list_columns: &[
        "name",
        "email",
        "city",
        "country",
        "poet_name",
        "kalam_title",
        "genre",
        "language",
        "Approved",
        "created_at",
    ],
    capabilities: Capabilities::REVIEW_ONLY,
};
