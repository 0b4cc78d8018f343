use crate::shared::metadata::{AttachmentSpec, Capabilities, EntitySchema, FieldSchema};

pub static SCHEMA: EntitySchema = EntitySchema {
    key: "events",
    collection_path: "/api/events",
    id_keys: &["EventID"],
    element_name: "Event",
    list_name: "Events",
    fields: &[
        FieldSchema::text("Title", "Title").required(),
        FieldSchema::date("EventDate", "Event Date").required(),
        FieldSchema::text("Location", "Location"),
        FieldSchema::long_text("Description", "Description"),
    ],
    attachments: &[AttachmentSpec {
        part: "image",
        label: "Event Image",
        accept: "image/*",
    }],
    list_columns: &["Title", "EventDate", "Location"],
    capabilities: Capabilities::FULL,
};
