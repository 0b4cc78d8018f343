use crate::domain::a002_language::schema::LOOKUP as LANGUAGES;
use crate::domain::common::LookupSource;
use crate::shared::metadata::{AttachmentSpec, Capabilities, EntitySchema, FieldSchema};

/// Writers as options of author/writer dropdowns
pub const LOOKUP: LookupSource = LookupSource::Remote {
    path: "/api/writers",
    id_keys: &["WriterID", "_id"],
    name_keys: &["Name", "WriterName"],
};

pub static SCHEMA: EntitySchema = EntitySchema {
    key: "writers",
    collection_path: "/api/writers",
    id_keys: &["WriterID", "_id"],
    element_name: "Writer",
    list_name: "Writers",
    fields: &[
        FieldSchema::text("Name", "Name").required(),
        FieldSchema::slug("Slug", "Slug", "Name"),
        FieldSchema::reference("LanguageID", "Language", "LanguageName", LANGUAGES),
        FieldSchema::text("BirthPlace", "Birth Place"),
        FieldSchema::long_text("Bio", "Biography"),
    ],
    attachments: &[AttachmentSpec {
        part: "image",
        label: "Profile Image",
        accept: "image/*",
    }],
    list_columns: &["Name", "Slug", "LanguageName", "BirthPlace"],
    capabilities: Capabilities::FULL,
};
