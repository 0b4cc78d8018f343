use crate::domain::common::LookupSource;
use crate::shared::metadata::{Capabilities, EntitySchema, FieldSchema};

pub const LOOKUP: LookupSource = LookupSource::Remote {
    path: "/api/languages",
    id_keys: &["LanguageID", "id"],
    name_keys: &["LanguageName", "Name"],
};

pub static SCHEMA: EntitySchema = EntitySchema {
    key: "languages",
    collection_path: "/api/languages",
    id_keys: &["LanguageID", "id"],
    element_name: "Language",
    list_name: "Languages",
    fields: &[
        FieldSchema::text("LanguageName", "Language Name").required(),
        FieldSchema::text("LanguageCode", "Language Code"),
    ],
    attachments: &[],
    list_columns: &["LanguageName", "LanguageCode"],
    capabilities: Capabilities::FULL,
};
