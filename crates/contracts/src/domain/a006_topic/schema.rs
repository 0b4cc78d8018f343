use crate::domain::a003_group::schema::LOOKUP as GROUPS;
use crate::domain::a005_category::schema::LOOKUP as CATEGORIES;
use crate::domain::common::LookupSource;
use crate::shared::metadata::{Capabilities, EntitySchema, FieldSchema};

pub const LOOKUP: LookupSource = LookupSource::Remote {
    path: "/api/topics",
    id_keys: &["TopicID"],
    name_keys: &["Title", "Name"],
};

pub static SCHEMA: EntitySchema = EntitySchema {
    key: "topics",
    collection_path: "/api/topics",
    id_keys: &["TopicID"],
    element_name: "Topic",
    list_name: "Topics",
    fields: &[
        FieldSchema::text("Title", "Title").required(),
        FieldSchema::slug("Slug", "Slug", "Title").required(),
        FieldSchema::reference("CategoryID", "Category", "CategoryName", CATEGORIES).required(),
        FieldSchema::reference("GroupID", "Group", "GroupName", GROUPS),
        FieldSchema::long_text("Description", "Description"),
    ],
    attachments: &[],
    list_columns: &["Title", "Slug", "CategoryName", "GroupName"],
    capabilities: Capabilities::FULL,
};
