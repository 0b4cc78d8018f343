use crate::domain::a003_group::schema::LOOKUP as GROUPS;
use crate::domain::common::LookupSource;
use crate::shared::metadata::{Capabilities, EntitySchema, FieldSchema};

pub const LOOKUP: LookupSource = LookupSource::Remote {
    path: "/api/categories",
    id_keys: &["CategoryID"],
    name_keys: &["Name", "CategoryName"],
};

pub static SCHEMA: EntitySchema = EntitySchema {
    key: "categories",
    collection_path: "/api/categories",
    id_keys: &["CategoryID"],
    element_name: "Category",
    list_name: "Categories",
    fields: &[
        FieldSchema::text("Name", "Name").required(),
        FieldSchema::slug("Slug", "Slug", "Name").required(),
        FieldSchema::color("Color", "Color").with_default("#5a6c17"),
        FieldSchema::reference("GroupID", "Group", "GroupName", GROUPS),
        FieldSchema::long_text("Description", "Description"),
    ],
    attachments: &[],
    list_columns: &["Name", "Slug", "GroupName", "Color"],
    capabilities: Capabilities::FULL,
};
