use crate::domain::a003_group::schema::LOOKUP as GROUPS;
use crate::domain::common::LookupSource;
use crate::shared::metadata::{Capabilities, EntitySchema, FieldSchema};

pub const LOOKUP: LookupSource = LookupSource::Remote {
    path: "/api/sections",
    id_keys: &["SectionID"],
    name_keys: &["SectionName", "Name"],
};

pub static SCHEMA: EntitySchema = EntitySchema {
    key: "sections",
    collection_path: "/api/sections",
    id_keys: &["SectionID"],
    element_name: "Section",
    list_name: "Sections",
    fields: &[
        FieldSchema::text("SectionName", "Section Name").required(),
        FieldSchema::slug("Slug", "Slug", "SectionName"),
        FieldSchema::reference("GroupID", "Group", "GroupName", GROUPS),
        FieldSchema::long_text("SectionDescription", "Description"),
    ],
    attachments: &[],
    list_columns: &["SectionName", "Slug", "GroupName"],
    capabilities: Capabilities::FULL,
};
