use crate::domain::common::LookupSource;
use crate::shared::metadata::{AttachmentSpec, Capabilities, EntitySchema, FieldSchema};

/// Some deployments return Mongo-style `_id`/`Name` instead of `GroupID`/`GroupName`
pub const LOOKUP: LookupSource = LookupSource::Remote {
    path: "/api/groups",
    id_keys: &["GroupID", "_id"],
    name_keys: &["GroupName", "Name"],
};

pub static SCHEMA: EntitySchema = EntitySchema {
    key: "groups",
    collection_path: "/api/groups",
    id_keys: &["GroupID", "_id"],
    element_name: "Group",
    list_name: "Groups",
    fields: &[
        FieldSchema::text("GroupName", "Group Name").required(),
        FieldSchema::long_text("GroupDescription", "Description"),
    ],
    attachments: &[AttachmentSpec {
        part: "image",
        label: "Group Image",
        accept: "image/*",
    }],
    list_columns: &["GroupName", "GroupDescription"],
    capabilities: Capabilities::FULL,
};
