use crate::domain::a001_writer::schema::LOOKUP as WRITERS;
use crate::domain::a003_group::schema::LOOKUP as GROUPS;
use crate::domain::a004_section::schema::LOOKUP as SECTIONS;
use crate::domain::a005_category::schema::LOOKUP as CATEGORIES;
use crate::shared::metadata::{AttachmentSpec, Capabilities, EntitySchema, FieldSchema};

pub static SCHEMA: EntitySchema = EntitySchema {
    key: "articles",
    collection_path: "/api/articles",
    id_keys: &["ArticleID"],
    element_name: "Article",
    list_name: "Articles",
    fields: &[
        FieldSchema::text("Title", "Title").required(),
        FieldSchema::slug("Slug", "Slug", "Title"),
        FieldSchema::reference("WriterID", "Writer", "WriterName", WRITERS),
        FieldSchema::reference("CategoryID", "Category", "CategoryName", CATEGORIES),
        FieldSchema::reference("SectionID", "Section", "SectionName", SECTIONS),
        FieldSchema::reference("GroupID", "Group", "GroupName", GROUPS),
        FieldSchema::long_text("ContentUrdu", "Content").required(),
    ],
    attachments: &[AttachmentSpec {
        part: "image",
        label: "Cover Image",
        accept: "image/*",
    }],
    list_columns: &["Title", "WriterName", "SectionName", "GroupName"],
    capabilities: Capabilities::FULL,
};
