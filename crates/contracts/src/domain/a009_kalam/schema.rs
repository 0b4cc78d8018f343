use crate::domain::a001_writer::schema::LOOKUP as WRITERS;
use crate::domain::a002_language::schema::LOOKUP as LANGUAGES;
use crate::domain::a003_group::schema::LOOKUP as GROUPS;
use crate::domain::a004_section::schema::LOOKUP as SECTIONS;
use crate::domain::a005_category::schema::LOOKUP as CATEGORIES;
use crate::domain::a006_topic::schema::LOOKUP as TOPICS;
use crate::shared::metadata::{Capabilities, EntitySchema, FieldSchema};

pub static SCHEMA: EntitySchema = EntitySchema {
    key: "kalaam",
    collection_path: "/api/kalaam",
    id_keys: &["KalamID"],
    element_name: "Kalam",
    list_name: "Kalaam",
    fields: &[
        FieldSchema::text("Title", "Title").required(),
        FieldSchema::slug("Slug", "Slug", "Title"),
        FieldSchema::reference("WriterID", "Writer", "WriterName", WRITERS).required(),
        FieldSchema::reference("CategoryID", "Category", "CategoryName", CATEGORIES),
        FieldSchema::reference("TopicID", "Topic", "TopicName", TOPICS),
        FieldSchema::reference("GroupID", "Group", "GroupName", GROUPS),
        FieldSchema::reference("SectionID", "Section", "SectionName", SECTIONS),
        FieldSchema::reference("LanguageID", "Language", "LanguageName", LANGUAGES),
        FieldSchema::long_text("ContentUrdu", "Kalam").required(),
        FieldSchema::long_text("Description", "Description"),
    ],
    attachments: &[],
    list_columns: &["Title", "WriterName", "CategoryName", "TopicName", "LanguageName"],
    capabilities: Capabilities::FULL,
};
