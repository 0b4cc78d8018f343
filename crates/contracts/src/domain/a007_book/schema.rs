use crate::domain::a001_writer::schema::LOOKUP as WRITERS;
use crate::domain::a003_group::schema::LOOKUP as GROUPS;
use crate::domain::a004_section::schema::LOOKUP as SECTIONS;
use crate::domain::a005_category::schema::LOOKUP as CATEGORIES;
use crate::domain::common::LookupSource;
use crate::shared::metadata::{AttachmentSpec, Capabilities, EntitySchema, FieldSchema};

/// Book languages are a fixed list, not the languages collection
pub const BOOK_LANGUAGES: LookupSource =
    LookupSource::Static(&[(1, "Urdu"), (2, "English"), (3, "Hindi")]);

pub static SCHEMA: EntitySchema = EntitySchema {
    key: "books",
    collection_path: "/api/books",
    id_keys: &["BookID"],
    element_name: "Book",
    list_name: "Books",
    fields: &[
        FieldSchema::text("Title", "Book Title").required(),
        FieldSchema::reference("AuthorID", "Author", "AuthorName", WRITERS).required(),
        FieldSchema::reference("CategoryID", "Category", "CategoryName", CATEGORIES).required(),
        FieldSchema::reference("GroupID", "Group", "GroupName", GROUPS),
        FieldSchema::reference("SectionID", "Section", "SectionName", SECTIONS),
        FieldSchema::reference("LanguageID", "Language", "LanguageName", BOOK_LANGUAGES)
            .required(),
        FieldSchema::date("PublicationYear", "Publication Year"),
        FieldSchema::long_text("Description", "Description"),
    ],
    attachments: &[
        AttachmentSpec {
            part: "image",
            label: "Cover Image",
            accept: "image/*",
        },
        AttachmentSpec {
            part: "pdf",
            label: "Upload PDF",
            accept: "application/pdf",
        },
    ],
    list_columns: &[
        "Title",
        "AuthorName",
        "CategoryName",
        "LanguageName",
        "PublicationYear",
    ],
    capabilities: Capabilities::FULL,
};
