//! All catalog entities known to the console, in sidebar order

use crate::shared::metadata::EntitySchema;

use super::{
    a001_writer, a002_language, a003_group, a004_section, a005_category, a006_topic, a007_book,
    a008_article, a009_kalam, a010_event, a011_kalam_submission, a012_bazm_durood,
    a013_mazmoon_submission,
};

pub static ENTITIES: [&EntitySchema; 13] = [
    &a007_book::schema::SCHEMA,
    &a008_article::schema::SCHEMA,
    &a009_kalam::schema::SCHEMA,
    &a001_writer::schema::SCHEMA,
    &a006_topic::schema::SCHEMA,
    &a005_category::schema::SCHEMA,
    &a004_section::schema::SCHEMA,
    &a003_group::schema::SCHEMA,
    &a002_language::schema::SCHEMA,
    &a010_event::schema::SCHEMA,
    &a011_kalam_submission::schema::SCHEMA,
    &a013_mazmoon_submission::schema::SCHEMA,
    &a012_bazm_durood::schema::SCHEMA,
];

/// Entities reviewed on the submissions screen, in tab order
pub static SUBMISSIONS: [&EntitySchema; 2] = [
    &a011_kalam_submission::schema::SCHEMA,
    &a013_mazmoon_submission::schema::SCHEMA,
];

pub fn all() -> &'static [&'static EntitySchema] {
    &ENTITIES
}

pub fn submissions() -> &'static [&'static EntitySchema] {
    &SUBMISSIONS
}

/// True for entities sent in through the public site and approved here
pub fn is_submission(key: &str) -> bool {
    SUBMISSIONS.iter().any(|schema| schema.key == key)
}

/// Schema by route key ("books", "topics", ...)
pub fn find(key: &str) -> Option<&'static EntitySchema> {
    ENTITIES.iter().copied().find(|schema| schema.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{Capabilities, FieldKind};
    use std::collections::HashSet;

    #[test]
    fn test_find_by_key() {
        assert_eq!(find("topics").map(|s| s.element_name), Some("Topic"));
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_submissions_are_review_only_with_approval_column() {
        assert!(is_submission("kalamssub"));
        assert!(is_submission("mazmoonssub"));
        assert!(!is_submission("kalaam"));
        for schema in submissions() {
            assert_eq!(schema.capabilities, Capabilities::REVIEW_ONLY);
            assert!(schema.list_columns.contains(&"Approved"), "{}", schema.key);
            assert_eq!(find(schema.key).map(|s| s.key), Some(schema.key));
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = all().iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), all().len());
    }

    #[test]
    fn test_schemas_are_consistent() {
        for schema in all() {
            let keys = schema.record_keys();
            let unique: HashSet<_> = keys.iter().collect();
            assert_eq!(unique.len(), keys.len(), "duplicate key in {}", schema.key);

            for column in schema.list_columns {
                assert!(keys.contains(column), "{}: bad column {}", schema.key, column);
            }

            for field in schema.fields {
                if let FieldKind::Derived { from, .. } = field.kind {
                    assert!(
                        schema.field(from).is_some(),
                        "{}: {} derives from missing {}",
                        schema.key,
                        field.name,
                        from
                    );
                }
            }

            assert!(schema.collection_path.starts_with("/api/"));
            assert!(!schema.id_keys.is_empty());
        }
    }

    #[test]
    fn test_book_requires_title_writer_category_language() {
        let book = find("books").unwrap();
        let required: Vec<_> = book
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, vec!["Title", "AuthorID", "CategoryID", "LanguageID"]);
    }

    #[test]
    fn test_topic_requires_title_category_slug() {
        let topic = find("topics").unwrap();
        let required: HashSet<_> = topic
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, HashSet::from(["Title", "Slug", "CategoryID"]));
    }
}
