//! Field kinds for entity schemas

use crate::domain::common::LookupSource;
use crate::shared::form::slug::slugify;

/// How a field is edited and serialised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Multi-line / rich text body
    LongText,
    Number,
    /// `YYYY-MM-DD`
    Date,
    /// `#rrggbb`
    Color,
    /// Foreign key into a lookup list. The record also carries `name_field`,
    /// the denormalised display name of the selected item.
    Reference {
        name_field: &'static str,
        source: LookupSource,
    },
    /// Defaults to a transform of another field, editable afterwards
    Derived {
        from: &'static str,
        derivation: Derivation,
    },
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LongText => "long_text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Color => "color",
            Self::Reference { .. } => "reference",
            Self::Derived { .. } => "derived",
        }
    }
}

/// Pure transform producing a derived field's default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    Slug,
}

impl Derivation {
    pub fn apply(&self, source: &str) -> String {
        match self {
            Derivation::Slug => slugify(source),
        }
    }
}
