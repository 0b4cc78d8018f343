//! Schema types for describing catalog entities
//!
//! Every entity of the console is a compile-time `EntitySchema`; list, detail
//! and form screens are rendered from it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a006_topic::schema::SCHEMA;
//!
//! for field in SCHEMA.fields {
//!     if field.required {
//!         println!("Required: {}", field.label);
//!     }
//! }
//! ```

mod field_type;
mod types;

pub use field_type::{Derivation, FieldKind};
pub use types::{AttachmentSpec, Capabilities, EntitySchema, FieldSchema};
