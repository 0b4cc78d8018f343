//! Dependent-selection / derived-field form core
//!
//! - record.rs: flat record and its JSON / multipart encodings
//! - state.rs: sans-IO form state machine (load, edit, validate, submit)
//! - slug.rs: title -> slug transform
//! - errors.rs: validation and request errors

pub mod errors;
pub mod record;
pub mod slug;
pub mod state;

pub use errors::{FieldErrors, FormError, RequestError};
pub use record::FormRecord;
pub use slug::slugify;
pub use state::{FormMode, FormState, Payload, SubmitMethod, SubmitOutcome, SubmitRequest};
