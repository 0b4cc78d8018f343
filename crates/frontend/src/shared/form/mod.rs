//! Schema-driven create/edit form
//!
//! - view_model.rs: `FormController`, the reactive owner of a `FormState`
//! - view.rs: `EntityForm`, one component for every entity schema

pub mod view;
pub mod view_model;

pub use view::EntityForm;
pub use view_model::FormController;
