//! Generic pages driven by the entity registry
//!
//! - cells.rs: display text of a record value
//! - list.rs: table with view/edit/delete/export
//! - review.rs: submissions table with approve/delete/export
//! - detail.rs: read-only record
//! - dashboard.rs: record count per entity
//! - pages.rs: route components resolving `:entity` / `:id`

pub mod cells;
pub mod dashboard;
pub mod detail;
pub mod list;
pub mod pages;
pub mod review;

pub use dashboard::Dashboard;
pub use pages::{EntityCreatePage, EntityDetailPage, EntityEditPage, EntityListPage};
