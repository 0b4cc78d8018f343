//! Common types shared by all catalog entities

pub mod api_response;
pub mod approval;
pub mod lookup;
pub mod lookup_id;

// Re-exports
pub use api_response::{rows_from_json, ApiResponse};
pub use approval::ApprovalConvention;
pub use lookup::{LookupItem, LookupList, LookupSource};
pub use lookup_id::LookupId;
