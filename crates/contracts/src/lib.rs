//! Types shared between the admin console and its REST collaborator

pub mod domain;
pub mod shared;
pub mod system;
