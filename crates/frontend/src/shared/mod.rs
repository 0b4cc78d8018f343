pub mod api_utils;
pub mod cancel;
pub mod catalog;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod form;
pub mod http;
pub mod icons;
pub mod notify;
