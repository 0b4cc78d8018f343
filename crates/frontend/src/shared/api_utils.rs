//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::app_config;

/// Get the base URL for API requests
///
/// Uses `[api] base_url` when configured, otherwise builds it from the
/// current window location and `[api] port`.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available and no base is configured
pub fn api_base() -> String {
    let api = &app_config().api;
    if !api.base_url.is_empty() {
        return api.base_url.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    origin_with_port(&protocol, &hostname, api.port)
}

fn origin_with_port(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/books/12");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_with_port() {
        assert_eq!(
            origin_with_port("https:", "admin.example.org", 3000),
            "https://admin.example.org:3000"
        );
    }
}
