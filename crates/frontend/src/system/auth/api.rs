use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::api_url;

/// Login with username and password; returns the session token and user
pub async fn login(username: String, password: String) -> Result<(String, UserInfo), String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    let body = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Login failed ({}): {}", status, e))?;

    body.into_session()
}

/// User behind `access_token`; fails when the token is no longer accepted
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    let body = response
        .json::<Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    parse_user(body)
}

/// Bare user object or `{ user: {...} }`
fn parse_user(body: Value) -> Result<UserInfo, String> {
    let user = match body.get("user") {
        Some(user) => user.clone(),
        None => body,
    };
    serde_json::from_value(user).map_err(|e| format!("Failed to parse user: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_user_accepts_both_shapes() {
        let bare = parse_user(json!({"username": "editor"})).unwrap();
        let wrapped = parse_user(json!({"success": true, "user": {"username": "editor"}})).unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_parse_user_rejects_garbage() {
        assert!(parse_user(json!({"success": false})).is_err());
    }
}
