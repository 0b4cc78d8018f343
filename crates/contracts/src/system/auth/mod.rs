use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Answer of `POST /api/auth/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Token and user of a successful login; `Err` carries the message to show
    pub fn into_session(self) -> Result<(String, UserInfo), String> {
        match (self.success, self.token, self.user) {
            (true, Some(token), Some(user)) if !token.is_empty() => Ok((token, user)),
            _ => Err(self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Invalid credentials".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl UserInfo {
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_successful_login_yields_session() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "success": true,
            "token": "abc",
            "user": {"username": "editor"}
        }))
        .unwrap();
        let (token, user) = resp.into_session().unwrap();
        assert_eq!(token, "abc");
        assert_eq!(user.greeting_name(), "editor");
    }

    #[test]
    fn test_rejected_login_surfaces_message() {
        let resp: LoginResponse =
            serde_json::from_value(json!({"success": false, "message": "Wrong password"}))
                .unwrap();
        assert_eq!(resp.into_session(), Err("Wrong password".to_string()));

        let resp: LoginResponse = serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(resp.into_session(), Err("Invalid credentials".to_string()));
    }
}
