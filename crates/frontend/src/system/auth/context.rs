use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// A stored token is being verified
    pub restoring: bool,
}

impl AuthState {
    pub fn signed_in(access_token: String, user_info: UserInfo) -> Self {
        Self {
            access_token: Some(access_token),
            user_info: Some(user_info),
            restoring: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let stored = storage::get_access_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: stored.is_some(),
        ..AuthState::default()
    });

    if let Some(access_token) = stored {
        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    log::info!("Session restored for {}", user_info.username);
                    set_auth_state.set(AuthState::signed_in(access_token, user_info));
                }
                Err(e) => {
                    log::warn!("Stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store the token and switch the app to the signed-in layout
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let (access_token, user_info) = api::login(username, password).await?;
    storage::save_access_token(&access_token);
    log::info!("Signed in as {}", user_info.username);
    set_auth_state.set(AuthState::signed_in(access_token, user_info));
    Ok(())
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_signed_out() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.restoring);
    }

    #[test]
    fn test_signed_in_state() {
        let user = UserInfo {
            username: "editor".into(),
            display_name: None,
        };
        let state = AuthState::signed_in("token".into(), user);
        assert!(state.is_authenticated());
        assert!(!state.restoring);
    }
}
