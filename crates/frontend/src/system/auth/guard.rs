use leptos::prelude::*;
use thaw::Spinner;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Renders `children` only with a session; otherwise the login page
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=move || {
                if auth_state.with(|s| s.restoring) {
                    view! { <div class="app-loading"><Spinner /></div> }.into_any()
                } else {
                    view! { <LoginPage /> }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}
