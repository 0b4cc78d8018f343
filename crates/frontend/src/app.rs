use crate::routes::routes::AppRoutes;
use crate::shared::notify::{NotificationHost, Notifier};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts for every page, including the login screen
    provide_context(Notifier::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <NotificationHost />
        </AuthProvider>
    }
}
