use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::catalog::{
    Dashboard, EntityCreatePage, EntityDetailPage, EntityEditPage, EntityListPage,
};
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="alert alert--error">"Page not found"</div>
        </div>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! {
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Dashboard />
                    <Route path=path!("/catalog/:entity") view=EntityListPage />
                    <Route path=path!("/catalog/:entity/new") view=EntityCreatePage />
                    <Route path=path!("/catalog/:entity/:id") view=EntityDetailPage />
                    <Route path=path!("/catalog/:entity/:id/edit") view=EntityEditPage />
                </Routes>
            }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <RequireAuth>
                <MainLayout />
            </RequireAuth>
        </Router>
    }
}
