use contracts::domain::registry;
use contracts::shared::form::FormMode;
use contracts::shared::metadata::EntitySchema;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::detail::EntityDetail;
use super::list::EntityList;
use super::review::SubmissionReview;
use crate::shared::form::EntityForm;

fn not_found(what: String) -> AnyView {
    view! {
        <div class="page">
            <div class="alert alert--error">{format!("Unknown {}", what)}</div>
        </div>
    }
    .into_any()
}

/// Raw `:entity` and `:id`, re-read on every navigation
fn route_keys() -> Memo<(String, String)> {
    let params = use_params_map();
    Memo::new(move |_| {
        params.with(|p| {
            (
                p.get("entity").unwrap_or_default(),
                p.get("id").unwrap_or_default(),
            )
        })
    })
}

fn resolve(keys: Memo<(String, String)>) -> (Option<&'static EntitySchema>, String, String) {
    let (key, id) = keys.get();
    (registry::find(&key), key, id)
}

#[component]
pub fn EntityListPage() -> impl IntoView {
    let keys = route_keys();
    move || match resolve(keys) {
        (Some(schema), _, _) if registry::is_submission(schema.key) => {
            view! { <SubmissionReview schema /> }.into_any()
        }
        (Some(schema), _, _) => view! { <EntityList schema /> }.into_any(),
        (None, key, _) => not_found(format!("section: {}", key)),
    }
}

#[component]
pub fn EntityDetailPage() -> impl IntoView {
    let keys = route_keys();
    move || match resolve(keys) {
        (Some(schema), _, id) => view! { <EntityDetail schema id /> }.into_any(),
        (None, key, _) => not_found(format!("section: {}", key)),
    }
}

#[component]
pub fn EntityCreatePage() -> impl IntoView {
    let keys = route_keys();
    move || match resolve(keys) {
        (Some(schema), _, _) if schema.capabilities.create => {
            view! { <EntityForm schema mode=FormMode::Create /> }.into_any()
        }
        (Some(schema), _, _) => not_found(format!("action: new {}", schema.element_name)),
        (None, key, _) => not_found(format!("section: {}", key)),
    }
}

#[component]
pub fn EntityEditPage() -> impl IntoView {
    let keys = route_keys();
    move || match resolve(keys) {
        (Some(schema), _, id) if schema.capabilities.edit => {
            let mode = FormMode::Edit { id };
            view! { <EntityForm schema mode /> }.into_any()
        }
        (Some(schema), _, _) => not_found(format!("action: edit {}", schema.element_name)),
        (None, key, _) => not_found(format!("section: {}", key)),
    }
}
