use contracts::domain::registry;
use contracts::shared::metadata::EntitySchema;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::shared::cancel::CancelToken;
use crate::shared::http;
use crate::shared::icons::{entity_icon, icon};

#[component]
fn CountCard(schema: &'static EntitySchema) -> impl IntoView {
    let count = RwSignal::new(None::<Result<usize, ()>>);
    let cancel = CancelToken::for_current_owner();

    spawn_local(async move {
        let result = http::get_rows(schema.collection_path).await;
        let Some(result) = cancel.guard(result) else {
            return;
        };
        if let Err(e) = &result {
            log::warn!("Count of {} unavailable: {}", schema.list_name, e);
        }
        count.set(Some(result.map(|rows| rows.len()).map_err(|_| ())));
    });

    view! {
        <A href=format!("/catalog/{}", schema.key) attr:class="dashboard-card">
            <div class="dashboard-card__icon">{icon(entity_icon(schema.key))}</div>
            <div class="dashboard-card__body">
                <div class="dashboard-card__title">{schema.list_name}</div>
                <div class="dashboard-card__value">
                    {move || match count.get() {
                        None => "...".to_string(),
                        Some(Ok(n)) => n.to_string(),
                        Some(Err(())) => "n/a".to_string(),
                    }}
                </div>
            </div>
        </A>
    }
}

/// Landing page: one card per registered entity
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
            </div>
            <div class="dashboard-grid">
                {registry::all()
                    .iter()
                    .map(|schema| view! { <CountCard schema=*schema /> })
                    .collect_view()}
            </div>
        </div>
    }
}
