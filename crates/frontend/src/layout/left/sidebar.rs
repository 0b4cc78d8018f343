use contracts::domain::registry;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::{entity_icon, icon};

/// Navigation built from the entity registry, dashboard first
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <A href="/" exact=true attr:class="sidebar__item">
                {icon("home")}
                <span class="sidebar__label">"Dashboard"</span>
            </A>
            {registry::all()
                .iter()
                .map(|schema| view! {
                    <A href=format!("/catalog/{}", schema.key) attr:class="sidebar__item">
                        {icon(entity_icon(schema.key))}
                        <span class="sidebar__label">{schema.list_name}</span>
                    </A>
                })
                .collect_view()}
        </nav>
    }
}
