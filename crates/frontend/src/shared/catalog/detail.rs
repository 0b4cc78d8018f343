use contracts::shared::metadata::EntitySchema;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use serde_json::Value;
use thaw::*;

use super::cells::{cell_text, detail_rows};
use crate::shared::cancel::CancelToken;
use crate::shared::http;
use crate::shared::icons::icon;

/// Read-only view of one record
#[component]
pub fn EntityDetail(schema: &'static EntitySchema, id: String) -> impl IntoView {
    let record = RwSignal::new(None::<Value>);
    let error = RwSignal::new(None::<String>);
    let cancel = CancelToken::for_current_owner();

    let path = schema.item_path(&id);
    spawn_local(async move {
        let result = http::get_json(&path).await;
        let Some(result) = cancel.guard(result) else {
            return;
        };
        match result {
            Ok(row) => record.set(Some(row)),
            Err(e) => {
                log::error!("Failed to load {}: {}", path, e);
                error.set(Some(format!(
                    "Failed to load {}: {}",
                    schema.element_name.to_lowercase(),
                    http::describe(&e)
                )));
            }
        }
    });

    let list_href = format!("/catalog/{}", schema.key);
    let edit_href = format!("{}/{}/edit", list_href, urlencoding::encode(&id));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("{} Details", schema.element_name)}</h1>
                </div>
                <div class="page__header-right">
                    {schema.capabilities.edit.then(|| view! {
                        <A href=edit_href attr:class="button button--primary">
                            {icon("edit")}
                            " Edit"
                        </A>
                    })}
                    <A href=list_href attr:class="button button--secondary">
                        {icon("arrow-left")}
                        " Back"
                    </A>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || match record.get() {
                Some(row) => view! {
                    <dl class="details-list">
                        {detail_rows(schema)
                            .into_iter()
                            .map(|(key, label)| view! {
                                <dt>{label}</dt>
                                <dd>{cell_text(schema, &row, key)}</dd>
                            })
                            .collect_view()}
                    </dl>
                }
                .into_any(),
                None if error.with(Option::is_none) => view! {
                    <div class="page__loading"><Spinner /></div>
                }
                .into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}
