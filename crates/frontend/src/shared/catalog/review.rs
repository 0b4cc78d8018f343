use contracts::shared::form::SubmitMethod;
use contracts::shared::metadata::EntitySchema;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use super::cells::{cell_text, raw_text};
use super::list::{delete_record, export_rows, ListState};
use crate::shared::config::app_config;
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::notify::{use_notifier, Notifier};

/// `PUT <collection>/<id>` with the approval body, then refetch
fn approve(schema: &'static EntitySchema, id: String, list: ListState, notifier: Notifier) {
    let body = app_config().approval().approve_body();
    spawn_local(async move {
        let result = http::send_json(SubmitMethod::Put, &schema.item_path(&id), &body).await;
        if list.is_cancelled() {
            return;
        }
        match result {
            Ok(resp) if resp.success => {
                notifier.success("Approved", &approved_text(schema));
                list.fetch(schema);
            }
            Ok(resp) => notifier.error(
                "Error",
                resp.reported_message()
                    .unwrap_or(&format!("Failed to approve {}", schema.element_name.to_lowercase())),
            ),
            Err(e) => notifier.error("Error", &http::describe(&e)),
        }
    });
}

fn approved_text(schema: &EntitySchema) -> String {
    format!("{} approved successfully!", schema.element_name)
}

/// Whether the Approve action of `row` is spent
fn is_row_approved(row: &serde_json::Value) -> bool {
    app_config()
        .approval()
        .is_approved(&raw_text(row.get("Approved")))
        .unwrap_or(false)
}

/// Review table of user submissions: view, approve, delete and export
#[component]
pub fn SubmissionReview(schema: &'static EntitySchema) -> impl IntoView {
    let list = ListState::new();
    let notifier = use_notifier();
    let columns = schema.list_columns;
    list.fetch(schema);

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{schema.list_name}</h1>
                    <span class="page__count">{move || list.rows.with(Vec::len)}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.fetch(schema)
                        disabled=Signal::derive(move || list.loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.rows.with_untracked(|rows| export_rows(schema, rows, columns, notifier))
                        disabled=Signal::derive(move || list.rows.with(Vec::is_empty))
                    >
                        {icon("download")}
                        " Export"
                    </Button>
                </div>
            </div>

            {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || list.loading.get()>
                <div class="page__loading"><Spinner /></div>
            </Show>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {columns
                                .iter()
                                .map(|c| view! { <TableHeaderCell>{schema.label_for(c)}</TableHeaderCell> })
                                .collect_view()}
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            list.rows
                                .get()
                                .into_iter()
                                .map(|row| {
                                    let id = schema.row_id(&row).unwrap_or_default();
                                    let approved = is_row_approved(&row);
                                    let item = format!("/catalog/{}/{}", schema.key, urlencoding::encode(&id));
                                    let cells: Vec<String> =
                                        columns.iter().map(|c| cell_text(schema, &row, c)).collect();
                                    let approve_id = id.clone();
                                    let delete_id = id;
                                    view! {
                                        <TableRow>
                                            {cells
                                                .into_iter()
                                                .map(|text| view! { <TableCell>{text}</TableCell> })
                                                .collect_view()}
                                            <TableCell>
                                                <div class="table__actions">
                                                    <A href=item attr:class="button button--ghost" attr:title="View">
                                                        {icon("eye")}
                                                    </A>
                                                    <button
                                                        class="button button--ghost"
                                                        title="Approve"
                                                        disabled=approved
                                                        on:click=move |_| approve(schema, approve_id.clone(), list, notifier)
                                                    >
                                                        {icon("check")}
                                                    </button>
                                                    <button
                                                        class="button button--ghost button--danger"
                                                        title="Delete"
                                                        on:click=move |_| delete_record(schema, delete_id.clone(), list, notifier)
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a013_mazmoon_submission::schema::SCHEMA as MAZMOON_SUBMISSION;
    use serde_json::json;

    #[test]
    fn test_approve_notice_names_the_entity() {
        assert_eq!(
            approved_text(&MAZMOON_SUBMISSION),
            "Mazmoon Submission approved successfully!"
        );
    }

    #[test]
    fn test_approved_rows_disable_approve() {
        assert!(is_row_approved(&json!({"id": 4, "Approved": 0})));
        assert!(is_row_approved(&json!({"id": 4, "Approved": "0"})));
        assert!(!is_row_approved(&json!({"id": 5, "Approved": 1})));
        assert!(!is_row_approved(&json!({"id": 6})));
    }
}
