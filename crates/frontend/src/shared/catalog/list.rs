use contracts::shared::metadata::EntitySchema;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use serde_json::Value;
use thaw::*;

use super::cells::cell_text;
use crate::shared::cancel::{stored_is_cancelled, CancelToken};
use crate::shared::export::{export_csv, CsvTable};
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::notify::{use_notifier, Notifier};

/// Rows of a list page and their fetch status
#[derive(Clone, Copy)]
pub struct ListState {
    pub rows: RwSignal<Vec<Value>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    cancel: StoredValue<CancelToken>,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            cancel: StoredValue::new(CancelToken::for_current_owner()),
        }
    }

    pub fn fetch(&self, schema: &'static EntitySchema) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            let result = http::get_rows(schema.collection_path).await;
            if this.is_cancelled() {
                return;
            }
            this.loading.set(false);
            match result {
                Ok(rows) => {
                    this.rows.set(rows);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {}", schema.list_name, e);
                    this.error.set(Some(http::describe(&e)));
                }
            }
        });
    }

    pub fn is_cancelled(&self) -> bool {
        stored_is_cancelled(self.cancel)
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Ask, then `DELETE <collection>/<id>` and refetch
pub fn delete_record(schema: &'static EntitySchema, id: String, list: ListState, notifier: Notifier) {
    let element = schema.element_name.to_lowercase();
    if !confirm(&format!("Are you sure you want to delete this {}?", element)) {
        return;
    }
    spawn_local(async move {
        let result = http::delete(&schema.item_path(&id)).await;
        if list.is_cancelled() {
            return;
        }
        match result {
            Ok(resp) if resp.success => {
                notifier.success("Deleted", &format!("{} deleted successfully!", schema.element_name));
                list.fetch(schema);
            }
            Ok(resp) => notifier.error(
                "Error",
                resp.reported_message()
                    .unwrap_or(&format!("Failed to delete {}", element)),
            ),
            Err(e) => notifier.error("Error", &http::describe(&e)),
        }
    });
}

/// Rows as a CSV table over `columns`
pub fn csv_table(schema: &EntitySchema, rows: &[Value], columns: &[&str]) -> CsvTable {
    let mut table = CsvTable::new(columns.iter().map(|c| schema.label_for(c).to_string()).collect());
    for row in rows {
        table.push_row(columns.iter().map(|c| cell_text(schema, row, c)).collect());
    }
    table
}

pub fn export_rows(schema: &EntitySchema, rows: &[Value], columns: &[&str], notifier: Notifier) {
    let table = csv_table(schema, rows, columns);
    if let Err(e) = export_csv(&table, &format!("{}.csv", schema.key)) {
        notifier.warning("Export failed", &e);
    }
}

#[component]
pub fn EntityList(schema: &'static EntitySchema) -> impl IntoView {
    let list = ListState::new();
    let notifier = use_notifier();
    let caps = schema.capabilities;
    list.fetch(schema);

    let base = format!("/catalog/{}", schema.key);

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{schema.list_name}</h1>
                    <span class="page__count">{move || list.rows.with(Vec::len)}</span>
                </div>
                <div class="page__header-right">
                    {caps.create.then(|| view! {
                        <A href=format!("{}/new", base) attr:class="button button--primary">
                            {icon("plus")}
                            {format!(" Add {}", schema.element_name)}
                        </A>
                    })}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.fetch(schema)
                        disabled=Signal::derive(move || list.loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    {caps.export.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                list.rows.with_untracked(|rows| {
                                    export_rows(schema, rows, schema.list_columns, notifier)
                                })
                            }
                            disabled=Signal::derive(move || list.rows.with(Vec::is_empty))
                        >
                            {icon("download")}
                            " Export"
                        </Button>
                    })}
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
                            {schema
                                .list_columns
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
                                    let item = format!("/catalog/{}/{}", schema.key, urlencoding::encode(&id));
                                    let delete_id = id.clone();
                                    view! {
                                        <TableRow>
                                            {schema
                                                .list_columns
                                                .iter()
                                                .map(|c| {
                                                    let text = cell_text(schema, &row, c);
                                                    view! { <TableCell>{text}</TableCell> }
                                                })
                                                .collect_view()}
                                            <TableCell>
                                                <div class="table__actions">
                                                    <A href=item.clone() attr:class="button button--ghost" attr:title="View">
                                                        {icon("eye")}
                                                    </A>
                                                    {caps.edit.then(|| view! {
                                                        <A href=format!("{}/edit", item) attr:class="button button--ghost" attr:title="Edit">
                                                            {icon("edit")}
                                                        </A>
                                                    })}
                                                    {caps.delete.then(|| view! {
                                                        <button
                                                            class="button button--ghost button--danger"
                                                            title="Delete"
                                                            on:click=move |_| delete_record(schema, delete_id.clone(), list, notifier)
                                                        >
                                                            {icon("delete")}
                                                        </button>
                                                    })}
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
    use contracts::domain::a006_topic;
    use serde_json::json;

    #[test]
    fn test_csv_table_uses_labels_and_cells() {
        let schema = &a006_topic::schema::SCHEMA;
        let rows = vec![json!({"TopicID": 1, "Title": "Milad", "Slug": "milad", "CategoryName": "Naat"})];
        let table = csv_table(schema, &rows, &["Title", "CategoryName"]);
        assert_eq!(table.headers, vec!["Title".to_string(), "Category".to_string()]);
        assert_eq!(table.rows, vec![vec!["Milad".to_string(), "Naat".to_string()]]);
    }

    #[test]
    fn test_list_state_is_cancelled_once_page_is_gone() {
        let owner = Owner::new();
        let list = owner.with(ListState::new);
        assert!(!list.is_cancelled());

        owner.cleanup();
        assert!(list.is_cancelled());
    }
}
