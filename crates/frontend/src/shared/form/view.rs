use contracts::domain::common::LookupId;
use contracts::shared::form::FormMode;
use contracts::shared::metadata::{AttachmentSpec, EntitySchema, FieldKind, FieldSchema};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;
use thaw::*;
use web_sys::HtmlInputElement;

use super::view_model::FormController;
use crate::shared::date_utils::date_input_value;
use crate::shared::icons::icon;

/// Create or edit screen for any entity schema
#[component]
pub fn EntityForm(schema: &'static EntitySchema, mode: FormMode) -> impl IntoView {
    let ctrl = FormController::new(schema, mode);
    let list_href = format!("/catalog/{}", schema.key);

    let navigate = use_navigate();
    let back_to_list: Rc<dyn Fn(())> = {
        let list_href = list_href.clone();
        Rc::new(move |_| navigate(&list_href, Default::default()))
    };
    ctrl.initialize(back_to_list.clone());

    let title = move || {
        if ctrl.is_edit_mode() {
            format!("Edit {}", schema.element_name)
        } else {
            format!("Add New {}", schema.element_name)
        }
    };

    let on_submit = {
        let back_to_list = back_to_list.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            ctrl.submit(back_to_list.clone());
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <A href=list_href.clone() attr:class="button button--secondary">
                        {icon("arrow-left")}
                        " Back to list"
                    </A>
                </div>
            </div>

            <Show when=move || ctrl.is_loading()>
                <div class="page__loading">
                    <Spinner />
                </div>
            </Show>

            <form class="details-form" on:submit=on_submit>
                {schema
                    .fields
                    .iter()
                    .map(|field| field_row(ctrl, field))
                    .collect_view()}

                {move || {
                    ctrl.generation.get();
                    schema
                        .attachments
                        .iter()
                        .map(|spec| attachment_row(ctrl, spec))
                        .collect_view()
                }}

                <div class="details-actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || !ctrl.is_editable()
                    >
                        {icon("save")}
                        {move || if ctrl.is_submitting() { " Saving..." } else { " Save" }}
                    </button>
                    <A href=list_href attr:class="button button--secondary">
                        {icon("cancel")}
                        " Cancel"
                    </A>
                </div>
            </form>
        </div>
    }
}

fn field_row(ctrl: FormController, field: &'static FieldSchema) -> impl IntoView {
    let name = field.name;
    view! {
        <div class="form-group" class:form-group--invalid=move || ctrl.error(name).is_some()>
            <label for=name>
                {field.label}
                {field.required.then(|| view! { <span class="form-group__required">" *"</span> })}
            </label>
            {field_input(ctrl, field)}
            {move || ctrl.error(name).map(|e| view! { <div class="form-group__error">{e}</div> })}
        </div>
    }
}

fn field_input(ctrl: FormController, field: &'static FieldSchema) -> AnyView {
    let name = field.name;
    let disabled = move || !ctrl.is_editable();

    match field.kind {
        FieldKind::LongText => view! {
            <textarea
                id=name
                rows="6"
                prop:value=move || ctrl.value(name)
                on:input=move |ev| ctrl.set_field(name, event_target_value(&ev))
                disabled=disabled
            />
        }
        .into_any(),
        FieldKind::Reference { .. } => view! {
            <select id=name on:change=move |ev| ctrl.set_field(name, event_target_value(&ev)) disabled=disabled>
                <option value="">{format!("Select {}", field.label)}</option>
                {move || {
                    let current = LookupId::parse(&ctrl.value(name));
                    ctrl.lookup_items(name)
                        .into_iter()
                        .map(|item| {
                            let selected = current.as_ref() == Some(&item.id);
                            view! {
                                <option value=item.id.to_string() selected=selected>
                                    {item.name}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        FieldKind::Date => view! {
            <input
                type="date"
                id=name
                prop:value=move || date_input_value(&ctrl.value(name))
                on:input=move |ev| ctrl.set_field(name, event_target_value(&ev))
                disabled=disabled
            />
        }
        .into_any(),
        FieldKind::Number => view! {
            <input
                type="number"
                id=name
                prop:value=move || ctrl.value(name)
                on:input=move |ev| ctrl.set_field(name, event_target_value(&ev))
                disabled=disabled
            />
        }
        .into_any(),
        FieldKind::Color => view! {
            <input
                type="color"
                id=name
                prop:value=move || ctrl.value(name)
                on:input=move |ev| ctrl.set_field(name, event_target_value(&ev))
                disabled=disabled
            />
        }
        .into_any(),
        FieldKind::Text | FieldKind::Derived { .. } => view! {
            <input
                type="text"
                id=name
                prop:value=move || ctrl.value(name)
                on:input=move |ev| ctrl.set_field(name, event_target_value(&ev))
                disabled=disabled
            />
        }
        .into_any(),
    }
}

fn attachment_row(ctrl: FormController, spec: &'static AttachmentSpec) -> impl IntoView {
    let part = spec.part;
    view! {
        <div class="form-group">
            <label for=part>{spec.label}</label>
            <input
                type="file"
                id=part
                accept=spec.accept
                disabled=move || !ctrl.is_editable()
                on:change=move |ev| {
                    let input = event_target::<HtmlInputElement>(&ev);
                    let file = input.files().and_then(|list| list.get(0));
                    ctrl.attach(part, file);
                }
            />
        </div>
    }
}
