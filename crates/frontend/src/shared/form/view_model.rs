use contracts::domain::common::LookupItem;
use contracts::shared::form::{
    FormError, FormMode, FormState, Payload, RequestError, SubmitOutcome, SubmitRequest,
};
use contracts::shared::metadata::EntitySchema;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use web_sys::File;

use crate::shared::cancel::{stored_is_cancelled, CancelToken};
use crate::shared::http;
use crate::shared::notify::{use_notifier, Notifier};

/// Reactive wrapper around `FormState`: performs the requests the state
/// asks for and feeds the answers back, unless the page is gone by then.
#[derive(Clone, Copy)]
pub struct FormController {
    pub state: RwSignal<FormState>,
    /// Bumped after a successful create so file inputs are rebuilt empty
    pub generation: RwSignal<u32>,
    files: StoredValue<Vec<(&'static str, File)>, LocalStorage>,
    cancel: StoredValue<CancelToken>,
    notifier: Notifier,
}

impl FormController {
    pub fn new(schema: &'static EntitySchema, mode: FormMode) -> Self {
        Self {
            state: RwSignal::new(FormState::new(schema, mode)),
            generation: RwSignal::new(0),
            files: StoredValue::new_local(Vec::new()),
            cancel: StoredValue::new(CancelToken::for_current_owner()),
            notifier: use_notifier(),
        }
    }

    fn schema(&self) -> &'static EntitySchema {
        self.state.with_untracked(|s| s.schema())
    }

    fn update_if_live<R>(&self, update: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        update_if_live(self.cancel, self.state, update)
    }

    // ------------------------------------------------------------------
    // Reads for the view
    // ------------------------------------------------------------------

    pub fn value(&self, name: &str) -> String {
        self.state.with(|s| s.value(name).to_string())
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.state.with(|s| s.error(name).map(str::to_string))
    }

    pub fn lookup_items(&self, field: &str) -> Vec<LookupItem> {
        self.state.with(|s| {
            s.lookup(field)
                .map(|list| list.items().to_vec())
                .unwrap_or_default()
        })
    }

    pub fn is_editable(&self) -> bool {
        self.state.with(|s| s.is_editable())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn is_edit_mode(&self) -> bool {
        self.state.with(|s| matches!(s.mode(), FormMode::Edit { .. }))
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Fetch every lookup list and, in edit mode, the record itself.
    /// `on_load_failed` runs when the record cannot be loaded.
    pub fn initialize(&self, on_load_failed: Rc<dyn Fn(())>) {
        let this = *self;
        let schema = self.schema();

        for (field, path) in self.state.with_untracked(|s| s.pending_lookups()) {
            spawn_local(async move {
                let rows = http::get_rows(path).await;
                if let Err(e) = &rows {
                    log::warn!("Lookup {} for {} unavailable: {}", path, field, e);
                }
                this.update_if_live(|s| s.apply_lookup(field, rows));
            });
        }

        let FormMode::Edit { id } = self.state.with_untracked(|s| s.mode().clone()) else {
            return;
        };
        let path = schema.item_path(&id);
        spawn_local(async move {
            let result = http::get_json(&path).await;
            let Some(loaded) = this.update_if_live(|s| s.apply_loaded(result)) else {
                log::debug!("Discarding {} load after unmount", path);
                return;
            };
            if let Err(e) = loaded {
                let title = format!("Failed to load {}", schema.element_name.to_lowercase());
                this.notifier.error(&title, &load_failure_text(&e));
                on_load_failed(());
            }
        });
    }

    pub fn set_field(&self, name: &'static str, value: String) {
        self.state.update(|s| {
            if let Err(e) = s.set_field(name, value) {
                log::debug!("Ignored input for {}: {}", name, e);
            }
        });
    }

    /// Remember (or forget) the file picked for an attachment part
    pub fn attach(&self, part: &'static str, file: Option<File>) {
        self.files.update_value(|files| {
            files.retain(|(p, _)| *p != part);
            if let Some(file) = file {
                files.push((part, file));
            }
        });
    }

    /// Validate and send the record. A call while a submission is pending
    /// does nothing. `on_updated` runs after a successful edit.
    pub fn submit(&self, on_updated: Rc<dyn Fn(())>) {
        let attached: Vec<&'static str> = self
            .files
            .with_value(|files| files.iter().map(|(part, _)| *part).collect());

        let mut begun = Err(FormError::Locked);
        self.state.update(|s| begun = s.begin_submit(&attached));
        let request = match begun {
            Ok(request) => request,
            Err(FormError::Validation(errors)) => {
                let missing: Vec<String> = errors.into_values().collect();
                self.notifier
                    .warning("Please fill all required fields", &missing.join(", "));
                return;
            }
            Err(e) => {
                log::debug!("Submit ignored: {}", e);
                return;
            }
        };

        let this = *self;
        spawn_local(async move {
            log::info!("Submitting {:?} {}", request.method, request.path);
            let result = this.send(request).await;
            let Some(outcome) = this.update_if_live(|s| s.finish_submit(result)) else {
                log::debug!("Discarding submit response after unmount");
                return;
            };
            match outcome {
                SubmitOutcome::Created { message } => {
                    this.files.set_value(Vec::new());
                    this.generation.update(|g| *g += 1);
                    this.notifier.success("Success", &message);
                }
                SubmitOutcome::Updated { message } => {
                    this.notifier.success("Success", &message);
                    on_updated(());
                }
                SubmitOutcome::Failed { message } => this.notifier.error("Error", &message),
                SubmitOutcome::Ignored => {}
            }
        });
    }

    async fn send(
        &self,
        request: SubmitRequest,
    ) -> Result<contracts::domain::common::ApiResponse, RequestError> {
        match request.payload {
            Payload::Json(body) => http::send_json(request.method, &request.path, &body).await,
            Payload::Multipart { fields, files } => {
                let picked: Vec<(&'static str, File)> = self.files.with_value(|all| {
                    all.iter()
                        .filter(|(part, _)| files.contains(part))
                        .cloned()
                        .collect()
                });
                let form =
                    http::build_form_data(&fields, &picked).map_err(RequestError::Transport)?;
                http::send_multipart(request.method, &request.path, form).await
            }
        }
    }
}

/// Apply `update` unless the page was cancelled or its state already disposed
fn update_if_live<R>(
    cancel: StoredValue<CancelToken>,
    state: RwSignal<FormState>,
    update: impl FnOnce(&mut FormState) -> R,
) -> Option<R> {
    if stored_is_cancelled(cancel) {
        return None;
    }
    state.try_update(update)
}

fn load_failure_text(err: &RequestError) -> String {
    match err {
        RequestError::NotFound { message: None } => "The record does not exist.".to_string(),
        other => http::describe(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_topic::schema::SCHEMA as TOPIC;
    use contracts::domain::common::ApiResponse;

    fn pending_topic() -> FormState {
        let mut form = FormState::new(&TOPIC, FormMode::Create);
        form.set_field("Title", "Madinah Ki Galiyan").unwrap();
        form.set_field("CategoryID", "2").unwrap();
        form.begin_submit(&[]).unwrap();
        form
    }

    #[test]
    fn test_late_response_after_cancel_leaves_state_untouched() {
        let owner = Owner::new();
        let (token, cancel, state) = owner.with(|| {
            let token = CancelToken::new();
            let cancel = StoredValue::new(token.clone());
            (token, cancel, RwSignal::new(pending_topic()))
        });
        let before = state.with_untracked(|s| s.record().clone());

        token.cancel();
        let applied = update_if_live(cancel, state, |s| s.finish_submit(Ok(ApiResponse::ok())));

        assert_eq!(applied, None);
        assert!(state.with_untracked(|s| s.is_submitting()));
        assert_eq!(state.with_untracked(|s| s.record().clone()), before);
        owner.cleanup();
    }

    #[test]
    fn test_live_response_is_applied() {
        let owner = Owner::new();
        let (cancel, state) = owner.with(|| {
            (
                StoredValue::new(CancelToken::new()),
                RwSignal::new(pending_topic()),
            )
        });

        let applied = update_if_live(cancel, state, |s| s.finish_submit(Ok(ApiResponse::ok())));

        assert!(matches!(applied, Some(SubmitOutcome::Created { .. })));
        assert!(!state.with_untracked(|s| s.is_submitting()));
        assert_eq!(state.with_untracked(|s| s.value("Title").to_string()), "");
        owner.cleanup();
    }

    #[test]
    fn test_response_after_owner_disposal_is_dropped() {
        let owner = Owner::new();
        let (cancel, state) = owner.with(|| {
            (
                StoredValue::new(CancelToken::for_current_owner()),
                RwSignal::new(pending_topic()),
            )
        });

        owner.cleanup();
        let applied = update_if_live(cancel, state, |s| s.finish_submit(Ok(ApiResponse::ok())));
        assert_eq!(applied, None);
    }

    #[test]
    fn test_missing_record_text() {
        assert_eq!(
            load_failure_text(&RequestError::NotFound { message: None }),
            "The record does not exist."
        );
        let named = RequestError::NotFound {
            message: Some("Book 7 was deleted".into()),
        };
        assert_eq!(load_failure_text(&named), "Book 7 was deleted");
    }
}
