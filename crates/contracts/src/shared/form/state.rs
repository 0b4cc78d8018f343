use serde_json::Value;
use std::collections::BTreeMap;

use super::errors::{FieldErrors, FormError, RequestError};
use super::record::FormRecord;
use crate::domain::common::{ApiResponse, LookupList};
use crate::shared::metadata::{EntitySchema, FieldKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMethod {
    Post,
    Put,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    /// Scalar fields plus the names of the file parts to append
    Multipart {
        fields: Vec<(String, String)>,
        files: Vec<&'static str>,
    },
}

/// What the caller has to send for one submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub method: SubmitMethod,
    pub path: String,
    pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record was reset for the next entry
    Created { message: String },
    /// Form is closed; the caller navigates back to the list
    Updated { message: String },
    /// Record kept as entered so the user can retry
    Failed { message: String },
    /// No submission was pending
    Ignored,
}

/// Sans-IO state of one create/edit form.
///
/// The owner performs the requests `FormState` asks for and feeds the
/// results back through `apply_*` / `finish_submit`.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: &'static EntitySchema,
    mode: FormMode,
    record: FormRecord,
    lookups: BTreeMap<&'static str, LookupList>,
    errors: FieldErrors,
    submitting: bool,
    loading: bool,
    closed: bool,
}

impl FormState {
    pub fn new(schema: &'static EntitySchema, mode: FormMode) -> Self {
        let lookups = schema
            .references()
            .map(|(field, source)| (field.name, source.build(&[])))
            .collect();
        let loading = matches!(mode, FormMode::Edit { .. });

        Self {
            schema,
            mode,
            record: FormRecord::empty(schema),
            lookups,
            errors: FieldErrors::new(),
            submitting: false,
            loading,
            closed: false,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn value(&self, name: &str) -> &str {
        self.record.get(name)
    }

    pub fn lookup(&self, field: &str) -> Option<&LookupList> {
        self.lookups.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_editable(&self) -> bool {
        !(self.loading || self.submitting || self.closed)
    }

    // ------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------

    /// Lookup lists still to be fetched: (reference field, endpoint)
    pub fn pending_lookups(&self) -> Vec<(&'static str, &'static str)> {
        self.schema
            .references()
            .filter_map(|(field, source)| source.remote_path().map(|path| (field.name, path)))
            .collect()
    }

    /// Store a fetched lookup list. A failed fetch leaves that one
    /// dropdown empty and the rest of the form usable.
    pub fn apply_lookup(&mut self, field: &str, rows: Result<Vec<Value>, RequestError>) {
        let Some((field, source)) = self.schema.references().find(|(f, _)| f.name == field)
        else {
            return;
        };
        let list = match rows {
            Ok(rows) => source.build(&rows),
            Err(_) => LookupList::default(),
        };
        self.lookups.insert(field.name, list);
    }

    /// Replace the record with the fetched entity. On failure the form
    /// closes; nothing may be edited without a loaded record.
    pub fn apply_loaded(&mut self, result: Result<Value, RequestError>) -> Result<(), RequestError> {
        self.loading = false;
        match result {
            Ok(row) => {
                self.record = FormRecord::from_json(self.schema, &row);
                Ok(())
            }
            Err(e) => {
                self.closed = true;
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        if !self.is_editable() {
            return Err(FormError::Locked);
        }
        let schema = self.schema;
        let field = schema
            .field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let value = value.into();

        if let FieldKind::Reference { name_field, .. } = field.kind {
            let display = self
                .lookups
                .get(field.name)
                .map(|list| list.name_for(&value))
                .unwrap_or_default();
            self.record.set(name_field, display);
        }

        for (derived, derivation) in schema.derived_from(field.name) {
            self.record.set(derived.name, derivation.apply(&value));
            self.errors.remove(derived.name);
        }

        self.record.set(field.name, value);
        self.errors.remove(field.name);
        Ok(())
    }

    /// Required fields that are blank after trimming
    pub fn validate(&self) -> FieldErrors {
        self.schema
            .fields
            .iter()
            .filter(|f| f.required && self.record.get(f.name).trim().is_empty())
            .map(|f| (f.name.to_string(), format!("{} is required", f.label)))
            .collect()
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Start a submission. `attached` names the file parts the user picked;
    /// any of them switches the body to multipart.
    pub fn begin_submit(&mut self, attached: &[&str]) -> Result<SubmitRequest, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }
        if self.loading || self.closed {
            return Err(FormError::Locked);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(FormError::Validation(errors));
        }
        self.errors.clear();
        self.submitting = true;

        let (method, path) = match &self.mode {
            FormMode::Create => (SubmitMethod::Post, self.schema.collection_path.to_string()),
            FormMode::Edit { id } => (SubmitMethod::Put, self.schema.item_path(id)),
        };

        let files: Vec<&'static str> = self
            .schema
            .attachments
            .iter()
            .filter(|a| attached.contains(&a.part))
            .map(|a| a.part)
            .collect();

        let payload = if files.is_empty() {
            Payload::Json(self.record.to_json(self.schema))
        } else {
            Payload::Multipart {
                fields: self.record.to_form_fields(self.schema),
                files,
            }
        };

        Ok(SubmitRequest {
            method,
            path,
            payload,
        })
    }

    /// Feed back the collaborator's answer to the pending submission
    pub fn finish_submit(&mut self, result: Result<ApiResponse, RequestError>) -> SubmitOutcome {
        if !self.submitting {
            return SubmitOutcome::Ignored;
        }
        self.submitting = false;

        let element = self.schema.element_name;
        match result {
            Ok(resp) if resp.success => match self.mode {
                FormMode::Create => {
                    self.reset();
                    SubmitOutcome::Created {
                        message: format!("{} created successfully!", element),
                    }
                }
                FormMode::Edit { .. } => {
                    self.closed = true;
                    SubmitOutcome::Updated {
                        message: format!("{} updated successfully!", element),
                    }
                }
            },
            Ok(resp) => SubmitOutcome::Failed {
                message: resp
                    .reported_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.failure_message()),
            },
            Err(e) => SubmitOutcome::Failed {
                message: e
                    .reported_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.failure_message()),
            },
        }
    }

    fn failure_message(&self) -> String {
        let action = match self.mode {
            FormMode::Create => "create",
            FormMode::Edit { .. } => "update",
        };
        format!(
            "Failed to {} {}",
            action,
            self.schema.element_name.to_lowercase()
        )
    }

    /// Back to the initial empty record; lookups stay loaded
    fn reset(&mut self) {
        self.record = FormRecord::empty(self.schema);
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::LookupSource;
    use crate::shared::metadata::{AttachmentSpec, Capabilities, FieldSchema};
    use serde_json::json;

    const CATEGORIES: LookupSource = LookupSource::Remote {
        path: "/api/categories",
        id_keys: &["CategoryID"],
        name_keys: &["Name"],
    };

    const LANGUAGES: LookupSource = LookupSource::Static(&[(1, "Urdu"), (2, "English")]);

    static TOPIC: EntitySchema = EntitySchema {
        key: "topics",
        collection_path: "/api/topics",
        id_keys: &["TopicID"],
        element_name: "Topic",
        list_name: "Topics",
        fields: &[
            FieldSchema::text("Title", "Title").required(),
            FieldSchema::slug("Slug", "Slug", "Title").required(),
            FieldSchema::reference("CategoryID", "Category", "CategoryName", CATEGORIES)
                .required(),
            FieldSchema::reference("LanguageID", "Language", "LanguageName", LANGUAGES),
            FieldSchema::long_text("Description", "Description"),
        ],
        attachments: &[AttachmentSpec {
            part: "image",
            label: "Cover Image",
            accept: "image/*",
        }],
        list_columns: &["Title"],
        capabilities: Capabilities::FULL,
    };

    fn filled_create_form() -> FormState {
        let mut form = FormState::new(&TOPIC, FormMode::Create);
        form.apply_lookup(
            "CategoryID",
            Ok(vec![
                json!({"CategoryID": 1, "Name": "Naat"}),
                json!({"CategoryID": 2, "Name": "Hamd"}),
            ]),
        );
        form.set_field("Title", "Madinah Ki Galiyan").unwrap();
        form.set_field("CategoryID", "2").unwrap();
        form
    }

    #[test]
    fn test_pending_lookups_skip_static_sources() {
        let form = FormState::new(&TOPIC, FormMode::Create);
        assert_eq!(form.pending_lookups(), vec![("CategoryID", "/api/categories")]);
        assert_eq!(form.lookup("LanguageID").map(|l| l.items().len()), Some(2));
    }

    #[test]
    fn test_reference_name_follows_id() {
        let mut form = filled_create_form();
        assert_eq!(form.value("CategoryName"), "Hamd");

        form.set_field("CategoryID", "9").unwrap();
        assert_eq!(form.value("CategoryName"), "");

        form.set_field("LanguageID", "2").unwrap();
        assert_eq!(form.value("LanguageName"), "English");

        form.set_field("LanguageID", "").unwrap();
        assert_eq!(form.value("LanguageName"), "");
    }

    #[test]
    fn test_failed_lookup_degrades_to_empty_dropdown() {
        let mut form = FormState::new(&TOPIC, FormMode::Create);
        form.apply_lookup("CategoryID", Err(RequestError::Transport("offline".into())));
        assert!(form.lookup("CategoryID").unwrap().is_empty());

        form.set_field("CategoryID", "1").unwrap();
        assert_eq!(form.value("CategoryID"), "1");
        assert_eq!(form.value("CategoryName"), "");
    }

    #[test]
    fn test_title_derives_slug_until_next_title_change() {
        let mut form = filled_create_form();
        assert_eq!(form.value("Slug"), "madinah-ki-galiyan");

        form.set_field("Slug", "custom-slug").unwrap();
        assert_eq!(form.value("Slug"), "custom-slug");
        assert_eq!(form.value("Title"), "Madinah Ki Galiyan");

        form.set_field("Title", "Hello, World!  Foo").unwrap();
        assert_eq!(form.value("Slug"), "hello-world-foo");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut form = FormState::new(&TOPIC, FormMode::Create);
        assert_eq!(
            form.set_field("Nope", "x"),
            Err(FormError::UnknownField("Nope".into()))
        );
    }

    #[test]
    fn test_validate_reports_missing_required_fields() {
        let mut form = FormState::new(&TOPIC, FormMode::Create);
        let errors = form.validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("Title").map(String::as_str), Some("Title is required"));

        form.set_field("Title", "   ").unwrap();
        assert!(form.validate().contains_key("Title"));

        let form = filled_create_form();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_invalid_submit_makes_no_request() {
        let mut form = FormState::new(&TOPIC, FormMode::Create);
        match form.begin_submit(&[]) {
            Err(FormError::Validation(errors)) => assert!(errors.contains_key("CategoryID")),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(!form.is_submitting());
        assert_eq!(form.error("Title"), Some("Title is required"));

        form.set_field("Title", "x").unwrap();
        assert_eq!(form.error("Title"), None);
    }

    #[test]
    fn test_second_submit_while_pending_is_refused() {
        let mut form = filled_create_form();
        let request = form.begin_submit(&[]).unwrap();
        assert_eq!(request.method, SubmitMethod::Post);
        assert_eq!(request.path, "/api/topics");
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit(&[]), Err(FormError::AlreadySubmitting));
        assert_eq!(form.set_field("Title", "changed"), Err(FormError::Locked));
    }

    #[test]
    fn test_json_payload_without_attachments() {
        let mut form = filled_create_form();
        let request = form.begin_submit(&[]).unwrap();
        match request.payload {
            Payload::Json(body) => {
                assert_eq!(body["Title"], json!("Madinah Ki Galiyan"));
                assert_eq!(body["CategoryID"], json!(2));
                assert_eq!(body["CategoryName"], json!("Hamd"));
                assert_eq!(body["LanguageID"], Value::Null);
            }
            other => panic!("expected json, got {:?}", other),
        }
    }

    #[test]
    fn test_multipart_payload_with_known_attachment() {
        let mut form = filled_create_form();
        let request = form.begin_submit(&["image", "unknown"]).unwrap();
        match request.payload {
            Payload::Multipart { fields, files } => {
                assert_eq!(files, vec!["image"]);
                assert!(fields.contains(&("CategoryID".to_string(), "2".to_string())));
            }
            other => panic!("expected multipart, got {:?}", other),
        }
    }

    #[test]
    fn test_successful_create_resets_record() {
        let mut form = filled_create_form();
        form.begin_submit(&[]).unwrap();
        let outcome = form.finish_submit(Ok(ApiResponse::ok()));

        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                message: "Topic created successfully!".into()
            }
        );
        assert_eq!(form.record(), &FormRecord::empty(&TOPIC));
        assert!(!form.is_submitting());
        assert!(!form.lookup("CategoryID").unwrap().is_empty());
        assert!(form.is_editable());
    }

    #[test]
    fn test_failed_submit_keeps_record() {
        let mut form = filled_create_form();
        let before = form.record().clone();
        form.begin_submit(&[]).unwrap();

        let outcome = form.finish_submit(Err(RequestError::Transport("connection reset".into())));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "Failed to create topic".into()
            }
        );
        assert_eq!(form.record(), &before);
        assert!(!form.is_submitting());
        assert!(form.begin_submit(&[]).is_ok());
    }

    #[test]
    fn test_unsuccessful_envelope_surfaces_server_message() {
        let mut form = filled_create_form();
        form.begin_submit(&[]).unwrap();
        let outcome = form.finish_submit(Ok(ApiResponse::failed("Slug already exists")));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "Slug already exists".into()
            }
        );
    }

    #[test]
    fn test_status_error_surfaces_server_message() {
        let mut form = filled_create_form();
        form.begin_submit(&[]).unwrap();
        let outcome = form.finish_submit(Err(RequestError::Status {
            status: 400,
            message: Some("Invalid category".into()),
        }));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "Invalid category".into()
            }
        );
    }

    #[test]
    fn test_finish_without_pending_submit_is_ignored() {
        let mut form = filled_create_form();
        assert_eq!(form.finish_submit(Ok(ApiResponse::ok())), SubmitOutcome::Ignored);
        assert_eq!(form.value("Title"), "Madinah Ki Galiyan");
    }

    #[test]
    fn test_edit_mode_loads_then_closes_after_update() {
        let mut form = FormState::new(&TOPIC, FormMode::Edit { id: "5".into() });
        assert!(form.is_loading());
        assert_eq!(form.set_field("Title", "x"), Err(FormError::Locked));
        assert_eq!(form.begin_submit(&[]), Err(FormError::Locked));

        form.apply_loaded(Ok(json!({
            "TopicID": 5,
            "Title": "Old",
            "Slug": "old",
            "CategoryID": 1,
            "CategoryName": "Naat",
            "Description": null
        })))
        .unwrap();
        assert!(!form.is_loading());
        assert_eq!(form.value("CategoryID"), "1");
        assert_eq!(form.value("Description"), "");

        form.set_field("Title", "New").unwrap();
        let request = form.begin_submit(&[]).unwrap();
        assert_eq!(request.method, SubmitMethod::Put);
        assert_eq!(request.path, "/api/topics/5");

        let outcome = form.finish_submit(Ok(ApiResponse::ok()));
        assert_eq!(
            outcome,
            SubmitOutcome::Updated {
                message: "Topic updated successfully!".into()
            }
        );
        assert!(form.is_closed());
        assert_eq!(form.set_field("Title", "after"), Err(FormError::Locked));
        assert_eq!(form.value("Title"), "New");
    }

    #[test]
    fn test_failed_load_closes_form() {
        let mut form = FormState::new(&TOPIC, FormMode::Edit { id: "404".into() });
        let result = form.apply_loaded(Err(RequestError::NotFound { message: None }));
        assert_eq!(result, Err(RequestError::NotFound { message: None }));
        assert!(form.is_closed());
        assert!(!form.is_loading());
        assert_eq!(form.set_field("Title", "x"), Err(FormError::Locked));
    }

    #[test]
    fn test_edit_failure_message_uses_update() {
        let mut form = FormState::new(&TOPIC, FormMode::Edit { id: "5".into() });
        form.apply_loaded(Ok(json!({"Title": "T", "Slug": "t", "CategoryID": 1})))
            .unwrap();
        form.begin_submit(&[]).unwrap();
        assert_eq!(
            form.finish_submit(Err(RequestError::Timeout)),
            SubmitOutcome::Failed {
                message: "Failed to update topic".into()
            }
        );
        assert!(!form.is_closed());
    }
}
