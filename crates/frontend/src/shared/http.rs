//! REST collaborator client
//!
//! Every call attaches the session bearer token when one is stored, is bounded
//! by `[api] timeout_ms`, and maps non-success answers onto `RequestError`.

use contracts::domain::common::{rows_from_json, ApiResponse};
use contracts::shared::form::{RequestError, SubmitMethod};
use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use std::future::Future;
use web_sys::{File, FormData};

use super::api_utils::api_url;
use super::config::app_config;
use crate::system::auth::storage;

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn builder_for(method: SubmitMethod, url: &str) -> RequestBuilder {
    let builder = match method {
        SubmitMethod::Post => Request::post(url),
        SubmitMethod::Put => Request::put(url),
    };
    authorized(builder)
}

fn transport(e: gloo_net::Error) -> RequestError {
    RequestError::Transport(e.to_string())
}

async fn with_timeout<T, F>(request: F) -> Result<T, RequestError>
where
    F: Future<Output = Result<T, RequestError>>,
{
    let request = Box::pin(request);
    let timer = Box::pin(TimeoutFuture::new(app_config().api.timeout_ms));
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(RequestError::Timeout),
    }
}

/// Body of a 2xx answer; `Null` when the body is empty
async fn read_body(response: Response) -> Result<Value, RequestError> {
    let status = response.status();
    let text = response.text().await.map_err(transport)?;
    classify(status, &text)
}

/// Status and raw body to a JSON value or the matching `RequestError`.
/// Error bodies keep the server's `message` / `error` text.
fn classify(status: u16, text: &str) -> Result<Value, RequestError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiResponse>(text)
            .ok()
            .and_then(|r| r.reported_message().map(str::to_string));
        return Err(if status == 404 {
            RequestError::NotFound { message }
        } else {
            RequestError::Status { status, message }
        });
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| RequestError::Decode(e.to_string()))
}

fn into_api_response(body: Value) -> Result<ApiResponse, RequestError> {
    if body.is_null() {
        return Ok(ApiResponse::ok());
    }
    serde_json::from_value(body).map_err(|e| RequestError::Decode(e.to_string()))
}

/// `GET <path>` as raw JSON
pub async fn get_json(path: &str) -> Result<Value, RequestError> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    with_timeout(async {
        let response = authorized(Request::get(&url)).send().await.map_err(transport)?;
        read_body(response).await
    })
    .await
}

/// `GET <path>` as a list of rows, bare array or `{data: [...]}`
pub async fn get_rows(path: &str) -> Result<Vec<Value>, RequestError> {
    get_json(path).await.map(rows_from_json)
}

pub async fn send_json(
    method: SubmitMethod,
    path: &str,
    body: &Value,
) -> Result<ApiResponse, RequestError> {
    let url = api_url(path);
    log::debug!("{:?} {} (json)", method, url);
    with_timeout(async {
        let request = builder_for(method, &url)
            .json(body)
            .map_err(|e| RequestError::Transport(format!("Failed to serialize request: {}", e)))?;
        let response = request.send().await.map_err(transport)?;
        into_api_response(read_body(response).await?)
    })
    .await
}

/// Multipart body: scalar fields first, then one part per attached file
pub fn build_form_data(
    fields: &[(String, String)],
    files: &[(&'static str, File)],
) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create FormData: {:?}", e))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| format!("Failed to append {}: {:?}", name, e))?;
    }
    for (part, file) in files {
        form.append_with_blob_and_filename(part, file, &file.name())
            .map_err(|e| format!("Failed to append file {}: {:?}", part, e))?;
    }
    Ok(form)
}

pub async fn send_multipart(
    method: SubmitMethod,
    path: &str,
    form: FormData,
) -> Result<ApiResponse, RequestError> {
    let url = api_url(path);
    log::debug!("{:?} {} (multipart)", method, url);
    with_timeout(async {
        let request = builder_for(method, &url)
            .body(form)
            .map_err(|e| RequestError::Transport(format!("Failed to build request: {}", e)))?;
        let response = request.send().await.map_err(transport)?;
        into_api_response(read_body(response).await?)
    })
    .await
}

pub async fn delete(path: &str) -> Result<ApiResponse, RequestError> {
    let url = api_url(path);
    log::debug!("DELETE {}", url);
    with_timeout(async {
        let response = authorized(Request::delete(&url))
            .send()
            .await
            .map_err(transport)?;
        into_api_response(read_body(response).await?)
    })
    .await
}

/// User-facing text for a failed request
pub fn describe(err: &RequestError) -> String {
    match err.reported_message() {
        Some(message) => message.to_string(),
        None => err.to_string(),
    }
}
