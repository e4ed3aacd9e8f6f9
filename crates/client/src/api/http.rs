use reqwest::{multipart, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use shared_types::filters::list_request_query;
use shared_types::{
    ApiEnvelope, AppError, Notice, NoticeDetailData, NoticeFilters, NoticePage, NoticeStatus,
    NoticeSubmission, DETAIL_FAILED_MESSAGE, DRAFTS_FAILED_MESSAGE, LIST_FAILED_MESSAGE,
    PUBLISH_FAILED_MESSAGE, STATUS_FAILED_MESSAGE, SUBMIT_FAILED_MESSAGE, UNEXPECTED_MESSAGE,
};

use super::{paths, NoticeApi, SubmitEndpoint};
use crate::config::ApiConfig;

/// `reqwest`-backed implementation of [`NoticeApi`].
#[derive(Debug, Clone)]
pub struct NoticeClient {
    http: Client,
    config: ApiConfig,
}

impl NoticeClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: build_http(config),
            config: config.clone(),
        }
    }

    /// Client for the process-wide config (see [`crate::config::load`]).
    pub fn from_env() -> Self {
        Self::new(crate::config::load())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
        fallback: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(self.config.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| transport_error(e, fallback))?;

        let envelope: ApiEnvelope<T> = read_envelope(response, fallback).await?;
        envelope.data.ok_or_else(|| {
            tracing::error!(path, "success envelope without data");
            AppError::unexpected(fallback)
        })
    }

    async fn patch(&self, path: &str, body: Value, fallback: &str) -> Result<(), AppError> {
        let response = self
            .http
            .patch(self.config.url(path))
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(e, fallback))?;

        read_envelope::<Value>(response, fallback).await.map(|_| ())
    }
}

impl NoticeApi for NoticeClient {
    #[tracing::instrument(skip(self, filters))]
    async fn list_notices(
        &self,
        page: Option<u32>,
        filters: &NoticeFilters,
    ) -> Result<NoticePage, AppError> {
        let query = list_request_query(page, filters);
        tracing::debug!(?query, "GET {}", paths::NOTICES);
        self.get_data(paths::NOTICES, &query, LIST_FAILED_MESSAGE).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_drafts(&self, page: Option<u32>) -> Result<NoticePage, AppError> {
        let query = list_request_query(page, &NoticeFilters::default());
        tracing::debug!(?query, "GET {}", paths::DRAFTS);
        self.get_data(paths::DRAFTS, &query, DRAFTS_FAILED_MESSAGE).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_notice(&self, id: &str) -> Result<Notice, AppError> {
        let data: NoticeDetailData = self
            .get_data(&paths::notice(id), &[], DETAIL_FAILED_MESSAGE)
            .await?;
        Ok(data.notice)
    }

    #[tracing::instrument(skip(self, submission), fields(title = %submission.notice_title))]
    async fn submit_notice(
        &self,
        endpoint: SubmitEndpoint,
        submission: &NoticeSubmission,
    ) -> Result<(), AppError> {
        let form = build_form(submission)?;
        let response = self
            .http
            .post(self.config.url(endpoint.path()))
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error(e, SUBMIT_FAILED_MESSAGE))?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::CREATED {
            tracing::info!(%status, ?endpoint, "notice submitted");
            return Ok(());
        }

        let body = read_json_lossy(response).await;
        if status.is_success() {
            tracing::error!(%status, "unexpected success status from submit");
            return Err(AppError::unexpected(UNEXPECTED_MESSAGE));
        }
        let err = AppError::from_response_body(&body, SUBMIT_FAILED_MESSAGE);
        tracing::warn!(%status, kind = %err.kind, "notice submission rejected");
        Err(err)
    }

    #[tracing::instrument(skip(self))]
    async fn set_status(&self, id: &str, status: NoticeStatus) -> Result<(), AppError> {
        self.patch(
            &paths::status(id),
            json!({ "status": status.as_str() }),
            STATUS_FAILED_MESSAGE,
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn publish_draft(&self, id: &str) -> Result<(), AppError> {
        self.patch(&paths::publish_draft(id), json!({}), PUBLISH_FAILED_MESSAGE)
            .await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(config: &ApiConfig) -> Client {
    Client::builder()
        .timeout(config.timeout())
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default http client");
            Client::new()
        })
}

/// The browser's fetch owns timeouts on wasm.
#[cfg(target_arch = "wasm32")]
fn build_http(_config: &ApiConfig) -> Client {
    Client::new()
}

/// Map a failure to obtain any response at all.
fn transport_error(err: reqwest::Error, fallback: &str) -> AppError {
    if err.is_builder() {
        tracing::error!(error = %err, "could not build request");
        return AppError::unexpected(fallback);
    }
    tracing::warn!(error = %err, timeout = err.is_timeout(), "notices api unreachable");
    AppError::connectivity()
}

async fn read_json_lossy(response: Response) -> Value {
    match response.text().await {
        Ok(text) if !text.trim().is_empty() => serde_json::from_str(&text).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

/// Decode a read/mutation response. Success needs a 2xx status plus an
/// envelope with `status == true` and `statusCode == 200`.
async fn read_envelope<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<ApiEnvelope<T>, AppError> {
    let status = response.status();
    let body = read_json_lossy(response).await;

    if status == StatusCode::NOT_FOUND {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback);
        tracing::info!(reason = message, "resource not found");
        return Err(AppError::not_found(message));
    }
    if !status.is_success() {
        let err = AppError::from_response_body(&body, fallback);
        tracing::warn!(%status, reason = %err.message, "request failed");
        return Err(err);
    }

    let envelope: ApiEnvelope<T> = serde_json::from_value(body).map_err(|e| {
        tracing::error!(error = %e, "malformed response envelope");
        AppError::unexpected(fallback)
    })?;

    if envelope.status_code == 404 {
        return Err(AppError::not_found(envelope.message_or(fallback)));
    }
    if !envelope.is_success() {
        let message = envelope.message_or(fallback).to_string();
        tracing::warn!(status_code = envelope.status_code, reason = %message, "unsuccessful envelope");
        return Err(AppError::server(message));
    }
    Ok(envelope)
}

fn build_form(submission: &NoticeSubmission) -> Result<multipart::Form, AppError> {
    let mut form = multipart::Form::new();
    for (name, value) in submission.text_fields() {
        form = form.text(name, value);
    }
    for file in &submission.attachments {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| {
                tracing::error!(error = %e, file = %file.file_name, "invalid attachment mime type");
                AppError::unexpected(UNEXPECTED_MESSAGE)
            })?;
        form = form.part(shared_types::fields::ATTACHMENTS, part);
    }
    Ok(form)
}
