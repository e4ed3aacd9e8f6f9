//! Create-notice form state and its submission workflow.

use chrono::NaiveDate;

use shared_types::{
    fields, AppError, AppErrorKind, AttachmentFile, Department, FieldErrors, NoticeDraft,
    NoticeSubmission, NoticeType, TargetOption, ATTACHMENT_LIMIT_MESSAGE,
};

use crate::api::{NoticeApi, SubmitEndpoint};

/// How a successful submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Published,
    Drafted,
}

impl From<SubmitEndpoint> for SubmitOutcome {
    fn from(endpoint: SubmitEndpoint) -> Self {
        match endpoint {
            SubmitEndpoint::Publish => SubmitOutcome::Published,
            SubmitEndpoint::SaveDraft => SubmitOutcome::Drafted,
        }
    }
}

impl SubmitOutcome {
    pub fn title(&self) -> &'static str {
        match self {
            SubmitOutcome::Published => "Notice Published Successfully",
            SubmitOutcome::Drafted => "Draft Saved Successfully",
        }
    }

    pub fn message(&self, notice_title: &str) -> String {
        let name = if notice_title.trim().is_empty() {
            "Notice"
        } else {
            notice_title
        };
        match self {
            SubmitOutcome::Published => format!(
                "Your notice \"{name}\" has been published and is now visible to all selected departments."
            ),
            SubmitOutcome::Drafted => format!(
                "Your notice \"{name}\" has been saved as a draft. You can publish it later from the drafts page."
            ),
        }
    }
}

/// View-model behind the create-notice page.
///
/// Field errors use the API's field names, so local validation failures and
/// server-side ones land on the same inputs.
#[derive(Debug, Clone, Default)]
pub struct NoticeForm {
    draft: NoticeDraft,
    errors: FieldErrors,
    banner: Option<String>,
    submitting: bool,
    outcome: Option<SubmitOutcome>,
}

impl NoticeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &NoticeDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    /// Page-level message for failures that are not tied to a field.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn outcome(&self) -> Option<SubmitOutcome> {
        self.outcome
    }

    pub fn dismiss_outcome(&mut self) {
        self.outcome = None;
    }

    // ── Field edits ─────────────────────────────────────────────────

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.notice_title = value.into();
    }

    pub fn set_body(&mut self, value: impl Into<String>) {
        self.draft.notice_body = value.into();
    }

    pub fn set_notice_type(&mut self, value: Option<NoticeType>) {
        self.draft.notice_type = value;
    }

    pub fn set_publish_date(&mut self, value: Option<NaiveDate>) {
        self.draft.publish_date = value;
    }

    /// Ignored unless the target is an individual.
    pub fn set_employee_id(&mut self, value: impl Into<String>) {
        if let Some(emp) = self.draft.employee_mut() {
            emp.employee_id = value.into();
        }
    }

    pub fn set_employee_name(&mut self, value: impl Into<String>) {
        if let Some(emp) = self.draft.employee_mut() {
            emp.employee_name = value.into();
        }
    }

    pub fn set_position(&mut self, value: impl Into<String>) {
        if let Some(emp) = self.draft.employee_mut() {
            emp.position = value.into();
        }
    }

    pub fn select_target(&mut self, option: TargetOption) {
        self.draft.select_target(option);
    }

    pub fn remove_department(&mut self, dept: Department) {
        self.draft.remove_department(dept);
    }

    /// Append files, or record the limit error and keep the current list.
    pub fn add_attachments(&mut self, files: Vec<AttachmentFile>) -> bool {
        match self.draft.add_attachments(files) {
            Ok(()) => {
                self.errors.remove(fields::ATTACHMENTS);
                true
            }
            Err(rejected) => {
                tracing::debug!(current = rejected.current, incoming = rejected.incoming, "attachment limit hit");
                self.errors.insert(
                    fields::ATTACHMENTS.to_string(),
                    ATTACHMENT_LIMIT_MESSAGE.to_string(),
                );
                false
            }
        }
    }

    pub fn remove_attachment(&mut self, index: usize) {
        if self.draft.remove_attachment(index).is_some() {
            self.errors.remove(fields::ATTACHMENTS);
        }
    }

    // ── Validation and submission ───────────────────────────────────

    /// Re-run validation, replacing the error map. Returns whether the draft
    /// is submittable.
    pub fn validate(&mut self, today: NaiveDate) -> bool {
        match self.draft.validate(today) {
            Ok(_) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Start a submission: `None` while one is already in flight or when the
    /// draft fails validation (errors are exposed, no request should be made).
    pub fn begin_submit(&mut self, today: NaiveDate) -> Option<NoticeSubmission> {
        if self.submitting {
            tracing::debug!("submission already in flight");
            return None;
        }
        match self.draft.validate(today) {
            Ok(submission) => {
                self.errors.clear();
                self.banner = None;
                self.outcome = None;
                self.submitting = true;
                Some(submission)
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "draft failed validation");
                self.errors = errors;
                None
            }
        }
    }

    /// Record the result of the request started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, endpoint: SubmitEndpoint, result: Result<(), AppError>) {
        self.submitting = false;
        match result {
            Ok(()) => self.outcome = Some(endpoint.into()),
            Err(err) if err.kind == AppErrorKind::Validation && !err.field_errors.is_empty() => {
                self.errors = err.field_errors;
            }
            Err(err) => self.banner = Some(err.message),
        }
    }

    /// Validate, POST once, and record the result.
    pub async fn submit(
        &mut self,
        api: &impl NoticeApi,
        endpoint: SubmitEndpoint,
        today: NaiveDate,
    ) -> Option<SubmitOutcome> {
        let submission = self.begin_submit(today)?;
        let result = api.submit_notice(endpoint, &submission).await;
        self.finish_submit(endpoint, result);
        self.outcome
    }

    /// Back to a blank all-departments draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
