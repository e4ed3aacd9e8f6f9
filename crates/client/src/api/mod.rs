//! Access to the external notices REST API.

mod http;

pub use http::NoticeClient;

use shared_types::{AppError, Notice, NoticeFilters, NoticePage, NoticeStatus, NoticeSubmission};

/// Where a validated notice is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEndpoint {
    Publish,
    SaveDraft,
}

impl SubmitEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            SubmitEndpoint::Publish => paths::NOTICES,
            SubmitEndpoint::SaveDraft => paths::DRAFTS,
        }
    }
}

pub mod paths {
    pub const NOTICES: &str = "/api/notices";
    pub const DRAFTS: &str = "/api/notices/drafts";

    pub fn notice(id: &str) -> String {
        format!("{NOTICES}/{}", urlencoding::encode(id))
    }

    pub fn status(id: &str) -> String {
        format!("{NOTICES}/{}/status", urlencoding::encode(id))
    }

    pub fn publish_draft(id: &str) -> String {
        format!("{DRAFTS}/{}/publish", urlencoding::encode(id))
    }
}

/// Operations the controllers need from the backend.
///
/// Every failure is already mapped onto the [`AppError`] taxonomy, so callers
/// only turn errors into UI state.
#[allow(async_fn_in_trait)]
pub trait NoticeApi {
    /// One page of published/unpublished notices. `None` leaves the page to
    /// the server default.
    async fn list_notices(
        &self,
        page: Option<u32>,
        filters: &NoticeFilters,
    ) -> Result<NoticePage, AppError>;

    async fn list_drafts(&self, page: Option<u32>) -> Result<NoticePage, AppError>;

    /// Full record including body and attachments.
    async fn get_notice(&self, id: &str) -> Result<Notice, AppError>;

    /// One multipart POST of a validated notice.
    async fn submit_notice(
        &self,
        endpoint: SubmitEndpoint,
        submission: &NoticeSubmission,
    ) -> Result<(), AppError>;

    async fn set_status(&self, id: &str, status: NoticeStatus) -> Result<(), AppError>;

    async fn publish_draft(&self, id: &str) -> Result<(), AppError>;
}
