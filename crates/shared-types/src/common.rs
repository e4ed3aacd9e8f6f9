use serde::{Deserialize, Serialize};

use crate::notice::Notice;
use crate::pagination::PaginationInfo;

pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch notices";
pub const DRAFTS_FAILED_MESSAGE: &str = "Failed to fetch draft notices";
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load notice details";
pub const STATUS_FAILED_MESSAGE: &str = "Failed to update status";
pub const PUBLISH_FAILED_MESSAGE: &str = "Failed to publish notice";

/// Response envelope wrapped around every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: true,
            status_code: 200,
            message: None,
            data: Some(data),
        }
    }

    /// A read only counts when both the flag and the embedded code agree.
    pub fn is_success(&self) -> bool {
        self.status && self.status_code == 200
    }

    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(msg) if !msg.is_empty() => msg,
            _ => fallback,
        }
    }
}

/// One page of a notice listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoticePage {
    #[serde(default)]
    pub notices: Vec<Notice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationInfo>,
}

impl NoticePage {
    pub fn total_count(&self) -> u64 {
        self.pagination.as_ref().map(|p| p.total_count).unwrap_or(0)
    }

    /// Pagination controls are shown only when the API reports pages.
    pub fn visible_pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref().filter(|p| p.total_pages > 0)
    }
}

/// Payload of the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeDetailData {
    pub notice: Notice,
}
