//! Draft listing and draft promotion.

use shared_types::{AppError, Notice, NoticePage, PaginationInfo};

use crate::api::NoticeApi;
use crate::rows::RowState;

/// Path of the draft listing, used as the pagination base.
pub const DRAFTS_PATH: &str = "/draft-notices";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftList {
    page: NoticePage,
    rows: RowState,
}

impl DraftList {
    pub fn new(page: NoticePage) -> Self {
        Self {
            page,
            rows: RowState::new(),
        }
    }

    pub fn replace_page(&mut self, page: NoticePage) {
        self.rows.retain_rows(page.notices.iter().map(|n| n.id.as_str()));
        self.page = page;
    }

    pub fn notices(&self) -> &[Notice] {
        &self.page.notices
    }

    pub fn pagination(&self) -> Option<&PaginationInfo> {
        self.page.visible_pagination()
    }

    pub fn total_count(&self) -> u64 {
        self.page.total_count()
    }

    pub fn rows(&self) -> &RowState {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut RowState {
        &mut self.rows
    }

    pub fn toggle_all(&mut self) {
        let ids: Vec<String> = self.page.notices.iter().map(|n| n.id.clone()).collect();
        self.rows.toggle_all(ids.iter().map(String::as_str));
    }

    /// Start promoting `id`. Refused for unknown rows and rows already in flight.
    pub fn begin_publish(&mut self, id: &str) -> bool {
        self.page.notices.iter().any(|n| n.id == id) && self.rows.begin(id)
    }

    /// Record the promotion result. True means refetch: the promoted row
    /// drops out of the status-scoped draft list.
    pub fn finish_publish(&mut self, id: &str, result: Result<(), AppError>) -> bool {
        let ok = self.rows.finish(id, &result);
        if ok {
            tracing::info!(id, "draft published");
        } else {
            tracing::warn!(id, "draft publish failed");
        }
        ok
    }

    pub async fn publish(&mut self, api: &impl NoticeApi, id: &str) -> bool {
        if !self.begin_publish(id) {
            return false;
        }
        let result = api.publish_draft(id).await;
        self.finish_publish(id, result)
    }
}
