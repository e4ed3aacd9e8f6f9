//! Published/unpublished notice listing.

use shared_types::{AppError, Notice, NoticePage, NoticeStatus, PaginationInfo};

use crate::api::NoticeApi;
use crate::rows::RowState;

/// The rendered page of notices plus per-row state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeList {
    page: NoticePage,
    rows: RowState,
}

/// A status change that has been started but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToggle {
    pub id: String,
    pub status: NoticeStatus,
}

impl NoticeList {
    pub fn new(page: NoticePage) -> Self {
        Self {
            page,
            rows: RowState::new(),
        }
    }

    /// Swap in a freshly fetched page.
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

    pub fn published_count(&self) -> usize {
        self.count_with(NoticeStatus::Published)
    }

    pub fn unpublished_count(&self) -> usize {
        self.count_with(NoticeStatus::Unpublished)
    }

    fn count_with(&self, status: NoticeStatus) -> usize {
        self.page.notices.iter().filter(|n| n.status == status).count()
    }

    pub fn rows(&self) -> &RowState {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut RowState {
        &mut self.rows
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + Clone {
        self.page.notices.iter().map(|n| n.id.as_str())
    }

    pub fn toggle_all(&mut self) {
        let ids: Vec<String> = self.ids().map(str::to_string).collect();
        self.rows.toggle_all(ids.iter().map(String::as_str));
    }

    /// Start flipping `id` between published and unpublished. `None` if the
    /// row is unknown, is a draft, or already has a request in flight.
    pub fn begin_toggle(&mut self, id: &str) -> Option<PendingToggle> {
        let status = self
            .page
            .notices
            .iter()
            .find(|n| n.id == id)
            .and_then(|n| n.status.toggled())?;
        if !self.rows.begin(id) {
            return None;
        }
        Some(PendingToggle {
            id: id.to_string(),
            status,
        })
    }

    /// Apply the result of a toggle. Returns true when the list should be
    /// refetched.
    pub fn finish_toggle(&mut self, toggle: &PendingToggle, result: Result<(), AppError>) -> bool {
        if !self.rows.finish(&toggle.id, &result) {
            tracing::warn!(id = %toggle.id, "status toggle failed");
            return false;
        }
        if let Some(notice) = self.page.notices.iter_mut().find(|n| n.id == toggle.id) {
            notice.status = toggle.status.clone();
        }
        tracing::info!(id = %toggle.id, status = toggle.status.as_str(), "notice status updated");
        true
    }

    pub async fn toggle_status(&mut self, api: &impl NoticeApi, id: &str) -> bool {
        let Some(toggle) = self.begin_toggle(id) else {
            return false;
        };
        let result = api.set_status(&toggle.id, toggle.status.clone()).await;
        self.finish_toggle(&toggle, result)
    }
}
