//! In-memory [`NoticeApi`] for controller tests.

use std::cell::RefCell;
use std::collections::HashMap;

use shared_types::{AppError, Notice, NoticeFilters, NoticePage, NoticeStatus, NoticeSubmission};

use crate::api::{NoticeApi, SubmitEndpoint};

/// Records every call as a short label (`"status:n1:unpublished"`) and fails
/// the ones registered with [`FakeApi::fail`].
#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<String>>,
    failures: RefCell<HashMap<String, AppError>>,
    pub page: NoticePage,
    pub notices: Vec<Notice>,
}

impl FakeApi {
    pub fn with_notices(notices: Vec<Notice>) -> Self {
        Self {
            notices,
            ..Default::default()
        }
    }

    pub fn fail(&self, call: &str, err: AppError) {
        self.failures.borrow_mut().insert(call.to_string(), err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), AppError> {
        self.calls.borrow_mut().push(call.clone());
        match self.failures.borrow().get(&call) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl NoticeApi for FakeApi {
    async fn list_notices(
        &self,
        page: Option<u32>,
        filters: &NoticeFilters,
    ) -> Result<NoticePage, AppError> {
        self.record(format!("list:{}:{}", page.unwrap_or(1), filters.to_query_string()))?;
        Ok(self.page.clone())
    }

    async fn list_drafts(&self, page: Option<u32>) -> Result<NoticePage, AppError> {
        self.record(format!("drafts:{}", page.unwrap_or(1)))?;
        Ok(self.page.clone())
    }

    async fn get_notice(&self, id: &str) -> Result<Notice, AppError> {
        self.record(format!("get:{id}"))?;
        self.notices
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Notice not found"))
    }

    async fn submit_notice(
        &self,
        endpoint: SubmitEndpoint,
        _submission: &NoticeSubmission,
    ) -> Result<(), AppError> {
        self.record(format!("submit:{}", endpoint.path()))
    }

    async fn set_status(&self, id: &str, status: NoticeStatus) -> Result<(), AppError> {
        self.record(format!("status:{id}:{}", status.as_str()))
    }

    async fn publish_draft(&self, id: &str) -> Result<(), AppError> {
        self.record(format!("publish:{id}"))
    }
}

/// Minimal list row.
pub fn notice(id: &str, status: NoticeStatus) -> Notice {
    Notice {
        id: id.to_string(),
        notice_title: format!("Notice {id}"),
        notice_body: None,
        notice_type: None,
        target_departments: Vec::new(),
        publish_date: "2026-03-10".to_string(),
        status,
        employee_id: None,
        employee_name: None,
        position: None,
        attachments: Vec::new(),
        created_at: None,
    }
}
