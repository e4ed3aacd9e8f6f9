//! Lazily loaded full record for the detail dialog.

use shared_types::{AppError, Notice};

use crate::api::NoticeApi;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Closed,
    Loading {
        id: String,
    },
    Failed {
        id: String,
        message: String,
    },
    Loaded(Box<Notice>),
}

/// One issued detail request. Results are only accepted for the newest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub id: String,
    seq: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailFetcher {
    state: DetailState,
    seq: u64,
}

impl DetailFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DetailState::Closed)
    }

    pub fn notice(&self) -> Option<&Notice> {
        match &self.state {
            DetailState::Loaded(notice) => Some(notice.as_ref()),
            _ => None,
        }
    }

    /// Open the view for `id` and return the request to issue.
    pub fn open(&mut self, id: impl Into<String>) -> DetailRequest {
        let id = id.into();
        self.seq += 1;
        self.state = DetailState::Loading { id: id.clone() };
        DetailRequest { id, seq: self.seq }
    }

    /// Re-issue the GET after a failure.
    pub fn retry(&mut self) -> Option<DetailRequest> {
        match &self.state {
            DetailState::Failed { id, .. } => {
                let id = id.clone();
                Some(self.open(id))
            }
            _ => None,
        }
    }

    /// Store a result. Returns false when the request was superseded or the
    /// view has been closed, in which case the result is dropped.
    pub fn resolve(&mut self, request: &DetailRequest, result: Result<Notice, AppError>) -> bool {
        if request.seq != self.seq || !self.is_open() {
            tracing::debug!(id = %request.id, "discarding stale notice detail");
            return false;
        }
        self.state = match result {
            Ok(notice) => DetailState::Loaded(Box::new(notice)),
            Err(err) => {
                tracing::warn!(id = %request.id, error = %err, "failed to load notice details");
                DetailState::Failed {
                    id: request.id.clone(),
                    message: err.message,
                }
            }
        };
        true
    }

    /// Close the view. Any request still in flight is ignored when it lands.
    pub fn close(&mut self) {
        self.seq += 1;
        self.state = DetailState::Closed;
    }

    pub async fn load(&mut self, api: &impl NoticeApi, id: &str) {
        let request = self.open(id);
        let result = api.get_notice(&request.id).await;
        self.resolve(&request, result);
    }
}
