//! Client side of the notices admin: REST access plus the UI-free
//! controllers the Dioxus pages drive.

pub mod api;
pub mod config;
pub mod detail;
pub mod drafts;
pub mod filters;
pub mod form;
pub mod list;
pub mod rows;
pub mod timer;

#[cfg(test)]
mod testing;

pub use api::{NoticeApi, NoticeClient, SubmitEndpoint};
pub use config::ApiConfig;
pub use detail::{DetailFetcher, DetailRequest, DetailState};
pub use drafts::{DraftList, DRAFTS_PATH};
pub use filters::{DebounceTicket, FilterSync};
pub use form::{NoticeForm, SubmitOutcome};
pub use list::{NoticeList, PendingToggle};
pub use rows::RowState;
