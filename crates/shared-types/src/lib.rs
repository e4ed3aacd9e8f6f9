//! Domain types shared by the notices client and UI.

pub mod common;
pub mod draft;
pub mod error;
pub mod filters;
pub mod notice;
pub mod pagination;

pub use common::*;
pub use draft::*;
pub use error::*;
pub use filters::{FilterField, NoticeFilters, SEARCH_DEBOUNCE_MS};
pub use notice::*;
pub use pagination::*;
