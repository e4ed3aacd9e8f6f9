//! Keeps the filter bar and the listing URL in step.
//!
//! Department, status and date edits navigate immediately. Search edits are
//! debounced: each keystroke hands out a [`DebounceTicket`], the caller sleeps
//! for [`FilterSync::debounce`], and only the newest ticket may navigate.

use std::time::Duration;

use shared_types::{FilterField, NoticeFilters, SEARCH_DEBOUNCE_MS};

use crate::timer;

/// Identifies one scheduled search navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSync {
    base: String,
    /// Filters as reflected in the URL.
    applied: NoticeFilters,
    /// Filters as shown in the inputs.
    current: NoticeFilters,
    generation: u64,
}

impl FilterSync {
    pub fn new(base: impl Into<String>, from_url: NoticeFilters) -> Self {
        Self {
            base: base.into(),
            applied: from_url.clone(),
            current: from_url,
            generation: 0,
        }
    }

    pub fn debounce() -> Duration {
        Duration::from_millis(SEARCH_DEBOUNCE_MS)
    }

    pub fn current(&self) -> &NoticeFilters {
        &self.current
    }

    pub fn applied(&self) -> &NoticeFilters {
        &self.applied
    }

    /// The URL changed underneath us (back/forward, a link). Adopt it and
    /// cancel any pending search navigation.
    pub fn sync_from_url(&mut self, filters: NoticeFilters) {
        if filters == self.applied && filters == self.current {
            return;
        }
        self.generation += 1;
        self.applied = filters.clone();
        self.current = filters;
    }

    /// Apply a non-search filter. Returns the URL to navigate to.
    ///
    /// A search value passed here is treated as settled.
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) -> String {
        self.current.set(field, value);
        self.apply()
    }

    /// Record a keystroke in the search box.
    pub fn set_search(&mut self, value: impl Into<String>) -> DebounceTicket {
        self.current.search = value.into();
        self.generation += 1;
        DebounceTicket(self.generation)
    }

    /// The quiet period for `ticket` elapsed. Returns the URL to navigate to
    /// when the ticket is still the newest and the search differs from the URL.
    pub fn search_settled(&mut self, ticket: DebounceTicket) -> Option<String> {
        if ticket.0 != self.generation || self.current.search == self.applied.search {
            return None;
        }
        Some(self.apply())
    }

    /// Clear every filter. Returns the bare listing URL.
    pub fn reset(&mut self) -> String {
        self.current = NoticeFilters::default();
        self.apply()
    }

    fn apply(&mut self) -> String {
        self.generation += 1;
        self.applied = self.current.clone();
        let href = self.applied.href(&self.base);
        tracing::debug!(%href, "filters applied");
        href
    }
}

/// Sleep out the debounce window, then ask whether `ticket` should navigate.
pub async fn wait_for_search(
    sync: impl FnOnce(DebounceTicket) -> Option<String>,
    ticket: DebounceTicket,
) -> Option<String> {
    timer::sleep(FilterSync::debounce()).await;
    sync(ticket)
}
