//! Per-row UI state shared by the notice and draft tables.

use std::collections::{HashMap, HashSet};

use shared_types::AppError;

/// Selection, in-flight mutations, and row errors, all keyed by notice id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowState {
    selected: HashSet<String>,
    pending: HashSet<String>,
    errors: HashMap<String, String>,
}

impl RowState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Selection ───────────────────────────────────────────────────

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// True when `ids` is non-empty and every one of them is selected.
    pub fn all_selected<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> bool {
        let mut any = false;
        for id in ids {
            any = true;
            if !self.selected.contains(id) {
                return false;
            }
        }
        any
    }

    /// Header checkbox: select every row, or clear when all already are.
    pub fn toggle_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str> + Clone) {
        if self.all_selected(ids.clone()) {
            self.selected.clear();
        } else {
            self.selected.extend(ids.into_iter().map(str::to_string));
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    // ── Mutations ───────────────────────────────────────────────────

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn dismiss_error(&mut self, id: &str) {
        self.errors.remove(id);
    }

    /// Mark `id` as having a request in flight. Refused if one already is.
    pub fn begin(&mut self, id: &str) -> bool {
        if !self.pending.insert(id.to_string()) {
            return false;
        }
        self.errors.remove(id);
        true
    }

    /// Clear the pending mark and record a failure against this row only.
    pub fn finish(&mut self, id: &str, result: &Result<(), AppError>) -> bool {
        self.pending.remove(id);
        match result {
            Ok(()) => true,
            Err(err) => {
                self.errors.insert(id.to_string(), err.message.clone());
                false
            }
        }
    }

    /// Rows were replaced: drop the selection and forget rows that are gone.
    pub fn retain_rows<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let live: HashSet<&str> = ids.into_iter().collect();
        self.selected.clear();
        self.errors.retain(|id, _| live.contains(id.as_str()));
        self.pending.retain(|id| live.contains(id.as_str()));
    }
}
