//! Listing filters and their query-string form.
//!
//! An empty value means "no filter" and is never written to a query string.

use serde::{Deserialize, Serialize};

/// Quiet period before a search edit is pushed to the URL.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

pub mod keys {
    pub const PAGE: &str = "page";
    pub const DEPARTMENT: &str = "department";
    pub const SEARCH: &str = "search";
    pub const STATUS: &str = "status";
    pub const PUBLISH_DATE: &str = "publishDate";
}

/// A single filter input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Department,
    Search,
    Status,
    PublishDate,
}

/// Filter state of the notice listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeFilters {
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub publish_date: String,
}

impl NoticeFilters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Department => &self.department,
            FilterField::Search => &self.search,
            FilterField::Status => &self.status,
            FilterField::PublishDate => &self.publish_date,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Department => self.department = value,
            FilterField::Search => self.search = value,
            FilterField::Status => self.status = value,
            FilterField::PublishDate => self.publish_date = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Non-empty filters as `(key, value)` pairs in display order.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            (keys::DEPARTMENT, self.department.as_str()),
            (keys::SEARCH, self.search.as_str()),
            (keys::STATUS, self.status.as_str()),
            (keys::PUBLISH_DATE, self.publish_date.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }

    /// Build from decoded query pairs, ignoring unknown keys.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut filters = Self::default();
        for (key, value) in pairs {
            match key {
                keys::DEPARTMENT => filters.department = value.to_string(),
                keys::SEARCH => filters.search = value.to_string(),
                keys::STATUS => filters.status = value.to_string(),
                keys::PUBLISH_DATE => filters.publish_date = value.to_string(),
                _ => {}
            }
        }
        filters
    }

    pub fn from_query_str(query: &str) -> Self {
        let decoded = decode_query(query);
        Self::from_pairs(decoded.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn to_query_string(&self) -> String {
        encode_pairs(self.pairs())
    }

    /// Listing URL for these filters: `base` alone when nothing is set.
    pub fn href(&self, base: &str) -> String {
        with_query(base, &self.to_query_string())
    }
}

/// Query parameters for the list endpoint. Page 1 is sent only when the
/// caller asked for it explicitly.
pub fn list_request_query(page: Option<u32>, filters: &NoticeFilters) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();
    if let Some(page) = page {
        out.push((keys::PAGE, page.to_string()));
    }
    for (key, value) in [
        (keys::STATUS, &filters.status),
        (keys::DEPARTMENT, &filters.department),
        (keys::SEARCH, &filters.search),
        (keys::PUBLISH_DATE, &filters.publish_date),
    ] {
        if !value.is_empty() {
            out.push((key, value.clone()));
        }
    }
    out
}

pub fn encode_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Split and percent-decode a query string (leading `?` optional).
pub fn decode_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (k, v) = part.split_once('=').unwrap_or((part, ""));
            (decode_component(k), decode_component(v))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

pub fn with_query(base: &str, query: &str) -> String {
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{query}")
    }
}
