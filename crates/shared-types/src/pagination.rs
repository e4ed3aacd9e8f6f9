use serde::{Deserialize, Serialize};
use std::fmt;

use crate::filters::{decode_query, encode_pairs, keys, with_query, NoticeFilters};

/// Pages shown in full before the window collapses into ellipses.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Pagination block of a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_prev_page: bool,
}

fn first_page() -> u32 {
    1
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_count: 0,
            has_next_page: false,
            has_prev_page: false,
        }
    }
}

impl PaginationInfo {
    pub fn tokens(&self) -> Vec<PageToken> {
        page_tokens(self.current_page, self.total_pages)
    }

    pub fn prev_page(&self) -> Option<u32> {
        (self.has_prev_page && self.current_page > 1).then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next_page.then(|| self.current_page + 1)
    }
}

/// One entry of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => write!(f, "..."),
        }
    }
}

/// Windowed page sequence for `current` of `total` pages.
///
/// Up to five pages are listed in full. Beyond that the first and last page
/// are always present, with an ellipsis standing in for each skipped run.
pub fn page_tokens(current: u32, total: u32) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(Page).collect();
    }

    let mut tokens = Vec::with_capacity(7);
    if current <= 3 {
        tokens.extend((1..=4).map(Page));
        tokens.push(Ellipsis);
        tokens.push(Page(total));
    } else if current >= total - 2 {
        tokens.push(Page(1));
        tokens.push(Ellipsis);
        tokens.extend((total - 3..=total).map(Page));
    } else {
        tokens.push(Page(1));
        tokens.push(Ellipsis);
        tokens.extend((current - 1..=current + 1).map(Page));
        tokens.push(Ellipsis);
        tokens.push(Page(total));
    }
    tokens
}

/// URL of `page` on the listing at `base`, keeping the active filters.
/// Page 1 is written as the absence of `page`.
pub fn page_href(base: &str, filters: &NoticeFilters, page: u32) -> String {
    let page_str = page.to_string();
    let mut pairs = filters.pairs();
    if page > 1 {
        pairs.push((keys::PAGE, page_str.as_str()));
    }
    with_query(base, &encode_pairs(pairs))
}

/// Parse a `page` query value, treating anything invalid as page 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// The page requested by a raw listing query string.
pub fn page_from_query(query: &str) -> u32 {
    let pairs = decode_query(query);
    parse_page(
        pairs
            .iter()
            .find(|(key, _)| key == keys::PAGE)
            .map(|(_, value)| value.as_str()),
    )
}
