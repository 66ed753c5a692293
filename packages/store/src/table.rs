//! View state behind every list table: search text, sort, and pagination.
//!
//! The table component never sorts or slices data itself. It renders from a
//! [`TableState`] and reports clicks back to the owner, which updates the state
//! and refetches (server-side lists) or re-derives rows (client-side lists, see
//! [`crate::local`]).

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Maximum number of numbered page buttons.
pub const PAGE_WINDOW: u32 = 5;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Header marker for the active column.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "\u{2191}",
            SortOrder::Desc => "\u{2193}",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Asc)
    }

    /// Header click: the active column flips, any other column starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.order = self.order.flipped();
        } else {
            self.field = field.to_string();
            self.order = SortOrder::Asc;
        }
    }

    pub fn is_active(&self, field: &str) -> bool {
        self.field == field
    }
}

/// Search, sort and page of a single table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub sort: SortState,
}

impl TableState {
    pub fn new(sort_field: &str, limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            search: String::new(),
            sort: SortState::ascending(sort_field),
        }
    }

    /// New search text always starts again from the first page.
    pub fn set_search(&mut self, search: String) {
        if self.search != search {
            self.search = search;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    /// Whether the current page lies past the last page of `total_items`.
    pub fn page_past_end(&self, total_items: u64) -> bool {
        self.page > total_pages(total_items, self.limit)
    }

    /// Pull the page back inside range after the total shrank (e.g. a delete).
    pub fn clamp_page(&mut self, total_items: u64) {
        if self.page_past_end(total_items) {
            self.page = total_pages(total_items, self.limit);
        }
    }

    /// Row offset of the current page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.limit as usize
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new("id", DEFAULT_PAGE_SIZE)
    }
}

/// `ceil(total / limit)`, and 1 for an empty or unknown total.
pub fn total_pages(total_items: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    if total_items == 0 {
        return 1;
    }
    let pages = total_items.div_ceil(limit);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Numbered page buttons: at most [`PAGE_WINDOW`], centred on `page` when it is
/// away from either end, never outside `1..=total_pages`.
pub fn page_window(page: u32, total_pages: u32) -> RangeInclusive<u32> {
    let total_pages = total_pages.max(1);
    let page = page.clamp(1, total_pages);
    let half = PAGE_WINDOW / 2;

    if total_pages <= PAGE_WINDOW || page <= half + 1 {
        1..=total_pages.min(PAGE_WINDOW)
    } else if page >= total_pages - half {
        (total_pages - PAGE_WINDOW + 1)..=total_pages
    } else {
        (page - half)..=(page + half)
    }
}

/// The "Showing X to Y of Z results" numbers; `(0, 0)` for an empty list.
pub fn showing_range(page: u32, limit: u32, total_items: u64) -> (u64, u64) {
    if total_items == 0 {
        return (0, 0);
    }
    let page = u64::from(page.clamp(1, total_pages(total_items, limit)));
    let limit = u64::from(limit.max(1));
    let from = (page - 1) * limit + 1;
    let to = (page * limit).min(total_items);
    (from, to)
}
