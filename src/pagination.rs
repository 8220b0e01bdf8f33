use serde::{Deserialize, Serialize};

use crate::query::QueryParams;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Page numbers to render in a pager, `None` marking an ellipsis.
///
/// Always shows the first and last page plus two pages on each side of the
/// current one. Returns an empty list when either argument is zero.
pub fn page_list(current_page: usize, total_pages: usize) -> Vec<Option<usize>> {
    if current_page == 0 {
        return vec![];
    }
    get_pages(total_pages, current_page, 1, 2, 2, 1)
}

/// Optional paging controls sent with list requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Appends `page` then `limit`, skipping absent or zero values.
    pub fn apply(&self, params: &mut QueryParams) {
        params.push("page", self.page);
        params.push("limit", self.limit);
    }
}

/// Page metadata returned alongside list results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationData {
    pub current_page: u32,
    pub total_page: u32,
    pub limit: u32,
    pub total_items: u32,
}

/// Envelope returned by every list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub pagination_data: PaginationData,
    pub items: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, pagination_data: PaginationData) -> Self {
        Self {
            pagination_data,
            items,
        }
    }

    /// Checks the envelope invariants: the page never holds more than `limit`
    /// items and, when anything matched, the current page lies within
    /// `1..=total_page`.
    pub fn is_consistent(&self) -> bool {
        let data = &self.pagination_data;
        if self.items.len() > data.limit as usize {
            return false;
        }
        if data.total_items > 0 {
            return (1..=data.total_page).contains(&data.current_page);
        }
        true
    }

    pub fn has_next(&self) -> bool {
        self.pagination_data.current_page < self.pagination_data.total_page
    }

    pub fn has_previous(&self) -> bool {
        self.pagination_data.current_page > 1
    }

    /// Pager entries for this page, see [`page_list`].
    pub fn pages(&self) -> Vec<Option<usize>> {
        page_list(
            self.pagination_data.current_page as usize,
            self.pagination_data.total_page as usize,
        )
    }

    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            pagination_data: self.pagination_data,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
