//! Pagination controller for the remote passenger table.
//!
//! The controller state (page, rows per page) is the only thing that
//! triggers fetches. Every change hands back a [`FetchRequest`] tagged
//! with a fresh sequence number; responses for anything but the latest
//! request are dropped.

use crate::domain::{FetchError, FetchRequest, Passenger, PassengerPage};
use tracing::{debug, warn};

pub const DEFAULT_ROWS_PER_PAGE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone)]
pub struct PassengerTable {
    /// Zero-based page index
    page: usize,
    rows_per_page: usize,
    rows_per_page_options: Vec<usize>,
    /// Rows of the last successful current response
    items: Vec<Passenger>,
    total_count: u64,
    /// Message from the most recent failed fetch
    last_error: Option<String>,
    /// True while the latest request is outstanding
    loading: bool,
    latest_seq: u64,
    mounted: bool,
}

impl Default for PassengerTable {
    fn default() -> Self {
        Self::new(10, DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec())
    }
}

impl PassengerTable {
    pub fn new(rows_per_page: usize, rows_per_page_options: Vec<usize>) -> Self {
        Self {
            page: 0,
            rows_per_page: rows_per_page.max(1),
            rows_per_page_options: rows_per_page_options.into_iter().filter(|&n| n > 0).collect(),
            items: Vec::new(),
            total_count: 0,
            last_error: None,
            loading: false,
            latest_seq: 0,
            mounted: false,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn rows_per_page_options(&self) -> &[usize] {
        &self.rows_per_page_options
    }

    pub fn items(&self) -> &[Passenger] {
        &self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Issues the initial fetch the first time the table is shown.
    pub fn mount(&mut self) -> Option<FetchRequest> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.issue())
    }

    pub fn set_page(&mut self, new_page: usize) -> Option<FetchRequest> {
        if new_page == self.page {
            return None;
        }
        self.page = new_page;
        Some(self.issue())
    }

    /// Changes the page size and restarts at the first page.
    pub fn set_rows_per_page(&mut self, new_size: usize) -> Option<FetchRequest> {
        if new_size == 0 || (new_size == self.rows_per_page && self.page == 0) {
            return None;
        }
        self.rows_per_page = new_size;
        self.page = 0;
        Some(self.issue())
    }

    pub fn page_count(&self) -> usize {
        (self.total_count as usize).div_ceil(self.rows_per_page)
    }

    pub fn has_next_page(&self) -> bool {
        self.page.saturating_add(1) < self.page_count()
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        if !self.has_next_page() {
            return None;
        }
        self.set_page(self.page + 1)
    }

    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        if self.page == 0 {
            return None;
        }
        self.set_page(self.page - 1)
    }

    /// Moves to the next larger page-size option, wrapping to the smallest.
    pub fn cycle_rows_per_page(&mut self, forward: bool) -> Option<FetchRequest> {
        let options = &self.rows_per_page_options;
        if options.is_empty() {
            return None;
        }
        let current = options.iter().position(|&n| n == self.rows_per_page);
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
            (None, _) => 0,
        };
        let size = options[next];
        self.set_rows_per_page(size)
    }

    /// Re-reads the current page without changing controller state.
    pub fn refresh(&mut self) -> FetchRequest {
        self.issue()
    }

    fn issue(&mut self) -> FetchRequest {
        self.latest_seq += 1;
        self.loading = true;
        FetchRequest {
            seq: self.latest_seq,
            page: self.page,
            rows_per_page: self.rows_per_page,
        }
    }

    pub fn is_current(&self, request: &FetchRequest) -> bool {
        request.seq == self.latest_seq
    }

    /// Commits a fetch result if it answers the latest request.
    ///
    /// Returns false when the response was stale and ignored.
    pub fn apply_response(&mut self, request: FetchRequest, result: Result<PassengerPage, FetchError>) -> bool {
        if !self.is_current(&request) {
            debug!(seq = request.seq, latest = self.latest_seq, "discarding stale passenger page");
            return false;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_count = page.total_count;
                self.last_error = None;
            }
            Err(err) => {
                warn!(page = request.page, size = request.rows_per_page, error = %err, "passenger fetch failed");
                self.last_error = Some(err.to_string());
            }
        }
        true
    }

    pub fn label(&self) -> String {
        pagination_label(self.page, self.rows_per_page, self.total_count)
    }
}

/// Range label in the `from–to of count` form.
///
/// ```
/// use tsform::application::pagination_label;
///
/// assert_eq!(pagination_label(1, 10, 42), "11–20 of 42");
/// assert_eq!(pagination_label(4, 10, 42), "41–42 of 42");
/// ```
pub fn pagination_label(page: usize, rows_per_page: usize, total_count: u64) -> String {
    let total = total_count as usize;
    if total == 0 {
        return "0–0 of 0".to_string();
    }
    let start = page.saturating_mul(rows_per_page);
    let from = start.saturating_add(1).min(total);
    let to = start.saturating_add(rows_per_page).min(total);
    format!("{}–{} of {}", from, to, total)
}
