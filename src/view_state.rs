use std::num::NonZeroUsize;
use std::ops::Range;

use derive_more::Display;

use crate::domain::telemetry::TimeWindow;

/// Rows per endpoint-table page. Any positive integer is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub const DEFAULT: usize = 7;

    pub fn new(rows: usize) -> Option<Self> {
        NonZeroUsize::new(rows).map(Self)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(Self::DEFAULT).unwrap_or(NonZeroUsize::MIN))
    }
}

/// Page arithmetic over a 1-based page index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: PageSize,
}

impl Pagination {
    pub fn new(page_size: PageSize) -> Self {
        Self { page_size }
    }

    /// `max(1, ceil(count / page_size))`.
    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size.get()).max(1)
    }

    pub fn clamp_page(&self, page: usize, item_count: usize) -> usize {
        page.clamp(1, self.total_pages(item_count))
    }

    /// Item indices shown on `page` (clamped into range first).
    pub fn page_range(&self, page: usize, item_count: usize) -> Range<usize> {
        let page = self.clamp_page(page, item_count);
        let start = (page - 1) * self.page_size.get();
        start.min(item_count)..start.saturating_add(self.page_size.get()).min(item_count)
    }

    pub fn page_slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        &items[self.page_range(page, items.len())]
    }
}

/// Whether a window selection changed the dataset being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowChange {
    /// A different window: the caller must fetch it.
    Changed,
    Unchanged,
}

/// UI-only state of one dashboard instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active_window: TimeWindow,
    pub current_page: usize,
    pub expanded_row_key: Option<String>,
    pub alert_dismissed: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(TimeWindow::default())
    }
}

impl ViewState {
    pub fn new(active_window: TimeWindow) -> Self {
        Self { active_window, current_page: 1, expanded_row_key: None, alert_dismissed: false }
    }

    /// Switch windows. Page and alert always reset because the dataset is replaced;
    /// the expanded row is left alone.
    pub fn select_window(&mut self, window: TimeWindow) -> WindowChange {
        let change =
            if window == self.active_window { WindowChange::Unchanged } else { WindowChange::Changed };
        self.active_window = window;
        self.current_page = 1;
        self.alert_dismissed = false;
        change
    }

    /// Jump to `page`, clamped into `1..=total_pages`.
    pub fn select_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Expand `key`, or collapse it if it is already the expanded row.
    pub fn toggle_row(&mut self, key: &str) {
        if self.expanded_row_key.as_deref() == Some(key) {
            self.expanded_row_key = None;
        } else {
            self.expanded_row_key = Some(key.to_string());
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert_dismissed = true;
    }

    /// New data for the same window keeps page and alert state as they are.
    pub fn on_data_refresh(&mut self) {}

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded_row_key.as_deref() == Some(key)
    }
}
