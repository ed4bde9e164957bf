use ratatui::widgets::TableState;
use webhook_console::rows::{Panel, PanelToggles};
use webhook_console::{
    cache_entries, filter_cache, filter_logs, CacheEntry, DashboardSummary, LogEntry, LogFilter,
    LogStore, MergeMap, MergeMapForm, Pagination, ReplayTracker, RowKey, SaveEvent, SaveStatus,
    StatusFilter, CACHE_PAGE_SIZE, LOGS_PAGE_SIZE,
};

use std::collections::HashMap;

/// Which text input, if any, receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Search,
    Edit,
    PageJump,
}

/// Lifecycle of a tab's data
#[derive(Debug)]
pub(crate) enum LoadState<T> {
    NotLoaded,
    Loading,
    Loaded(T),
    Empty,
    Failed(String),
}

impl<T> LoadState<T> {
    pub(crate) fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

pub(crate) struct DashboardView {
    pub(crate) state: LoadState<DashboardSummary>,
}

impl DashboardView {
    pub(crate) fn new() -> Self {
        Self {
            state: LoadState::NotLoaded,
        }
    }

    pub(crate) fn apply(&mut self, result: Result<Vec<LogEntry>, String>) {
        self.state = match result {
            Ok(logs) => {
                let store = LogStore::new(logs);
                LoadState::Loaded(DashboardSummary::from_logs(store.entries()))
            }
            Err(e) => LoadState::Failed(e),
        };
    }
}

/// The row whose detail popup is open
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenDetail {
    pub(crate) index: usize,
    pub(crate) toggles: PanelToggles,
}

pub(crate) struct LogsView {
    pub(crate) state: LoadState<LogStore>,
    pub(crate) generation: u64,
    pub(crate) query: String,
    pub(crate) filter: LogFilter,
    pub(crate) filtered: Vec<usize>,
    pub(crate) pagination: Pagination,
    pub(crate) table_state: TableState,
    pub(crate) detail: Option<OpenDetail>,
    pub(crate) replays: ReplayTracker,
}

impl LogsView {
    pub(crate) fn new() -> Self {
        Self {
            state: LoadState::NotLoaded,
            generation: 0,
            query: String::new(),
            filter: LogFilter::default(),
            filtered: Vec::new(),
            pagination: Pagination::new(LOGS_PAGE_SIZE),
            table_state: TableState::default(),
            detail: None,
            replays: ReplayTracker::new(),
        }
    }

    pub(crate) fn apply(&mut self, result: Result<Vec<LogEntry>, String>, generation: u64) {
        self.generation = generation;
        self.detail = None;
        self.replays.clear();
        self.state = match result {
            Ok(logs) if logs.is_empty() => LoadState::Empty,
            Ok(logs) => LoadState::Loaded(LogStore::new(logs)),
            Err(e) => LoadState::Failed(e),
        };
        self.refilter();
    }

    /// Recomputes the filtered view and goes back to page 1.
    pub(crate) fn refilter(&mut self) {
        self.filter.set_query(&self.query);
        self.filtered = match self.state.loaded() {
            Some(store) => filter_logs(store.entries(), &self.filter),
            None => Vec::new(),
        };
        self.pagination.reset();
        self.reset_selection();
    }

    pub(crate) fn cycle_status(&mut self) {
        self.filter.status = self.filter.status.cycle();
        self.refilter();
    }

    pub(crate) fn clear_filters(&mut self) {
        self.query.clear();
        self.filter.status = StatusFilter::All;
        self.refilter();
    }

    /// Store indices of the rows on the current page.
    pub(crate) fn visible(&self) -> &[usize] {
        self.pagination.slice(&self.filtered)
    }

    pub(crate) fn next_page(&mut self) {
        self.pagination.next(self.filtered.len());
        self.reset_selection();
    }

    pub(crate) fn previous_page(&mut self) {
        self.pagination.previous(self.filtered.len());
        self.reset_selection();
    }

    /// Jumps to `page`, clamped to the available pages.
    pub(crate) fn go_to_page(&mut self, page: usize) {
        self.pagination.set_page(page, self.filtered.len());
        self.reset_selection();
    }

    pub(crate) fn last_page(&self) -> usize {
        self.pagination.total_pages(self.filtered.len())
    }

    fn reset_selection(&mut self) {
        let selected = if self.visible().is_empty() { None } else { Some(0) };
        self.table_state.select(selected);
    }

    pub(crate) fn select_next(&mut self) {
        let count = self.visible().len();
        if count > 0 {
            let i = match self.table_state.selected() {
                Some(i) => (i + 1).min(count - 1),
                None => 0,
            };
            self.table_state.select(Some(i));
            self.follow_selection();
        }
    }

    pub(crate) fn select_previous(&mut self) {
        if !self.visible().is_empty() {
            let i = match self.table_state.selected() {
                Some(i) => i.saturating_sub(1),
                None => 0,
            };
            self.table_state.select(Some(i));
            self.follow_selection();
        }
    }

    /// Keeps an open detail popup on the selected row, collapsed again.
    fn follow_selection(&mut self) {
        if self.detail.is_some() {
            self.detail = self.selected_index().map(|index| OpenDetail {
                index,
                toggles: PanelToggles::default(),
            });
        }
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.table_state
            .selected()
            .and_then(|i| self.visible().get(i).copied())
    }

    pub(crate) fn entry(&self, index: usize) -> Option<&LogEntry> {
        self.state.loaded().and_then(|store| store.get(index))
    }

    pub(crate) fn row_key(&self, index: usize) -> RowKey {
        RowKey {
            generation: self.generation,
            index,
        }
    }

    pub(crate) fn open_detail(&mut self) {
        self.detail = self.selected_index().map(|index| OpenDetail {
            index,
            toggles: PanelToggles::default(),
        });
    }

    pub(crate) fn close_detail(&mut self) {
        self.detail = None;
    }

    pub(crate) fn toggle_panel(&mut self, panel: Panel) {
        if let Some(detail) = self.detail.as_mut() {
            detail.toggles.toggle(panel);
        }
    }
}

pub(crate) struct CacheView {
    pub(crate) state: LoadState<Vec<CacheEntry>>,
    pub(crate) query: String,
    pub(crate) filtered: Vec<usize>,
    pub(crate) pagination: Pagination,
    pub(crate) table_state: TableState,
}

impl CacheView {
    pub(crate) fn new() -> Self {
        Self {
            state: LoadState::NotLoaded,
            query: String::new(),
            filtered: Vec::new(),
            pagination: Pagination::new(CACHE_PAGE_SIZE),
            table_state: TableState::default(),
        }
    }

    pub(crate) fn apply(&mut self, result: Result<HashMap<String, String>, String>) {
        self.state = match result {
            Ok(mapping) if mapping.is_empty() => LoadState::Empty,
            Ok(mapping) => LoadState::Loaded(cache_entries(mapping)),
            Err(e) => LoadState::Failed(e),
        };
        self.refilter();
    }

    pub(crate) fn refilter(&mut self) {
        self.filtered = match self.state.loaded() {
            Some(entries) => filter_cache(entries, &self.query),
            None => Vec::new(),
        };
        self.pagination.reset();
        self.reset_selection();
    }

    pub(crate) fn visible(&self) -> &[usize] {
        self.pagination.slice(&self.filtered)
    }

    pub(crate) fn next_page(&mut self) {
        self.pagination.next(self.filtered.len());
        self.reset_selection();
    }

    pub(crate) fn previous_page(&mut self) {
        self.pagination.previous(self.filtered.len());
        self.reset_selection();
    }

    pub(crate) fn go_to_page(&mut self, page: usize) {
        self.pagination.set_page(page, self.filtered.len());
        self.reset_selection();
    }

    pub(crate) fn last_page(&self) -> usize {
        self.pagination.total_pages(self.filtered.len())
    }

    fn reset_selection(&mut self) {
        let selected = if self.visible().is_empty() { None } else { Some(0) };
        self.table_state.select(selected);
    }

    pub(crate) fn select_next(&mut self) {
        let count = self.visible().len();
        if count > 0 {
            let i = match self.table_state.selected() {
                Some(i) => (i + 1).min(count - 1),
                None => 0,
            };
            self.table_state.select(Some(i));
        }
    }

    pub(crate) fn select_previous(&mut self) {
        if !self.visible().is_empty() {
            let i = match self.table_state.selected() {
                Some(i) => i.saturating_sub(1),
                None => 0,
            };
            self.table_state.select(Some(i));
        }
    }
}

pub(crate) struct MergeMapView {
    pub(crate) state: LoadState<MergeMapForm>,
    pub(crate) generation: u64,
    pub(crate) selected: usize,
    pub(crate) save: SaveStatus,
}

impl MergeMapView {
    pub(crate) fn new() -> Self {
        Self {
            state: LoadState::NotLoaded,
            generation: 0,
            selected: 0,
            save: SaveStatus::Idle,
        }
    }

    pub(crate) fn apply(&mut self, result: Result<MergeMap, String>, generation: u64) {
        self.generation = generation;
        self.selected = 0;
        self.save = SaveStatus::Idle;
        self.state = match result {
            Ok(map) if map.is_empty() => LoadState::Empty,
            Ok(map) => LoadState::Loaded(MergeMapForm::from_map(map)),
            Err(e) => LoadState::Failed(e),
        };
    }

    pub(crate) fn select_next(&mut self) {
        if let Some(form) = self.state.loaded() {
            if !form.is_empty() {
                self.selected = (self.selected + 1).min(form.len() - 1);
            }
        }
    }

    pub(crate) fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Records a save outcome. Outcomes for a form that has since been
    /// reloaded are dropped.
    pub(crate) fn finish_save(&mut self, event: SaveEvent) -> bool {
        if event.generation != self.generation {
            return false;
        }
        self.save = event.status;
        true
    }

    pub(crate) fn selected_value_mut(&mut self) -> Option<&mut String> {
        let selected = self.selected;
        self.state
            .loaded_mut()
            .and_then(|form| form.value_mut(selected))
    }
}
