use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::sync::Arc;

use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::data::{DataLoader, LoadReport};
use crate::domain::Snapshot;
use crate::view::{country_options, default_selection, DashboardView, Selection, SortColumn, TableSort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Table,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub loader: DataLoader,
    pub snapshot: Arc<Snapshot>,
    pub load_error: Option<String>,
    pub last_load_cached: bool,
    pub options: Vec<String>,
    pub selection: Selection,
    pub default_countries: Vec<String>,
    pub sidebar_index: usize,
    pub search: String,
    pub searching: bool,
    pub focus: Focus,
    pub table_sort: TableSort,
    pub table_index: usize,
    pub show_help: bool,
    pub refresh_requested: bool,
    pub status_message: String,
    selection_initialized: bool,
}

impl App {
    pub fn new(loader: DataLoader, default_countries: Vec<String>) -> Self {
        Self {
            running: true,
            loader,
            snapshot: Arc::new(Snapshot::empty()),
            load_error: None,
            last_load_cached: false,
            options: Vec::new(),
            selection: Selection::default(),
            default_countries,
            sidebar_index: 0,
            search: String::new(),
            searching: false,
            focus: Focus::Sidebar,
            table_sort: TableSort::default(),
            table_index: 0,
            show_help: false,
            refresh_requested: false,
            status_message: String::new(),
            selection_initialized: false,
        }
    }

    /// Goes through the loader cache; only fetches when the cache has expired
    pub async fn reload(&mut self) {
        let report = self.loader.load_data().await;
        self.apply_report(report);
    }

    /// Drops the cache and fetches a fresh snapshot
    pub async fn force_refresh(&mut self) {
        self.refresh_requested = false;
        self.loader.invalidate();
        self.reload().await;
        self.status_message = if self.load_error.is_some() {
            "Refresh failed".to_string()
        } else {
            format!("Refreshed {} countries", self.snapshot.len())
        };
    }

    pub fn apply_report(&mut self, report: LoadReport) {
        self.load_error = report.error;
        self.last_load_cached = report.from_cache;

        if Arc::ptr_eq(&report.snapshot, &self.snapshot) {
            return;
        }

        self.snapshot = report.snapshot;
        self.options = country_options(self.snapshot.rows());

        // Defaults apply the first time there is something to choose from
        if !self.selection_initialized && !self.options.is_empty() {
            self.selection = default_selection(&self.options, &self.default_countries);
            self.selection_initialized = true;
        } else {
            self.selection.retain_known(&self.options);
        }

        self.clamp_indices();
    }

    pub fn view(&self) -> DashboardView<'_> {
        DashboardView::build(&self.snapshot, &self.selection, self.table_sort)
    }

    /// Options shown in the sidebar; narrowed and ranked by the search text
    pub fn visible_options(&self) -> Vec<&str> {
        let pattern = self.search.trim();
        if pattern.is_empty() {
            return self.options.iter().map(String::as_str).collect();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let mut scored: Vec<(i64, &str)> = self
            .options
            .iter()
            .filter_map(|name| {
                matcher
                    .fuzzy_match(name, pattern)
                    .map(|score| (score, name.as_str()))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.into_iter().map(|(_, name)| name).collect()
    }

    pub fn highlighted_option(&self) -> Option<&str> {
        self.visible_options().get(self.sidebar_index).copied()
    }

    pub fn toggle_highlighted(&mut self) {
        if let Some(name) = self.highlighted_option().map(ToString::to_string) {
            self.selection.toggle(&name);
        }
        self.clamp_indices();
    }

    pub fn select_all_visible(&mut self) {
        let names: Vec<String> = self
            .visible_options()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        for name in &names {
            self.selection.insert(name);
        }
        self.clamp_indices();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.clamp_indices();
    }

    pub fn restore_defaults(&mut self) {
        self.selection = default_selection(&self.options, &self.default_countries);
        self.clamp_indices();
    }

    pub fn push_search(&mut self, ch: char) {
        self.search.push(ch);
        self.sidebar_index = 0;
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
        self.sidebar_index = 0;
    }

    pub fn end_search(&mut self, keep: bool) {
        self.searching = false;
        if !keep {
            self.search.clear();
            self.sidebar_index = 0;
        }
    }

    pub fn cycle_sort_column(&mut self) {
        let next = wrap_increment(self.table_sort.column.index(), SortColumn::ALL.len());
        if let Some(column) = SortColumn::from_index(next) {
            self.table_sort.column = column;
        }
        self.table_index = 0;
    }

    pub fn cycle_sort_column_back(&mut self) {
        let prev = wrap_decrement(self.table_sort.column.index(), SortColumn::ALL.len());
        if let Some(column) = SortColumn::from_index(prev) {
            self.table_sort.column = column;
        }
        self.table_index = 0;
    }

    pub fn toggle_sort_order(&mut self) {
        self.table_sort.descending = !self.table_sort.descending;
        self.table_index = 0;
    }

    pub fn table_len(&self) -> usize {
        self.view().table.len()
    }

    #[allow(clippy::missing_const_for_fn)]
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Table,
            Focus::Table => Focus::Sidebar,
        };
    }

    fn clamp_indices(&mut self) {
        let visible = self.visible_options().len();
        self.sidebar_index = self.sidebar_index.min(visible.saturating_sub(1));
        let rows = self.table_len();
        self.table_index = self.table_index.min(rows.saturating_sub(1));
    }
}
