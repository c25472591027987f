use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::domain::{CountrySummary, Snapshot};

/// How many countries the map shows
pub const MAP_TOP_N: usize = 20;

/// Column headers of the table view, in display order
pub const TABLE_COLUMNS: [&str; 4] = ["Country", "TotalConfirmed", "TotalDeaths", "TotalRecovered"];

/// The set of country names the user picked in the sidebar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, country: &str) -> bool {
        self.0.contains(country)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Adds the country if absent, removes it otherwise
    pub fn toggle(&mut self, country: &str) {
        if !self.0.remove(country) {
            self.0.insert(country.to_string());
        }
    }

    pub fn insert(&mut self, country: &str) {
        self.0.insert(country.to_string());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drops names that are not among `options`
    pub fn retain_known(&mut self, options: &[String]) {
        self.0.retain(|name| options.binary_search(name).is_ok());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GlobalMetrics {
    pub total_confirmed: u64,
    pub total_deaths: u64,
    pub total_recovered: u64,
}

/// Sums over every row of the snapshot, regardless of the selection
pub fn global_metrics(rows: &[CountrySummary]) -> GlobalMetrics {
    rows.iter().fold(GlobalMetrics::default(), |acc, row| GlobalMetrics {
        total_confirmed: acc.total_confirmed.saturating_add(row.total_confirmed),
        total_deaths: acc.total_deaths.saturating_add(row.total_deaths),
        total_recovered: acc.total_recovered.saturating_add(row.total_recovered),
    })
}

/// Rows whose country is selected, in snapshot order.
/// An empty selection means no filtering.
pub fn filter_rows<'a>(rows: &'a [CountrySummary], selection: &Selection) -> Vec<&'a CountrySummary> {
    if selection.is_empty() {
        return rows.iter().collect();
    }

    rows.iter()
        .filter(|row| selection.contains(&row.country))
        .collect()
}

/// Sorted country names offered by the multi-select
pub fn country_options(rows: &[CountrySummary]) -> Vec<String> {
    let mut options: Vec<String> = rows.iter().map(|row| row.country.clone()).collect();
    options.sort();
    options
}

/// The configured defaults that actually exist in this snapshot
pub fn default_selection(options: &[String], defaults: &[String]) -> Selection {
    Selection::new(
        defaults
            .iter()
            .filter(|name| options.binary_search(name).is_ok())
            .cloned(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarPoint<'a> {
    pub country: &'a str,
    pub confirmed: u64,
}

pub fn bar_points<'a>(filtered: &[&'a CountrySummary]) -> Vec<BarPoint<'a>> {
    filtered
        .iter()
        .map(|row| BarPoint {
            country: &row.country,
            confirmed: row.total_confirmed,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapPoint<'a> {
    pub country: &'a str,
    pub country_code: &'a str,
    pub confirmed: u64,
}

/// Top `MAP_TOP_N` rows of the full snapshot by confirmed cases.
/// Ties keep snapshot order.
pub fn map_points(rows: &[CountrySummary]) -> Vec<MapPoint<'_>> {
    let mut ranked: Vec<&CountrySummary> = rows.iter().collect();
    ranked.sort_by(|a, b| b.total_confirmed.cmp(&a.total_confirmed));
    ranked
        .into_iter()
        .take(MAP_TOP_N)
        .map(|row| MapPoint {
            country: &row.country,
            country_code: &row.country_code,
            confirmed: row.total_confirmed,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Country,
    Confirmed,
    Deaths,
    Recovered,
}

impl SortColumn {
    pub const ALL: [Self; 4] = [Self::Country, Self::Confirmed, Self::Deaths, Self::Recovered];

    pub const fn index(self) -> usize {
        match self {
            Self::Country => 0,
            Self::Confirmed => 1,
            Self::Deaths => 2,
            Self::Recovered => 3,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Country),
            1 => Some(Self::Confirmed),
            2 => Some(Self::Deaths),
            3 => Some(Self::Recovered),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        TABLE_COLUMNS[self.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSort {
    pub column: SortColumn,
    pub descending: bool,
}

impl Default for TableSort {
    fn default() -> Self {
        Self {
            column: SortColumn::Confirmed,
            descending: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableRow<'a> {
    pub country: &'a str,
    pub total_confirmed: u64,
    pub total_deaths: u64,
    pub total_recovered: u64,
}

impl TableRow<'_> {
    pub fn cells(&self) -> [String; 4] {
        [
            self.country.to_string(),
            crate::format::thousands(self.total_confirmed),
            crate::format::thousands(self.total_deaths),
            crate::format::thousands(self.total_recovered),
        ]
    }

    fn compare(&self, other: &Self, column: SortColumn) -> Ordering {
        match column {
            SortColumn::Country => self.country.cmp(other.country),
            SortColumn::Confirmed => self.total_confirmed.cmp(&other.total_confirmed),
            SortColumn::Deaths => self.total_deaths.cmp(&other.total_deaths),
            SortColumn::Recovered => self.total_recovered.cmp(&other.total_recovered),
        }
    }
}

/// The filtered rows cut down to the four table columns and sorted
pub fn table_rows<'a>(filtered: &[&'a CountrySummary], sort: TableSort) -> Vec<TableRow<'a>> {
    let mut rows: Vec<TableRow<'a>> = filtered
        .iter()
        .map(|row| TableRow {
            country: &row.country,
            total_confirmed: row.total_confirmed,
            total_deaths: row.total_deaths,
            total_recovered: row.total_recovered,
        })
        .collect();

    rows.sort_by(|a, b| {
        let ordering = a.compare(b, sort.column);
        if sort.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    rows
}

/// Everything one render pass needs, derived from a snapshot and a selection
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub metrics: GlobalMetrics,
    pub filtered: Vec<&'a CountrySummary>,
    pub bars: Vec<BarPoint<'a>>,
    pub map: Vec<MapPoint<'a>>,
    pub table: Vec<TableRow<'a>>,
}

impl<'a> DashboardView<'a> {
    pub fn build(snapshot: &'a Snapshot, selection: &Selection, sort: TableSort) -> Self {
        let rows = snapshot.rows();
        let filtered = filter_rows(rows, selection);
        let bars = bar_points(&filtered);
        let table = table_rows(&filtered, sort);

        Self {
            metrics: global_metrics(rows),
            map: map_points(rows),
            filtered,
            bars,
            table,
        }
    }
}
