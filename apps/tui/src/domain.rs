use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// One country's cumulative statistics as served by the summary endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountrySummary {
    pub country: String,
    pub country_code: String,
    pub total_confirmed: u64,
    pub total_deaths: u64,
    pub total_recovered: u64,
    /// Any other keys in the payload, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CountrySummary {
    pub fn new(
        country: impl Into<String>,
        country_code: impl Into<String>,
        total_confirmed: u64,
        total_deaths: u64,
        total_recovered: u64,
    ) -> Self {
        Self {
            country: country.into(),
            country_code: country_code.into(),
            total_confirmed,
            total_deaths,
            total_recovered,
            extra: Map::new(),
        }
    }
}

/// Top-level shape of the summary response; only `Countries` is read
#[derive(Debug, Deserialize)]
pub struct SummaryPayload {
    #[serde(rename = "Countries")]
    pub countries: Vec<CountrySummary>,
}

/// The full table produced by one fetch. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Snapshot {
    rows: Vec<CountrySummary>,
    fetched_at: DateTime<Local>,
}

impl Snapshot {
    /// Builds a snapshot, keeping the first row for any repeated country name.
    pub fn new(rows: Vec<CountrySummary>) -> Self {
        let mut seen = HashSet::with_capacity(rows.len());
        let mut unique = Vec::with_capacity(rows.len());
        for row in rows {
            if seen.insert(row.country.clone()) {
                unique.push(row);
            } else {
                tracing::warn!(country = %row.country, "duplicate country in payload, keeping first row");
            }
        }

        Self {
            rows: unique,
            fetched_at: Local::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn rows(&self) -> &[CountrySummary] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub const fn fetched_at(&self) -> DateTime<Local> {
        self.fetched_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_keeps_extra_fields() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"{
            "Global": {"TotalConfirmed": 150},
            "Countries": [
                {"Country": "A", "CountryCode": "AA", "Slug": "a",
                 "TotalConfirmed": 100, "TotalDeaths": 4, "TotalRecovered": 80,
                 "NewConfirmed": 3}
            ]
        }"#;

        let payload: SummaryPayload = serde_json::from_str(body)?;
        assert_eq!(payload.countries.len(), 1);

        let row = &payload.countries[0];
        assert_eq!(row.country, "A");
        assert_eq!(row.country_code, "AA");
        assert_eq!(row.total_confirmed, 100);
        assert_eq!(row.extra.get("Slug"), Some(&Value::from("a")));
        assert_eq!(row.extra.get("NewConfirmed"), Some(&Value::from(3)));

        Ok(())
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let body = r#"{"Countries": [{"Country": "A", "CountryCode": "AA"}]}"#;
        assert!(serde_json::from_str::<SummaryPayload>(body).is_err());
    }

    #[test]
    fn test_snapshot_drops_duplicate_countries() {
        let snapshot = Snapshot::new(vec![
            CountrySummary::new("A", "AA", 100, 1, 1),
            CountrySummary::new("B", "BB", 50, 1, 1),
            CountrySummary::new("A", "AA", 7, 0, 0),
        ]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.rows()[0].total_confirmed, 100);
    }
}
