//! Worldwide historical time series
//!
//! The history endpoint returns cumulative counts keyed by `M/D/YY` date
//! strings. This module parses those keys into real dates and derives the
//! day-over-day changes the line graph plots.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::warn;

use super::types::StatField;

/// Upstream date key format, e.g. "3/1/20" or "11/15/20"
const DATE_KEY_FORMAT: &str = "%-m/%-d/%y";

/// Raw wire shape of the historical endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RawTimeline {
    #[serde(default)]
    pub cases: BTreeMap<String, u64>,
    #[serde(default)]
    pub deaths: BTreeMap<String, u64>,
    #[serde(default)]
    pub recovered: BTreeMap<String, u64>,
}

/// Historical cumulative counts with parsed, chronologically ordered keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalTimeline {
    pub cases: BTreeMap<NaiveDate, u64>,
    pub deaths: BTreeMap<NaiveDate, u64>,
    pub recovered: BTreeMap<NaiveDate, u64>,
}

impl From<RawTimeline> for HistoricalTimeline {
    fn from(raw: RawTimeline) -> Self {
        Self {
            cases: parse_series(raw.cases),
            deaths: parse_series(raw.deaths),
            recovered: parse_series(raw.recovered),
        }
    }
}

impl HistoricalTimeline {
    /// Series for a metric; the `today_*` variants share their cumulative
    /// series, since daily changes are derived from the same data.
    pub fn series(&self, field: StatField) -> &BTreeMap<NaiveDate, u64> {
        match field {
            StatField::Cases | StatField::TodayCases => &self.cases,
            StatField::Deaths | StatField::TodayDeaths => &self.deaths,
            StatField::Recovered | StatField::TodayRecovered => &self.recovered,
        }
    }
}

/// Parse upstream date keys, dropping any that do not parse.
fn parse_series(raw: BTreeMap<String, u64>) -> BTreeMap<NaiveDate, u64> {
    let mut series = BTreeMap::new();
    for (key, value) in raw {
        match NaiveDate::parse_from_str(&key, DATE_KEY_FORMAT) {
            Ok(date) => {
                series.insert(date, value);
            }
            Err(e) => {
                warn!(key = %key, error = %e, "skipping unparseable history date");
            }
        }
    }
    series
}

/// Day-over-day changes of a cumulative series, in chronological order.
///
/// The first day has no predecessor and is skipped; corrections in the
/// upstream data can make a change negative.
pub fn daily_changes(series: &BTreeMap<NaiveDate, u64>) -> Vec<(NaiveDate, i64)> {
    let mut changes = Vec::with_capacity(series.len().saturating_sub(1));
    let mut prev: Option<u64> = None;
    for (&date, &value) in series {
        if let Some(p) = prev {
            changes.push((date, value as i64 - p as i64));
        }
        prev = Some(value);
    }
    changes
}
