//! COVID-19 statistics: data model and normalization
//!
//! The types and pure functions between the raw disease.sh payloads and the
//! dashboard view:
//! - `types`: wire-shaped records and the `StatField` metric enum
//! - `normalize`: stable descending sort, selector derivation, formatting
//! - `history`: historical time series and day-over-day changes

pub mod history;
pub mod normalize;
pub mod types;

pub use history::{daily_changes, HistoricalTimeline, RawTimeline};
pub use normalize::{format_stat, selectors, sort_by_field};
pub use types::{
    Coordinates, CountryInfo, CountrySelector, CountryStat, GlobalStat, StatField, Totals,
};
