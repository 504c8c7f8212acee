//! # Covtrack
//!
//! COVID-19 statistics tracker - fetches live worldwide case data from the
//! public disease.sh API and renders it as summary cards, a sortable
//! country table, and a history graph.
//!
//! ## Modules
//!
//! - [`stats`]: data model and the pure normalization/formatting core
//! - [`client`]: typed HTTP client for the disease.sh endpoints
//! - [`dashboard`]: state snapshot + reducer, fetch tasks, and rendering
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use covtrack::client::{ApiClientConfig, CovidApiClient};
//! use covtrack::stats::{sort_by_field, StatField};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CovidApiClient::new(ApiClientConfig::default())?;
//!
//!     let countries = client.countries().await?;
//!     let by_cases = sort_by_field(countries, StatField::Cases);
//!
//!     for stat in by_cases.iter().take(10) {
//!         println!("{}: {}", stat.country, stat.cases);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod dashboard;
pub mod stats;

// Re-export top-level types for convenience
pub use client::{ApiClientConfig, ApiError, CovidApiClient};

pub use stats::{
    daily_changes, format_stat, selectors, sort_by_field, Coordinates, CountrySelector,
    CountryStat, GlobalStat, HistoricalTimeline, StatField, Totals,
};

pub use dashboard::{
    load_initial, reduce, render_cards, render_history, render_table, select_region,
    DashboardEvent, DashboardState, Region,
};

pub use config::{Config, ConfigError, LoggingConfig};
