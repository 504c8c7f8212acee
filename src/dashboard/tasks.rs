//! Fetch task composition
//!
//! The dashboard issues three kinds of requests: worldwide totals and the
//! country list on load, and single-country totals when the selection
//! changes. Each is an explicit async task whose outcome, success or
//! failure, becomes a `DashboardEvent` for the reducer. The loads are
//! independent and write disjoint state, so no ordering is imposed.

use tracing::{info, warn};

use super::state::{DashboardEvent, Region};
use crate::client::{ApiError, CovidApiClient};

/// Fetch everything the initial render needs, concurrently.
///
/// Returns one event per request; failures surface as `FetchFailed` rather
/// than aborting the other loads.
pub async fn load_initial(client: &CovidApiClient, history_days: u32) -> Vec<DashboardEvent> {
    let (global, countries, history) = tokio::join!(
        client.global(),
        client.countries(),
        client.historical(history_days),
    );

    vec![
        outcome("global totals", global.map(DashboardEvent::GlobalLoaded)),
        outcome(
            "country list",
            countries.map(|list| {
                info!(countries = list.len(), "country list loaded");
                DashboardEvent::CountriesLoaded(list)
            }),
        ),
        outcome("history", history.map(DashboardEvent::HistoryLoaded)),
    ]
}

/// Fetch the totals for a newly selected region.
///
/// The worldwide sentinel re-fetches the global endpoint; a country code
/// fetches that country.
pub async fn select_region(client: &CovidApiClient, region: &Region) -> DashboardEvent {
    match region {
        Region::Worldwide => outcome("global totals", client.global().await.map(DashboardEvent::GlobalLoaded)),
        Region::Country(code) => outcome(
            "country totals",
            client.country(code).await.map(DashboardEvent::CountryLoaded),
        ),
    }
}

/// Map a fetch outcome to its event, logging failures.
fn outcome(
    operation: &'static str,
    result: Result<DashboardEvent, ApiError>,
) -> DashboardEvent {
    match result {
        Ok(event) => event,
        Err(e) => {
            warn!(operation = operation, error = %e, "fetch failed");
            DashboardEvent::FetchFailed {
                operation,
                message: e.to_string(),
            }
        }
    }
}
