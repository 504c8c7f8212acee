//! Dashboard state
//!
//! The dashboard's view state as an immutable snapshot plus a pure reducer:
//! every fetch result or user action becomes a `DashboardEvent`, and
//! `reduce` maps (state, event) to the next state. Nothing here performs
//! I/O, so the whole dashboard behavior is testable without a network.

use crate::stats::{
    selectors, sort_by_field, Coordinates, CountrySelector, CountryStat, GlobalStat,
    HistoricalTimeline, StatField, Totals,
};

/// Default map center over the Atlantic, covering most countries at zoom 3
pub const DEFAULT_MAP_CENTER: Coordinates = Coordinates {
    lat: 34.80746,
    lng: -40.4796,
};
pub const DEFAULT_MAP_ZOOM: u8 = 3;

/// Zoom level used once a single country is focused
pub const COUNTRY_MAP_ZOOM: u8 = 4;

/// The current selection of the country dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    /// The fixed "all countries" sentinel
    Worldwide,
    /// A single country by its selector code
    Country(String),
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Worldwide => write!(f, "worldwide"),
            Region::Country(code) => write!(f, "{}", code),
        }
    }
}

/// Immutable snapshot of everything the dashboard renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Current dropdown selection
    pub region: Region,
    /// Totals shown on the summary cards (worldwide or one country)
    pub totals: Option<Totals>,
    /// Country table, sorted descending by cases
    pub table: Vec<CountryStat>,
    /// Dropdown entries derived from the country list
    pub selectors: Vec<CountrySelector>,
    /// Unsorted country list backing the map circles
    pub map_countries: Vec<CountryStat>,
    /// Map viewport
    pub map_center: Coordinates,
    pub map_zoom: u8,
    /// Metric highlighted on cards, map, and graph
    pub metric: StatField,
    /// Worldwide history for the line graph
    pub history: Option<HistoricalTimeline>,
    /// Most recent fetch failure, if any
    pub last_error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            region: Region::Worldwide,
            totals: None,
            table: Vec::new(),
            selectors: Vec::new(),
            map_countries: Vec::new(),
            map_center: DEFAULT_MAP_CENTER,
            map_zoom: DEFAULT_MAP_ZOOM,
            metric: StatField::Cases,
            history: None,
            last_error: None,
        }
    }
}

/// Everything that can change the dashboard state
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// Worldwide totals arrived
    GlobalLoaded(GlobalStat),
    /// The per-country list arrived
    CountriesLoaded(Vec<CountryStat>),
    /// A single country's totals arrived
    CountryLoaded(CountryStat),
    /// The user picked a region in the dropdown
    RegionSelected(Region),
    /// The user switched the highlighted metric
    MetricChanged(StatField),
    /// Worldwide history arrived
    HistoryLoaded(HistoricalTimeline),
    /// A fetch came back as a failure
    FetchFailed { operation: &'static str, message: String },
}

/// Apply one event to a state snapshot, producing the next snapshot.
///
/// Pure: the input state is only read. The three fetch results write to
/// disjoint parts of the state, so they may be applied in any order.
pub fn reduce(state: &DashboardState, event: DashboardEvent) -> DashboardState {
    let mut next = state.clone();

    match event {
        DashboardEvent::GlobalLoaded(global) => {
            next.totals = Some(Totals::from(&global));
            next.map_center = DEFAULT_MAP_CENTER;
            next.map_zoom = DEFAULT_MAP_ZOOM;
            next.last_error = None;
        }
        DashboardEvent::CountriesLoaded(countries) => {
            next.selectors = selectors(&countries);
            next.map_countries = countries.clone();
            next.table = sort_by_field(countries, StatField::Cases);
            next.last_error = None;
        }
        DashboardEvent::CountryLoaded(country) => {
            next.map_center = country.coordinates();
            next.map_zoom = COUNTRY_MAP_ZOOM;
            next.totals = Some(Totals::from(&country));
            next.last_error = None;
        }
        DashboardEvent::RegionSelected(region) => {
            next.region = region;
        }
        DashboardEvent::MetricChanged(metric) => {
            next.metric = metric;
        }
        DashboardEvent::HistoryLoaded(timeline) => {
            next.history = Some(timeline);
            next.last_error = None;
        }
        DashboardEvent::FetchFailed { operation, message } => {
            next.last_error = Some(format!("{}: {}", operation, message));
        }
    }

    next
}
