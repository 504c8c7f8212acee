//! Core data types for COVID-19 statistics
//!
//! This module defines the types shared across the crate:
//! - `CountryStat`: one country's cumulative and daily counts
//! - `GlobalStat`: worldwide totals
//! - `StatField`: the six sortable/displayable metrics
//! - `CountrySelector`: the (name, ISO code) pair backing the selection control

use serde::{Deserialize, Serialize};

/// Statistics for a single country, as returned by the countries endpoint.
///
/// Numeric fields missing from the upstream payload deserialize to zero, so
/// sorting over partially populated records is well defined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountryStat {
    /// Country display name (e.g., "United States")
    pub country: String,
    /// ISO codes and coordinates
    #[serde(default)]
    pub country_info: CountryInfo,
    /// Cumulative confirmed cases
    #[serde(default)]
    pub cases: u64,
    /// New cases today; negative when the upstream issues a correction
    #[serde(default)]
    pub today_cases: i64,
    /// Cumulative deaths
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub today_deaths: i64,
    /// Cumulative recoveries
    #[serde(default)]
    pub recovered: u64,
    #[serde(default)]
    pub today_recovered: i64,
    /// Upstream last-updated timestamp (Unix millis)
    #[serde(default)]
    pub updated: Option<i64>,
}

/// Country metadata nested under `countryInfo` in the wire format.
///
/// `iso2` is null upstream for a handful of territories (cruise ships,
/// disputed regions), so it stays optional here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CountryInfo {
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub long: f64,
}

impl CountryStat {
    /// Coordinates for centering the map on this country
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.country_info.lat,
            lng: self.country_info.long,
        }
    }
}

/// Worldwide totals from the global endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStat {
    #[serde(default)]
    pub cases: u64,
    #[serde(default)]
    pub today_cases: i64,
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub today_deaths: i64,
    #[serde(default)]
    pub recovered: u64,
    #[serde(default)]
    pub today_recovered: i64,
    #[serde(default)]
    pub affected_countries: Option<u64>,
    #[serde(default)]
    pub updated: Option<i64>,
}

/// The six totals shown on the summary cards, regardless of whether the
/// selection is worldwide or a single country.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub cases: u64,
    pub today_cases: i64,
    pub deaths: u64,
    pub today_deaths: i64,
    pub recovered: u64,
    pub today_recovered: i64,
    pub updated: Option<i64>,
}

impl From<&GlobalStat> for Totals {
    fn from(g: &GlobalStat) -> Self {
        Self {
            cases: g.cases,
            today_cases: g.today_cases,
            deaths: g.deaths,
            today_deaths: g.today_deaths,
            recovered: g.recovered,
            today_recovered: g.today_recovered,
            updated: g.updated,
        }
    }
}

impl From<&CountryStat> for Totals {
    fn from(c: &CountryStat) -> Self {
        Self {
            cases: c.cases,
            today_cases: c.today_cases,
            deaths: c.deaths,
            today_deaths: c.today_deaths,
            recovered: c.recovered,
            today_recovered: c.today_recovered,
            updated: c.updated,
        }
    }
}

/// Entry in the country selection control
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountrySelector {
    /// Display name ("United States", "United Kingdom")
    pub name: String,
    /// ISO 3166-1 alpha-2 code ("US", "GB"); None for unassigned territories
    pub code: Option<String>,
}

/// Latitude/longitude pair for map centering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One of the six numeric metrics a country record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Cases,
    TodayCases,
    Deaths,
    TodayDeaths,
    Recovered,
    TodayRecovered,
}

impl StatField {
    /// Get all fields for iteration
    pub fn all() -> &'static [StatField] {
        &[
            StatField::Cases,
            StatField::TodayCases,
            StatField::Deaths,
            StatField::TodayDeaths,
            StatField::Recovered,
            StatField::TodayRecovered,
        ]
    }

    /// Extract this field's value from a country record.
    ///
    /// Cumulative counters are widened to `i64` so all six fields compare
    /// under one type; real-world counts are far below `i64::MAX`.
    pub fn value_of(&self, stat: &CountryStat) -> i64 {
        match self {
            StatField::Cases => stat.cases as i64,
            StatField::TodayCases => stat.today_cases,
            StatField::Deaths => stat.deaths as i64,
            StatField::TodayDeaths => stat.today_deaths,
            StatField::Recovered => stat.recovered as i64,
            StatField::TodayRecovered => stat.today_recovered,
        }
    }
}

impl std::fmt::Display for StatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatField::Cases => write!(f, "cases"),
            StatField::TodayCases => write!(f, "today_cases"),
            StatField::Deaths => write!(f, "deaths"),
            StatField::TodayDeaths => write!(f, "today_deaths"),
            StatField::Recovered => write!(f, "recovered"),
            StatField::TodayRecovered => write!(f, "today_recovered"),
        }
    }
}

impl std::str::FromStr for StatField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cases" => Ok(StatField::Cases),
            "today_cases" | "todaycases" => Ok(StatField::TodayCases),
            "deaths" => Ok(StatField::Deaths),
            "today_deaths" | "todaydeaths" => Ok(StatField::TodayDeaths),
            "recovered" => Ok(StatField::Recovered),
            "today_recovered" | "todayrecovered" => Ok(StatField::TodayRecovered),
            other => Err(format!(
                "unknown metric '{}' (expected one of: cases, today_cases, deaths, \
                 today_deaths, recovered, today_recovered)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_stat_wire_format() {
        let json = r#"{
            "updated": 1604000000000,
            "country": "France",
            "countryInfo": {"iso2": "FR", "iso3": "FRA", "lat": 46.0, "long": 2.0},
            "cases": 1200000,
            "todayCases": 35000,
            "deaths": 36000,
            "todayDeaths": 220,
            "recovered": 120000,
            "todayRecovered": 900
        }"#;

        let stat: CountryStat = serde_json::from_str(json).unwrap();
        assert_eq!(stat.country, "France");
        assert_eq!(stat.country_info.iso2.as_deref(), Some("FR"));
        assert_eq!(stat.cases, 1_200_000);
        assert_eq!(stat.today_cases, 35_000);
        assert_eq!(stat.coordinates(), Coordinates { lat: 46.0, lng: 2.0 });
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let json = r#"{"country": "Nowhere"}"#;
        let stat: CountryStat = serde_json::from_str(json).unwrap();

        assert_eq!(stat.cases, 0);
        assert_eq!(stat.today_cases, 0);
        assert_eq!(stat.deaths, 0);
        assert_eq!(stat.country_info.iso2, None);
        // All six fields sortable even when absent upstream
        for field in StatField::all() {
            assert_eq!(field.value_of(&stat), 0);
        }
    }

    #[test]
    fn test_null_iso2_accepted() {
        let json = r#"{
            "country": "MS Zaandam",
            "countryInfo": {"iso2": null, "iso3": null, "lat": 0, "long": 0},
            "cases": 9
        }"#;
        let stat: CountryStat = serde_json::from_str(json).unwrap();
        assert_eq!(stat.country_info.iso2, None);
        assert_eq!(stat.cases, 9);
    }

    #[test]
    fn test_negative_today_cases() {
        let json = r#"{"country": "X", "todayCases": -120}"#;
        let stat: CountryStat = serde_json::from_str(json).unwrap();
        assert_eq!(stat.today_cases, -120);
        assert_eq!(StatField::TodayCases.value_of(&stat), -120);
    }

    #[test]
    fn test_stat_field_round_trip() {
        for field in StatField::all() {
            let parsed: StatField = field.to_string().parse().unwrap();
            assert_eq!(parsed, *field);
        }
    }

    #[test]
    fn test_stat_field_parse_aliases() {
        assert_eq!("todayCases".parse::<StatField>(), Ok(StatField::TodayCases));
        assert_eq!(" deaths ".parse::<StatField>(), Ok(StatField::Deaths));
        assert!("active".parse::<StatField>().is_err());
    }

    #[test]
    fn test_totals_from_global_and_country() {
        let global = GlobalStat {
            cases: 50,
            today_cases: 5,
            deaths: 2,
            today_deaths: 1,
            recovered: 40,
            today_recovered: 4,
            affected_countries: Some(3),
            updated: Some(1),
        };
        let totals = Totals::from(&global);
        assert_eq!(totals.cases, 50);
        assert_eq!(totals.today_recovered, 4);

        let json = r#"{"country": "A", "cases": 7, "todayDeaths": 2}"#;
        let stat: CountryStat = serde_json::from_str(json).unwrap();
        let totals = Totals::from(&stat);
        assert_eq!(totals.cases, 7);
        assert_eq!(totals.today_deaths, 2);
    }
}
