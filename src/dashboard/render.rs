//! Terminal rendering
//!
//! Pure string producers for the dashboard surfaces: summary cards, the
//! live-cases-by-country table, and the history sparkline. Keeping these as
//! plain functions over state keeps the output testable without a terminal.

use std::fmt::Write;

use chrono::DateTime;

use crate::stats::{daily_changes, format_stat, CountryStat, HistoricalTimeline, StatField};

use super::state::DashboardState;

const SPARK_LEVELS: [char; 8] = ['\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}', '\u{2588}'];

/// Render the three summary cards for the current selection.
pub fn render_cards(state: &DashboardState) -> String {
    let mut out = String::new();

    writeln!(out, "Region: {}", state.region).unwrap();

    let totals = match &state.totals {
        Some(t) => t,
        None => {
            writeln!(out, "(no data)").unwrap();
            return out;
        }
    };

    if let Some(updated) = totals.updated {
        if let Some(dt) = DateTime::from_timestamp_millis(updated) {
            writeln!(out, "Updated: {}", dt.format("%Y-%m-%d %H:%M UTC")).unwrap();
        }
    }
    writeln!(out).unwrap();

    let cards = [
        ("Coronavirus Cases", totals.today_cases, totals.cases),
        ("Recovered", totals.today_recovered, totals.recovered),
        ("Deaths", totals.today_deaths, totals.deaths),
    ];

    for (title, _, _) in &cards {
        write!(out, "{:<24}", title).unwrap();
    }
    writeln!(out).unwrap();

    for (_, today, _) in &cards {
        // Corrections already carry a minus sign
        let sign = if *today >= 0 { "+" } else { "" };
        write!(out, "{:<24}", format!("{}{} today", sign, format_stat(Some(*today)))).unwrap();
    }
    writeln!(out).unwrap();

    for (_, _, total) in &cards {
        write!(out, "{:<24}", format!("{} total", format_stat(Some(*total as i64)))).unwrap();
    }
    writeln!(out).unwrap();

    if let Some(err) = &state.last_error {
        writeln!(out).unwrap();
        writeln!(out, "warning: {}", err).unwrap();
    }

    out
}

/// Render the sorted country table, at most `limit` rows.
pub fn render_table(table: &[CountryStat], metric: StatField, limit: usize) -> String {
    let mut out = String::new();

    writeln!(out, "{:<28} {:>15}", "Country", metric.to_string()).unwrap();
    writeln!(out, "{}", "-".repeat(44)).unwrap();

    for stat in table.iter().take(limit) {
        writeln!(
            out,
            "{:<28} {:>15}",
            stat.country,
            format_stat(Some(metric.value_of(stat)))
        )
        .unwrap();
    }

    if table.len() > limit {
        writeln!(out, "... and {} more", table.len() - limit).unwrap();
    }

    out
}

/// Render the daily-change sparkline for one metric.
pub fn render_history(timeline: &HistoricalTimeline, metric: StatField, width: usize) -> String {
    let mut out = String::new();
    let changes = daily_changes(timeline.series(metric));

    if changes.is_empty() {
        writeln!(out, "No history available").unwrap();
        return out;
    }

    let first = changes.first().unwrap().0;
    let last = changes.last().unwrap().0;
    let values: Vec<i64> = changes.iter().map(|(_, v)| *v).collect();
    let peak = values.iter().copied().max().unwrap_or(0);

    writeln!(out, "Worldwide new {} ({} to {})", metric, first, last).unwrap();
    writeln!(out, "{}", sparkline(&values, width)).unwrap();
    writeln!(out, "peak: {} per day", format_stat(Some(peak))).unwrap();

    out
}

/// Scale a series into unicode block characters, at most `width` columns.
///
/// Longer series are bucketed by averaging; negative values (upstream
/// corrections) floor at the lowest block.
pub fn sparkline(values: &[i64], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let buckets = bucket_means(values, width);
    let max = buckets.iter().copied().fold(f64::MIN, f64::max);
    let min = buckets.iter().copied().fold(f64::MAX, f64::min).max(0.0);
    let span = max - min;

    buckets
        .iter()
        .map(|&v| {
            let level = if span <= f64::EPSILON {
                0
            } else {
                let norm = ((v - min) / span).clamp(0.0, 1.0);
                (norm * (SPARK_LEVELS.len() - 1) as f64).round() as usize
            };
            SPARK_LEVELS[level]
        })
        .collect()
}

/// Compress a series into at most `width` bucket means.
fn bucket_means(values: &[i64], width: usize) -> Vec<f64> {
    if values.len() <= width {
        return values.iter().map(|&v| v as f64).collect();
    }

    let mut means = Vec::with_capacity(width);
    for i in 0..width {
        let start = i * values.len() / width;
        let end = ((i + 1) * values.len() / width).max(start + 1);
        let slice = &values[start..end];
        let sum: i64 = slice.iter().sum();
        means.push(sum as f64 / slice.len() as f64);
    }
    means
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::state::{reduce, DashboardEvent, DashboardState};
    use crate::stats::{CountryInfo, GlobalStat};
    use chrono::NaiveDate;

    fn country(name: &str, cases: u64) -> CountryStat {
        CountryStat {
            country: name.to_string(),
            country_info: CountryInfo::default(),
            cases,
            today_cases: 10,
            deaths: 1,
            today_deaths: 0,
            recovered: 2,
            today_recovered: 1,
            updated: None,
        }
    }

    #[test]
    fn test_render_cards_empty_state() {
        let out = render_cards(&DashboardState::default());
        assert!(out.contains("Region: worldwide"));
        assert!(out.contains("(no data)"));
    }

    #[test]
    fn test_render_cards_formats_each_value() {
        let global = GlobalStat {
            cases: 1_234_567,
            today_cases: 35_000,
            deaths: 36_000,
            today_deaths: 220,
            recovered: 120_000,
            today_recovered: 900,
            affected_countries: None,
            updated: None,
        };
        let state = reduce(&DashboardState::default(), DashboardEvent::GlobalLoaded(global));
        let out = render_cards(&state);

        assert!(out.contains("Coronavirus Cases"));
        assert!(out.contains("Recovered"));
        assert!(out.contains("Deaths"));
        assert!(out.contains("+35,000 today"));
        assert!(out.contains("1,234,567 total"));
        assert!(out.contains("+220 today"));
    }

    #[test]
    fn test_render_table_limit_and_order() {
        let table = vec![country("B", 1500), country("C", 1500), country("A", 500)];
        let out = render_table(&table, StatField::Cases, 2);

        let b = out.find("B").unwrap();
        let c = out.find("C").unwrap();
        assert!(b < c);
        assert!(!out.contains("A "));
        assert!(out.contains("... and 1 more"));
        assert!(out.contains("1,500"));
    }

    #[test]
    fn test_render_history() {
        let mut timeline = HistoricalTimeline::default();
        for (day, total) in [(1u32, 100u64), (2, 150), (3, 300), (4, 320)] {
            timeline
                .cases
                .insert(NaiveDate::from_ymd_opt(2020, 3, day).unwrap(), total);
        }

        let out = render_history(&timeline, StatField::Cases, 80);
        assert!(out.contains("Worldwide new cases"));
        assert!(out.contains("2020-03-02 to 2020-03-04"));
        assert!(out.contains("peak: 150 per day"));
    }

    #[test]
    fn test_render_history_empty() {
        let out = render_history(&HistoricalTimeline::default(), StatField::Deaths, 80);
        assert!(out.contains("No history available"));
    }

    #[test]
    fn test_sparkline_levels() {
        // Strictly increasing series hits the lowest and highest blocks.
        let line = sparkline(&[0, 10, 20, 30, 40, 50, 60, 70], 80);
        assert_eq!(line.chars().count(), 8);
        assert_eq!(line.chars().next(), Some('\u{2581}'));
        assert_eq!(line.chars().last(), Some('\u{2588}'));
    }

    #[test]
    fn test_sparkline_flat_series() {
        let line = sparkline(&[5, 5, 5], 80);
        assert_eq!(line, "\u{2581}\u{2581}\u{2581}");
    }

    #[test]
    fn test_sparkline_width_bucketing() {
        let values: Vec<i64> = (0..200).collect();
        let line = sparkline(&values, 50);
        assert_eq!(line.chars().count(), 50);
    }

    #[test]
    fn test_sparkline_empty() {
        assert_eq!(sparkline(&[], 80), "");
        assert_eq!(sparkline(&[1, 2], 0), "");
    }

    #[test]
    fn test_bucket_means() {
        let means = bucket_means(&[0, 10, 20, 30], 2);
        assert_eq!(means, vec![5.0, 25.0]);
    }
}
