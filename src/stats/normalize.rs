//! Data normalization for display
//!
//! Pure functions between the raw API payloads and the view:
//! - `sort_by_field`: order the country list descending by a metric
//! - `selectors`: derive the entries for the country selection control
//! - `format_stat`: render a count with thousands separators
//!
//! Everything here is synchronous and side-effect-free; callers may invoke
//! these repeatedly or from multiple tasks.

use super::types::{CountrySelector, CountryStat, StatField};

/// Sort country records descending by the given metric.
///
/// The output is a permutation of the input: no record is created, dropped,
/// or mutated. The sort is stable (`Vec::sort_by`), so records with equal
/// values keep their input order and repeated calls yield identical output.
pub fn sort_by_field(mut records: Vec<CountryStat>, field: StatField) -> Vec<CountryStat> {
    records.sort_by(|a, b| field.value_of(b).cmp(&field.value_of(a)));
    records
}

/// Derive the selection-control entries, one per record, in input order.
pub fn selectors(records: &[CountryStat]) -> Vec<CountrySelector> {
    records
        .iter()
        .map(|stat| CountrySelector {
            name: stat.country.clone(),
            code: stat.country_info.iso2.clone(),
        })
        .collect()
}

/// Format a count for display with comma thousands separators.
///
/// `None` renders as `"0"`, matching the card behavior when a field is
/// absent from the upstream payload. Negative values keep their sign.
pub fn format_stat(value: Option<i64>) -> String {
    let value = match value {
        Some(v) => v,
        None => return "0".to_string(),
    };

    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }

    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::types::CountryInfo;

    fn stat(name: &str, iso2: Option<&str>, cases: u64) -> CountryStat {
        CountryStat {
            country: name.to_string(),
            country_info: CountryInfo {
                iso2: iso2.map(str::to_string),
                iso3: None,
                lat: 0.0,
                long: 0.0,
            },
            cases,
            today_cases: 0,
            deaths: 0,
            today_deaths: 0,
            recovered: 0,
            today_recovered: 0,
            updated: None,
        }
    }

    #[test]
    fn test_sort_descending_by_cases() {
        let input = vec![stat("A", Some("AA"), 500), stat("B", Some("BB"), 1500)];
        let sorted = sort_by_field(input, StatField::Cases);

        assert_eq!(sorted[0].country, "B");
        assert_eq!(sorted[1].country, "A");
    }

    #[test]
    fn test_sort_is_permutation() {
        let input = vec![
            stat("A", None, 3),
            stat("B", None, 1),
            stat("C", None, 2),
            stat("D", None, 1),
        ];
        let mut names_in: Vec<_> = input.iter().map(|s| s.country.clone()).collect();
        let sorted = sort_by_field(input, StatField::Cases);
        let mut names_out: Vec<_> = sorted.iter().map(|s| s.country.clone()).collect();

        names_in.sort();
        names_out.sort();
        assert_eq!(names_in, names_out);
    }

    #[test]
    fn test_sort_ties_preserve_input_order() {
        // The end-to-end scenario: B and C tie at 1500, B stays before C.
        let input = vec![
            stat("A", None, 500),
            stat("B", None, 1500),
            stat("C", None, 1500),
        ];
        let sorted = sort_by_field(input, StatField::Cases);
        let names: Vec<_> = sorted.iter().map(|s| s.country.as_str()).collect();

        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_idempotent() {
        let input = vec![
            stat("A", None, 7),
            stat("B", None, 7),
            stat("C", None, 9),
            stat("D", None, 1),
        ];
        let once = sort_by_field(input, StatField::Cases);
        let twice = sort_by_field(once.clone(), StatField::Cases);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_empty_input() {
        let sorted = sort_by_field(Vec::new(), StatField::Deaths);
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_sort_by_today_field_with_negatives() {
        let mut a = stat("A", None, 0);
        a.today_cases = -50;
        let mut b = stat("B", None, 0);
        b.today_cases = 200;
        let mut c = stat("C", None, 0);
        c.today_cases = 0;

        let sorted = sort_by_field(vec![a, b, c], StatField::TodayCases);
        let names: Vec<_> = sorted.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_selectors_one_to_one() {
        let input = vec![
            stat("United States", Some("US"), 10),
            stat("MS Zaandam", None, 9),
            stat("France", Some("FR"), 8),
        ];
        let sel = selectors(&input);

        assert_eq!(sel.len(), 3);
        assert_eq!(sel[0].name, "United States");
        assert_eq!(sel[0].code.as_deref(), Some("US"));
        assert_eq!(sel[1].code, None);
        assert_eq!(sel[2].name, "France");
    }

    #[test]
    fn test_format_stat_none_is_zero() {
        assert_eq!(format_stat(None), "0");
    }

    #[test]
    fn test_format_stat_grouping() {
        assert_eq!(format_stat(Some(0)), "0");
        assert_eq!(format_stat(Some(7)), "7");
        assert_eq!(format_stat(Some(999)), "999");
        assert_eq!(format_stat(Some(1000)), "1,000");
        assert_eq!(format_stat(Some(12345)), "12,345");
        assert_eq!(format_stat(Some(1234567)), "1,234,567");
        assert_eq!(format_stat(Some(1_000_000_000)), "1,000,000,000");
    }

    #[test]
    fn test_format_stat_negative() {
        assert_eq!(format_stat(Some(-5)), "-5");
        assert_eq!(format_stat(Some(-1234)), "-1,234");
        assert_eq!(format_stat(Some(-1234567)), "-1,234,567");
    }
}
