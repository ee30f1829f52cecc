use std::collections::HashMap;

use super::models::{AppSummary, FeatureSummary, UsageRecord};

/// Delimiter separating the app name from a feature name in record keys
const FEATURE_DELIMITER: char = '-';

/// Split a record key into app name and optional feature name.
///
/// Only the first delimiter counts: `wxEditorPro-doc-save` is the
/// `doc-save` feature of `wxEditorPro`.
fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once(FEATURE_DELIMITER) {
        Some((app, feature)) => (app, Some(feature)),
        None => (key, None),
    }
}

/// Group usage records by application name.
///
/// Every record contributes its count and time bounds to exactly one app;
/// records whose key contains `-` additionally produce one feature entry
/// under that app. The result is sorted by total count, descending, with
/// ties kept in first-encountered order.
pub fn aggregate_records(records: &HashMap<String, UsageRecord>) -> Vec<AppSummary> {
    // Accumulators in first-encountered order so the sort is deterministic
    let mut order: HashMap<&str, usize> = HashMap::new();
    let mut apps: Vec<AppSummary> = Vec::new();

    for (key, record) in records {
        let (app_name, feature_name) = split_key(key);

        let idx = match order.get(app_name) {
            Some(&idx) => idx,
            None => {
                order.insert(app_name, apps.len());
                apps.push(AppSummary {
                    name: app_name.to_string(),
                    total_count: 0,
                    first_visit: record.first_visit,
                    last_visit: record.last_visit,
                    features: Vec::new(),
                });
                apps.len() - 1
            }
        };

        let app = &mut apps[idx];
        app.total_count += record.count;
        app.first_visit = app.first_visit.min(record.first_visit);
        app.last_visit = app.last_visit.max(record.last_visit);

        if let Some(feature) = feature_name {
            app.features.push(FeatureSummary {
                name: feature.to_string(),
                count: record.count,
                first_visit: record.first_visit,
                last_visit: record.last_visit,
            });
        }
    }

    apps.sort_by(|a, b| b.total_count.cmp(&a.total_count));
    apps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::models::parse_visit_time;

    fn record(count: u64, first: &str, last: &str) -> UsageRecord {
        UsageRecord {
            count,
            first_visit: parse_visit_time(first).unwrap(),
            last_visit: parse_visit_time(last).unwrap(),
        }
    }

    fn input(entries: &[(&str, u64, &str, &str)]) -> HashMap<String, UsageRecord> {
        entries
            .iter()
            .map(|(key, count, first, last)| (key.to_string(), record(*count, first, last)))
            .collect()
    }

    #[test]
    fn test_featureless_record_produces_no_feature() {
        let apps = aggregate_records(&input(&[("bigdata", 5, "2024-01-01", "2024-01-02")]));

        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].name, "bigdata");
        assert_eq!(apps[0].total_count, 5);
        assert!(apps[0].features.is_empty());
    }

    #[test]
    fn test_feature_record_rolls_up_into_app() {
        let apps = aggregate_records(&input(&[
            ("bigdata", 5, "2024-01-01", "2024-01-02"),
            ("bigdata-export", 3, "2024-01-03", "2024-01-04"),
        ]));

        assert_eq!(apps.len(), 1);
        let app = &apps[0];
        assert_eq!(app.total_count, 8);
        assert_eq!(app.first_visit, parse_visit_time("2024-01-01").unwrap());
        assert_eq!(app.last_visit, parse_visit_time("2024-01-04").unwrap());

        assert_eq!(app.features.len(), 1);
        assert_eq!(app.features[0].name, "export");
        assert_eq!(app.features[0].count, 3);
    }

    #[test]
    fn test_feature_name_keeps_remaining_delimiters() {
        let apps = aggregate_records(&input(&[(
            "wxEditorPro-doc-save",
            1,
            "2024-01-01",
            "2024-01-01",
        )]));

        assert_eq!(apps[0].name, "wxEditorPro");
        assert_eq!(apps[0].features[0].name, "doc-save");
    }

    #[test]
    fn test_feature_only_app_gets_created() {
        // No bare "bigdata" record; the feature record alone creates the app
        let apps = aggregate_records(&input(&[("bigdata-export", 3, "2024-01-03", "2024-01-04")]));

        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].name, "bigdata");
        assert_eq!(apps[0].total_count, 3);
        assert_eq!(apps[0].features.len(), 1);
    }

    #[test]
    fn test_time_bounds_span_all_contributing_records() {
        let apps = aggregate_records(&input(&[
            ("app", 1, "2024-02-01", "2024-02-10"),
            ("app-a", 1, "2024-01-01", "2024-01-05"),
            ("app-b", 1, "2024-03-01", "2024-03-09"),
        ]));

        assert_eq!(apps[0].first_visit, parse_visit_time("2024-01-01").unwrap());
        assert_eq!(apps[0].last_visit, parse_visit_time("2024-03-09").unwrap());
    }

    #[test]
    fn test_sorted_descending_by_total_count() {
        let apps = aggregate_records(&input(&[
            ("small", 2, "2024-01-01", "2024-01-01"),
            ("large", 100, "2024-01-01", "2024-01-01"),
            ("medium", 30, "2024-01-01", "2024-01-01"),
        ]));

        let counts: Vec<u64> = apps.iter().map(|a| a.total_count).collect();
        assert_eq!(counts, vec![100, 30, 2]);
    }

    #[test]
    fn test_total_count_preserved() {
        let entries = input(&[
            ("a", 5, "2024-01-01", "2024-01-02"),
            ("a-x", 7, "2024-01-01", "2024-01-02"),
            ("b", 11, "2024-01-01", "2024-01-02"),
            ("c-y-z", 13, "2024-01-01", "2024-01-02"),
        ]);
        let apps = aggregate_records(&entries);

        let input_total: u64 = entries.values().map(|r| r.count).sum();
        let output_total: u64 = apps.iter().map(|a| a.total_count).sum();
        assert_eq!(input_total, output_total);
    }

    #[test]
    fn test_feature_entry_count_matches_delimited_keys() {
        let entries = input(&[
            ("a", 1, "2024-01-01", "2024-01-01"),
            ("a-x", 1, "2024-01-01", "2024-01-01"),
            ("a-y", 1, "2024-01-01", "2024-01-01"),
            ("b-z", 1, "2024-01-01", "2024-01-01"),
        ]);
        let apps = aggregate_records(&entries);

        let features: usize = apps.iter().map(|a| a.features.len()).sum();
        let delimited = entries.keys().filter(|k| k.contains('-')).count();
        assert_eq!(features, delimited);
    }

    #[test]
    fn test_empty_input() {
        let apps = aggregate_records(&HashMap::new());
        assert!(apps.is_empty());
    }

    #[test]
    fn test_idempotent_over_same_input() {
        let entries = input(&[
            ("a", 5, "2024-01-01", "2024-01-02"),
            ("a-x", 7, "2024-01-03", "2024-01-04"),
            ("b", 7, "2024-01-01", "2024-01-02"),
            ("c-y", 2, "2024-01-01", "2024-01-02"),
        ]);

        assert_eq!(aggregate_records(&entries), aggregate_records(&entries));
    }
}
