use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

/// Raw record as it appears in the remote JSON payload
///
/// The payload is a flat object keyed by record name:
/// `{"bigdata-export": {"count": 3, "firstVisit": "...", "lastVisit": "..."}}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub count: u64,
    pub first_visit: String,
    pub last_visit: String,
}

/// Processed usage record with parsed timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRecord {
    pub count: u64,
    pub first_visit: DateTime<Utc>,
    pub last_visit: DateTime<Utc>,
}

impl RawRecord {
    /// Convert to a [`UsageRecord`], returning the offending field on failure
    pub fn into_record(self) -> Result<UsageRecord, String> {
        let first_visit = parse_visit_time(&self.first_visit)
            .ok_or_else(|| format!("unparseable firstVisit: {:?}", self.first_visit))?;
        let last_visit = parse_visit_time(&self.last_visit)
            .ok_or_else(|| format!("unparseable lastVisit: {:?}", self.last_visit))?;

        Ok(UsageRecord {
            count: self.count,
            first_visit,
            last_visit,
        })
    }
}

/// Parse the timestamp formats the feed has been seen to emit.
///
/// Accepts RFC 3339, naive date-times (with or without fraction), bare
/// dates (midnight UTC), and integer epoch seconds or milliseconds.
pub fn parse_visit_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    if let Ok(epoch) = s.parse::<i64>() {
        // Heuristic: anything past the year 33658 in seconds is milliseconds
        if epoch.abs() >= 1_000_000_000_000 {
            return Utc.timestamp_millis_opt(epoch).single();
        }
        return Utc.timestamp_opt(epoch, 0).single();
    }

    None
}

/// Per-feature usage summary (one per record whose key contained `-`)
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSummary {
    pub name: String,
    pub count: u64,
    pub first_visit: DateTime<Utc>,
    pub last_visit: DateTime<Utc>,
}

/// Aggregated usage for one application
#[derive(Debug, Clone, PartialEq)]
pub struct AppSummary {
    pub name: String,
    /// Sum of counts across all contributing records
    pub total_count: u64,
    /// Earliest first visit over all contributing records
    pub first_visit: DateTime<Utc>,
    /// Latest last visit over all contributing records
    pub last_visit: DateTime<Utc>,
    /// Feature breakdown, in first-encountered order
    pub features: Vec<FeatureSummary>,
}

/// Headline scalars shown in the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardTotals {
    pub apps: usize,
    pub total_uses: u64,
    pub total_features: usize,
    pub avg_uses: u64,
}

impl DashboardTotals {
    pub fn compute(summaries: &[AppSummary]) -> Self {
        let apps = summaries.len();
        let total_uses: u64 = summaries.iter().map(|s| s.total_count).sum();
        let total_features = summaries.iter().map(|s| s.features.len()).sum();
        let avg_uses = if apps > 0 {
            (total_uses as f64 / apps as f64).round() as u64
        } else {
            0
        };

        Self {
            apps,
            total_uses,
            total_features,
            avg_uses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_visit_time("2024-01-15T08:30:00+08:00").unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_naive_datetime() {
        assert!(parse_visit_time("2024-01-15T08:30:00").is_some());
        assert!(parse_visit_time("2024-01-15 08:30:00").is_some());
        assert!(parse_visit_time("2024-01-15T08:30:00.123").is_some());
    }

    #[test]
    fn test_parse_bare_date_is_midnight_utc() {
        let dt = parse_visit_time("2024-01-15").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-15T00:00:00+00:00");
    }

    #[test]
    fn test_parse_epoch_seconds_and_millis() {
        let secs = parse_visit_time("1705305600").unwrap();
        let millis = parse_visit_time("1705305600000").unwrap();
        assert_eq!(secs, millis);
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse_visit_time("not a date").is_none());
        assert!(parse_visit_time("").is_none());
    }

    #[test]
    fn test_raw_record_camel_case_fields() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"count": 5, "firstVisit": "2024-01-01", "lastVisit": "2024-01-02"}"#,
        )
        .unwrap();
        let record = raw.into_record().unwrap();
        assert_eq!(record.count, 5);
        assert!(record.first_visit < record.last_visit);
    }

    #[test]
    fn test_raw_record_bad_timestamp_rejected() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"count": 1, "firstVisit": "whenever", "lastVisit": "2024-01-02"}"#,
        )
        .unwrap();
        let err = raw.into_record().unwrap_err();
        assert!(err.contains("firstVisit"));
    }

    #[test]
    fn test_totals_empty_is_all_zero() {
        let totals = DashboardTotals::compute(&[]);
        assert_eq!(totals, DashboardTotals::default());
    }
}
