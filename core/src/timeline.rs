// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use uuid::Uuid;

use crate::{Error, Locale};

/// One activity as the server owns it. The client only reads and reformats.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityRecord {
    /// Server-assigned identifier.
    pub id: Uuid,

    /// What the activity is.
    pub title: String,

    /// When it happens, as floating local time.
    pub occurs_at: NaiveDateTime,
}

/// A server-grouped day of activities, already chronologically ordered.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub activities: Vec<ActivityRecord>,
}

/// Render-ready version of a [`DayBucket`]. Rebuilt in full on every fetch,
/// never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    /// Day-of-month number for the section heading.
    pub day_number: u32,

    /// Weekday name, pt-BR with the `-feira` suffix stripped.
    pub day_name: String,

    pub activities: Vec<SectionActivity>,
}

/// One formatted activity row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionActivity {
    pub id: Uuid,

    pub title: String,

    /// Zero-padded 12-hour clock time with an `h` suffix, e.g. `09:00h`.
    pub hour_label: String,

    /// Whether the activity already happened relative to the `now` the
    /// whole section pass was built against.
    pub is_past: bool,
}

/// Turns server day buckets into render-ready sections.
///
/// Bucket order and per-bucket activity order are preserved as delivered.
/// Empty buckets are kept so the caller can render a "no activity this day"
/// placeholder. `now` must be sampled once by the caller and passed in, so
/// every activity in the pass is judged against the same instant.
pub fn build_sections(buckets: &[DayBucket], now: NaiveDateTime, locale: Locale) -> Vec<DaySection> {
    tracing::trace!(buckets = buckets.len(), %now, "building day sections");
    buckets
        .iter()
        .map(|bucket| DaySection {
            day_number: bucket.date.day(),
            day_name: locale
                .weekday_name(bucket.date.weekday())
                .replace("-feira", ""),
            activities: bucket
                .activities
                .iter()
                .map(|activity| SectionActivity {
                    id: activity.id,
                    title: activity.title.clone(),
                    hour_label: format!("{}h", activity.occurs_at.format("%I:%M")),
                    is_past: activity.occurs_at < now,
                })
                .collect(),
        })
        .collect()
}

/// Combines a calendar day with free-typed hour text into one timestamp for
/// an activity creation request.
///
/// Decimal separators (`.` and `,`) are stripped before the text is parsed
/// as a whole number of hours from the day's midnight. The hour is NOT
/// clamped to 0-23: `"9,5"` becomes 95 hours and rolls three days forward.
/// Upstream keeps that behavior, so it is preserved here; screens are
/// expected to validate the field before calling.
pub fn combine_date_and_hour(day: NaiveDate, hour_text: &str) -> Result<NaiveDateTime, Error> {
    let sanitized: String = hour_text.chars().filter(|c| !".,".contains(*c)).collect();
    let hours: i64 = sanitized
        .trim()
        .parse()
        .map_err(|_| Error::InvalidHour(hour_text.to_string()))?;

    let midnight = day.and_time(NaiveTime::MIN);
    TimeDelta::try_hours(hours)
        .and_then(|delta| midnight.checked_add_signed(delta))
        .ok_or_else(|| Error::InvalidHour(hour_text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn activity(title: &str, occurs_at: NaiveDateTime) -> ActivityRecord {
        ActivityRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            occurs_at,
        }
    }

    fn buckets() -> Vec<DayBucket> {
        vec![
            DayBucket {
                date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                activities: vec![
                    activity("Check-in", datetime(2024, 3, 5, 14, 0)),
                    activity("Jantar", datetime(2024, 3, 5, 20, 30)),
                ],
            },
            DayBucket {
                date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
                activities: vec![],
            },
            DayBucket {
                date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
                activities: vec![activity("Trilha", datetime(2024, 3, 7, 9, 0))],
            },
        ]
    }

    #[test]
    fn sections_preserve_bucket_and_activity_order() {
        let now = datetime(2024, 3, 6, 12, 0);
        let sections = build_sections(&buckets(), now, Locale::PtBr);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].day_number, 5);
        assert_eq!(sections[1].day_number, 6);
        assert_eq!(sections[2].day_number, 7);
        assert_eq!(sections[0].activities[0].title, "Check-in");
        assert_eq!(sections[0].activities[1].title, "Jantar");
    }

    #[test]
    fn empty_buckets_are_retained() {
        let now = datetime(2024, 3, 6, 12, 0);
        let sections = build_sections(&buckets(), now, Locale::PtBr);
        assert!(sections[1].activities.is_empty());
    }

    #[test]
    fn weekday_name_strips_feira_suffix() {
        let now = datetime(2024, 3, 6, 12, 0);
        let sections = build_sections(&buckets(), now, Locale::PtBr);

        // 2024-03-05 is a Tuesday
        assert_eq!(sections[0].day_name, "terça");
        // 2024-03-07 is a Thursday
        assert_eq!(sections[2].day_name, "quinta");

        let sections = build_sections(&buckets(), now, Locale::En);
        assert_eq!(sections[0].day_name, "Tuesday");
    }

    #[test]
    fn hour_label_is_zero_padded_twelve_hour_clock() {
        let now = datetime(2024, 3, 6, 12, 0);
        let sections = build_sections(&buckets(), now, Locale::PtBr);

        assert_eq!(sections[0].activities[0].hour_label, "02:00h");
        assert_eq!(sections[0].activities[1].hour_label, "08:30h");
        assert_eq!(sections[2].activities[0].hour_label, "09:00h");
    }

    #[test]
    fn is_past_judged_against_the_single_now() {
        let between = datetime(2024, 3, 5, 18, 0);
        let sections = build_sections(&buckets(), between, Locale::PtBr);

        assert!(sections[0].activities[0].is_past);
        assert!(!sections[0].activities[1].is_past);
        assert!(!sections[2].activities[0].is_past);
    }

    #[test]
    fn all_past_when_now_after_everything() {
        let late = datetime(2025, 1, 1, 0, 0);
        for section in build_sections(&buckets(), late, Locale::PtBr) {
            assert!(section.activities.iter().all(|a| a.is_past));
        }
    }

    #[test]
    fn all_future_when_now_before_everything() {
        let early = datetime(2024, 1, 1, 0, 0);
        for section in build_sections(&buckets(), early, Locale::PtBr) {
            assert!(section.activities.iter().all(|a| !a.is_past));
        }
    }

    #[test]
    fn combines_day_and_plain_hour() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let combined = combine_date_and_hour(day, "9").unwrap();
        assert_eq!(combined, datetime(2024, 3, 10, 9, 0));
    }

    // Documents upstream behavior: separators are stripped, not treated as
    // fractions, and the result is not clamped to the same day.
    #[test]
    fn decimal_separator_becomes_hour_overflow() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let combined = combine_date_and_hour(day, "9,5").unwrap();
        // "9,5" -> "95" -> 3 days and 23 hours past midnight
        assert_eq!(combined, datetime(2024, 3, 13, 23, 0));

        let combined = combine_date_and_hour(day, "9.5").unwrap();
        assert_eq!(combined, datetime(2024, 3, 13, 23, 0));
    }

    #[test]
    fn hour_beyond_midnight_rolls_into_next_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let combined = combine_date_and_hour(day, "25").unwrap();
        assert_eq!(combined, datetime(2024, 3, 11, 1, 0));
    }

    #[test]
    fn negative_hours_roll_backwards() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let combined = combine_date_and_hour(day, "-1").unwrap();
        assert_eq!(combined, datetime(2024, 3, 9, 23, 0));
    }

    #[test]
    fn non_numeric_hour_text_is_rejected() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert!(matches!(
            combine_date_and_hour(day, "soon"),
            Err(Error::InvalidHour(_))
        ));
        assert!(matches!(
            combine_date_and_hour(day, ""),
            Err(Error::InvalidHour(_))
        ));
    }

    #[test]
    fn activity_record_round_trips_wire_shape() {
        let json = r#"{
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "title": "Passeio de barco",
            "occurs_at": "2024-03-10T09:00:00"
        }"#;
        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Passeio de barco");
        assert_eq!(record.occurs_at, datetime(2024, 3, 10, 9, 0));
    }
}
