use chrono::NaiveDate;
use log::warn;

use truthmirror_domain::mood::{DailyMood, MoodRecord};

/// Records from the daily feed, sorted ascending by date.
///
/// Rows whose date cannot be read are skipped. The sort is stable, so rows
/// sharing a date keep their feed order.
pub fn sorted_records(moods: &[DailyMood]) -> Vec<MoodRecord> {
    let mut records: Vec<MoodRecord> = moods
        .iter()
        .filter_map(|mood| {
            let record = mood.to_record();
            if record.is_none() {
                warn!("[calendar] skip row with unreadable date {:?}", mood.date);
            }
            record
        })
        .collect();
    records.sort_by_key(|r| r.date);
    records
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Confidence in [0, 1] as a whole percent
pub fn to_percent(confidence: f64) -> u32 {
    if confidence.is_finite() && confidence > 0.0 {
        (confidence * 100.0).round() as u32
    } else {
        0
    }
}
