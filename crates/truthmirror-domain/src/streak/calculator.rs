use chrono::NaiveDate;
use log::debug;

use crate::mood::{MoodRecord, Valence};

use super::value_objects::StreakStats;

/// Computes positive-day streak statistics from an unordered mood feed.
///
/// Records are stably sorted by date, then scanned once. A positive record
/// extends the run only if the previous positive record is exactly one
/// calendar day earlier; any negative or neutral record ends the run.
/// Records sharing a date are not merged: a second record on the same day
/// is not contiguous with the first and restarts the run at 1.
pub struct StreakCalculator;

impl StreakCalculator {
    pub fn compute_stats(records: &[MoodRecord]) -> StreakStats {
        let mut sorted = records.to_vec();
        sorted.sort_by_key(|record| record.date);

        let mut stats = StreakStats::default();
        let mut previous_date: Option<NaiveDate> = None;

        for record in &sorted {
            match record.valence {
                Valence::Positive => {
                    stats.current_streak = match previous_date {
                        Some(prev) if (record.date - prev).num_days() == 1 => {
                            stats.current_streak + 1
                        }
                        _ => 1,
                    };

                    stats.longest_streak = stats.longest_streak.max(stats.current_streak);
                    stats.positive_days += 1;
                    stats.last_positive_date = Some(record.date);
                    previous_date = Some(record.date);
                }
                Valence::Negative | Valence::Neutral => {
                    stats.current_streak = 0;
                    previous_date = None;
                }
            }
        }

        debug!(
            "[streak] compute_stats records={} current={} longest={} positive_days={}",
            sorted.len(),
            stats.current_streak,
            stats.longest_streak,
            stats.positive_days
        );

        stats
    }
}
