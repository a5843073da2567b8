use log::{info, warn};

use super::helpers::{format_date, sorted_records};
use crate::application::dtos::{CalendarDayDto, MoodCalendarDto, StreakStatsDto};
use truthmirror_domain::mood::MoodApi;
use truthmirror_domain::shared::DomainError;
use truthmirror_domain::streak::StreakCalculator;

pub async fn get_stats(mood_api: &dyn MoodApi, range: &str) -> Result<StreakStatsDto, DomainError> {
    let moods = mood_api.fetch_daily_moods(range).await?;
    let records = sorted_records(&moods);
    let stats = StreakCalculator::compute_stats(&records);

    info!(
        "[streak] stats range={} records={} current={} longest={}",
        range,
        records.len(),
        stats.current_streak,
        stats.longest_streak
    );
    Ok(stats.into())
}

pub async fn get_calendar(
    mood_api: &dyn MoodApi,
    range: &str,
) -> Result<MoodCalendarDto, DomainError> {
    let moods = mood_api.fetch_daily_moods(range).await?;
    let records = sorted_records(&moods);

    if records.is_empty() {
        warn!("[calendar] empty result range={}", range);
    }

    let stats = StreakCalculator::compute_stats(&records);
    let days: Vec<CalendarDayDto> = records
        .iter()
        .map(|record| CalendarDayDto {
            date: format_date(record.date),
            valence: record.valence,
            value: record.valence.heat_value(),
        })
        .collect();

    let dto = MoodCalendarDto {
        range: range.to_string(),
        from: records.first().map(|r| format_date(r.date)),
        to: records.last().map(|r| format_date(r.date)),
        days,
        stats: stats.into(),
    };

    info!(
        "[calendar] range={} days={} from={:?} to={:?}",
        dto.range,
        dto.days.len(),
        dto.from,
        dto.to
    );
    Ok(dto)
}
