mod mood_stats_queries;

pub use mood_stats_queries::MoodStatsQueries;
