use tracing::info;

use truthmirror_domain::effects::{Celebration, CelebrationSink};

/// Headless sink: records the burst as a structured event
#[derive(Debug, Default)]
pub struct LogCelebrationSink;

impl CelebrationSink for LogCelebrationSink {
    fn celebrate(&self, celebration: &Celebration) {
        info!(
            target: "truthmirror::effects",
            streak_length = celebration.streak.length,
            particles = celebration.bursts.iter().map(|b| b.particle_count).sum::<u32>(),
            colors = ?celebration.colors,
            "🎉 celebration"
        );
    }
}
