//! Progress math and widget phases.

use std::time::Duration;

use tokio::time::Instant;

/// Where the progress widget is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    /// Ticking towards full.
    Showing,
    /// Full bar held on screen before hiding.
    CompletingDelay,
}

/// One display of the progress bar, from `progressbar` to full.
#[derive(Debug, Clone)]
pub struct ProgressRun {
    pub label: String,
    pub started_at: Instant,
    pub duration: Duration,
}

impl ProgressRun {
    pub fn new(label: impl Into<String>, duration: Duration, started_at: Instant) -> Self {
        Self {
            label: label.into(),
            started_at,
            duration,
        }
    }

    /// Fill percentage at `now`.
    pub fn fill_at(&self, now: Instant) -> f64 {
        fill_percent(now.saturating_duration_since(self.started_at), self.duration)
    }
}

/// `min(elapsed / duration, 1)` as a percentage. A zero duration is full.
pub fn fill_percent(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 100.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64() * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_proportional() {
        let d = Duration::from_millis(2000);
        assert_eq!(fill_percent(Duration::ZERO, d), 0.0);
        assert_eq!(fill_percent(Duration::from_millis(500), d), 25.0);
        assert_eq!(fill_percent(Duration::from_millis(1000), d), 50.0);
        assert_eq!(fill_percent(d, d), 100.0);
    }

    #[test]
    fn fill_is_clamped() {
        let d = Duration::from_millis(100);
        assert_eq!(fill_percent(Duration::from_secs(10), d), 100.0);
    }

    #[test]
    fn zero_duration_is_immediately_full() {
        assert_eq!(fill_percent(Duration::ZERO, Duration::ZERO), 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn run_fill_tracks_clock() {
        let run = ProgressRun::new("Healing", Duration::from_millis(400), Instant::now());
        assert_eq!(run.fill_at(Instant::now()), 0.0);

        tokio::time::advance(Duration::from_millis(100)).await;
        assert_eq!(run.fill_at(Instant::now()), 25.0);

        tokio::time::advance(Duration::from_millis(1000)).await;
        assert_eq!(run.fill_at(Instant::now()), 100.0);
    }
}
