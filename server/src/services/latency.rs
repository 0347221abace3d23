//! Simulated network latency for the mock API.
//!
//! Every mock call awaits one of two fixed delays: the long one (1 s) for
//! list fetches and writes, the short one (500 ms) for lookups, cancellation,
//! and sign-out. `MOCK_DELAY_SCALE` stretches or disables both.

use std::time::Duration;

pub const LONG_DELAY: Duration = Duration::from_millis(1000);
pub const SHORT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
    pub long: Duration,
    pub short: Duration,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self { long: LONG_DELAY, short: SHORT_DELAY }
    }
}

impl MockLatency {
    /// Both delays multiplied by `scale` (negative treated as zero).
    #[must_use]
    pub fn scaled(scale: f64) -> Self {
        let scale = if scale.is_finite() { scale.max(0.0) } else { 1.0 };
        Self { long: LONG_DELAY.mul_f64(scale), short: SHORT_DELAY.mul_f64(scale) }
    }

    /// No waiting at all.
    #[must_use]
    pub fn instant() -> Self {
        Self { long: Duration::ZERO, short: Duration::ZERO }
    }

    pub async fn long(&self) {
        wait(self.long).await;
    }

    pub async fn short(&self) {
        wait(self.short).await;
    }
}

async fn wait(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_fixed_delays() {
        let latency = MockLatency::default();
        assert_eq!(latency.long, Duration::from_secs(1));
        assert_eq!(latency.short, Duration::from_millis(500));
    }

    #[test]
    fn scaled_multiplies_and_clamps() {
        let half = MockLatency::scaled(0.5);
        assert_eq!(half.long, Duration::from_millis(500));
        assert_eq!(half.short, Duration::from_millis(250));
        assert_eq!(MockLatency::scaled(-3.0), MockLatency::instant());
        assert_eq!(MockLatency::scaled(f64::NAN), MockLatency::default());
    }

    #[tokio::test(start_paused = true)]
    async fn long_wait_advances_virtual_clock() {
        let start = tokio::time::Instant::now();
        MockLatency::default().long().await;
        assert!(start.elapsed() >= LONG_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn instant_does_not_wait() {
        let start = tokio::time::Instant::now();
        MockLatency::instant().long().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
