use embassy_time::{Duration, Instant};

/// Fixed-interval step gate
///
/// Returns `true` at most once per `interval`, so rendering more often than
/// the animation's natural tick never speeds it up. Missed steps are not
/// replayed.
#[derive(Debug, Clone)]
pub(crate) struct Cadence {
    interval: Duration,
    last: Instant,
}

impl Cadence {
    pub(crate) const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::from_ticks(0),
        }
    }

    /// Consume one step if the interval has elapsed since the last one
    pub(crate) fn advance(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) < self.interval {
            return false;
        }
        self.last = now;
        true
    }

    pub(crate) fn reset(&mut self) {
        self.last = Instant::from_ticks(0);
    }
}
