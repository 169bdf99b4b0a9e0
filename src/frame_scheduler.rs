//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::queue::CommandReceiver;
use crate::{Engine, OutputDriver, PresetStorage};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Periodic driver of the engine.
///
/// The frame interval is read from the engine on every tick, so a `speed:`
/// command takes effect on the following frame.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(engine);
///
/// loop {
///     let now = Instant::from_millis(get_current_time_ms());
///     let result = scheduler.poll(&commands, now);
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<D: OutputDriver, S: PresetStorage, const N: usize> {
    engine: Engine<D, S, N>,
    next_frame: Instant,
}

impl<D: OutputDriver, S: PresetStorage, const N: usize> FrameScheduler<D, S, N> {
    pub fn new(engine: Engine<D, S, N>) -> Self {
        Self {
            engine,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Dispatch queued commands, then render if the frame deadline passed.
    pub fn poll<const SIZE: usize>(
        &mut self,
        commands: &CommandReceiver<'_, SIZE>,
        now: Instant,
    ) -> FrameResult {
        self.engine.process_pending(commands, now);
        if now >= self.next_frame {
            return self.tick(now);
        }
        self.result(now)
    }

    /// Render one frame and return timing information.
    ///
    /// If we've fallen more than two frames behind, the deadline is reset
    /// to `now` instead of catching up with a burst of frames.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let frame_duration = self.engine.frame_interval();
        let drift_limit = frame_duration
            .checked_mul(2)
            .and_then(|max_drift| self.next_frame.checked_add(max_drift))
            .unwrap_or(Instant::MAX);
        if now > drift_limit {
            self.next_frame = now;
        }

        self.engine.refresh(now);

        // Very long intervals saturate instead of overflowing the clock
        self.next_frame = self
            .next_frame
            .checked_add(frame_duration)
            .unwrap_or(Instant::MAX);
        self.result(now)
    }

    fn result(&self, now: Instant) -> FrameResult {
        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: self.next_frame.saturating_duration_since(now),
        }
    }

    pub fn engine(&self) -> &Engine<D, S, N> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<D, S, N> {
        &mut self.engine
    }

    pub fn into_engine(self) -> Engine<D, S, N> {
        self.engine
    }
}
