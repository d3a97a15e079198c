//! Frame timing for the fixed-tick main loop

use std::time::{Duration, Instant};

/// Fixed-interval pacer for the main loop.
///
/// One frame is: [`begin`](Self::begin) at the top, do the work, then
/// [`wait`](Self::wait) sleeps off whatever is left of the interval. A frame
/// that overruns its interval is not compensated beyond the next deadline
/// computation; ticks are never dropped.
pub struct TickClock {
    interval: Duration,
    deadline: Instant,
}

impl TickClock {
    /// Create a clock with the given tick interval in milliseconds
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval: Duration::from_secs_f32(interval_ms / 1000.0),
            deadline: Instant::now(),
        }
    }

    /// Stamp the deadline for the current frame
    pub fn begin(&mut self) {
        self.deadline = Instant::now() + self.interval;
    }

    /// Sleep until the current frame's deadline, or return immediately if
    /// the frame has already overrun it
    pub fn wait(&self) {
        let now = Instant::now();
        if self.deadline > now {
            std::thread::sleep(self.deadline - now);
        }
    }

    /// The tick interval in milliseconds
    pub fn interval_ms(&self) -> f32 {
        self.interval.as_secs_f32() * 1000.0
    }
}
