//! Step scheduling on top of display frames
//!
//! The browser calls back once per display refresh. Snake needs steps at a
//! fixed interval that can change mid-run, so frame time is accumulated and
//! each due step is measured against the interval current at that moment.

use crate::consts::MAX_FRAME_MS;

/// Frame-time accumulator
#[derive(Debug, Clone, Default)]
pub struct StepClock {
    accumulator_ms: f64,
    last_time: Option<f64>,
}

impl StepClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp and return the clamped time since the
    /// previous frame. The first frame after a reset yields zero.
    pub fn frame(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_time {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_time = Some(now_ms);
        self.accumulator_ms += dt;
        dt
    }

    /// Add elapsed time directly
    #[cfg(test)]
    fn accumulate(&mut self, dt_ms: f64) {
        self.accumulator_ms += dt_ms.clamp(0.0, MAX_FRAME_MS);
    }

    /// Consume one step if `interval_ms` has elapsed.
    ///
    /// The interval is passed on every call, so a speed change made by the
    /// previous step applies to the very next one.
    pub fn take_step(&mut self, interval_ms: f64) -> bool {
        let interval = interval_ms.max(1.0);
        if self.accumulator_ms >= interval {
            self.accumulator_ms -= interval;
            true
        } else {
            false
        }
    }

    /// Time accumulated towards the next step
    #[cfg(test)]
    fn pending_ms(&self) -> f64 {
        self.accumulator_ms
    }

    /// Forget accumulated time (on start, restart and game over)
    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
        self.last_time = None;
    }
}
