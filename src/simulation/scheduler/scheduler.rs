//! Fixed-timestep accumulator.
//!
//! Wall-clock deltas are banked; every `BASE_TIMESTEP_MS / speed` worth of
//! banked time buys one physics step. Rendering happens once per callback no
//! matter how many steps ran.

/// One physics step at speed 1.0 (60 Hz)
pub const BASE_TIMESTEP_MS: f64 = 1000.0 / 60.0;

/// Steps beyond this in a single callback are dropped along with the
/// leftover accumulator
pub const MAX_STEPS_PER_FRAME: u32 = 1000;

#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    accumulator_ms: f64,
    last_timestamp: Option<f64>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous timestamp so the next frame has delta 0.
    pub fn restart(&mut self) {
        self.accumulator_ms = 0.0;
        self.last_timestamp = None;
    }

    pub fn accumulator_ms(&self) -> f64 {
        self.accumulator_ms
    }

    /// Elapsed time since the previous animation-frame timestamp. The first
    /// frame after a restart, a clock going backwards and garbage input all
    /// yield 0.
    pub fn delta_for(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let delta = match self.last_timestamp {
            Some(last) => (timestamp_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        delta
    }

    /// Bank `delta_ms` and return how many fixed steps are due.
    pub fn advance(&mut self, delta_ms: f64, speed: f32) -> u32 {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.accumulator_ms += delta_ms;
        }
        let step_ms = step_interval_ms(speed);

        let mut steps = 0u32;
        while self.accumulator_ms >= step_ms {
            if steps == MAX_STEPS_PER_FRAME {
                log::warn!(
                    "frame scheduler fell behind, dropping {:.1} ms of simulation time",
                    self.accumulator_ms
                );
                self.accumulator_ms = 0.0;
                break;
            }
            self.accumulator_ms -= step_ms;
            steps += 1;
        }
        steps
    }
}

/// Milliseconds of wall time per physics step at `speed`
#[inline]
pub fn step_interval_ms(speed: f32) -> f64 {
    BASE_TIMESTEP_MS / speed as f64
}
