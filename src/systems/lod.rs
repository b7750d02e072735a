//! LOD Controller - frame-rate driven fidelity switch
//!
//! Counts completed render passes. Once a full sampling window (1000 ms) has
//! elapsed, the count becomes the FPS estimate and the state is re-evaluated:
//! below the threshold -> degraded, at or above -> normal. One threshold for
//! both directions; the flicker margin lives in the connection distance.

/// Length of one FPS sampling window
pub const SAMPLE_WINDOW_MS: f64 = 1000.0;

/// Optimistic estimate until the first window closes
const INITIAL_FPS: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LodState {
    Normal,
    Degraded,
}

#[derive(Clone, Debug)]
pub struct LodController {
    state: LodState,
    fps: f32,
    frames_in_window: u32,
    window_start_ms: Option<f64>,
}

impl Default for LodController {
    fn default() -> Self {
        Self::new()
    }
}

impl LodController {
    pub fn new() -> Self {
        Self {
            state: LodState::Normal,
            fps: INITIAL_FPS,
            frames_in_window: 0,
            window_start_ms: None,
        }
    }

    #[inline]
    pub fn state(&self) -> LodState {
        self.state
    }

    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.state == LodState::Degraded
    }

    /// Latest FPS estimate
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Record one completed render pass at engine time `now_ms`.
    ///
    /// Returns the new state when this call changed it.
    pub fn record_frame(&mut self, now_ms: f64, enabled: bool, threshold: f32) -> Option<LodState> {
        let before = self.state;

        let window_start = *self.window_start_ms.get_or_insert(now_ms);
        self.frames_in_window = self.frames_in_window.saturating_add(1);
        if now_ms - window_start >= SAMPLE_WINDOW_MS {
            self.fps = self.frames_in_window as f32;
            self.frames_in_window = 0;
            self.window_start_ms = Some(now_ms);
            if enabled {
                self.state = if self.fps < threshold {
                    LodState::Degraded
                } else {
                    LodState::Normal
                };
            }
        }
        if !enabled {
            self.state = LodState::Normal;
        }

        if self.state == before {
            return None;
        }
        match self.state {
            LodState::Degraded => log::info!("LOD degraded: {} fps below threshold {}", self.fps, threshold),
            LodState::Normal => log::info!("LOD restored: {} fps", self.fps),
        }
        Some(self.state)
    }

    /// Force normal mode (adaptive LOD switched off).
    pub fn force_normal(&mut self) {
        self.state = LodState::Normal;
    }

    /// Restart sampling, e.g. after the engine was paused.
    pub fn reset_window(&mut self) {
        self.frames_in_window = 0;
        self.window_start_ms = None;
    }
}
