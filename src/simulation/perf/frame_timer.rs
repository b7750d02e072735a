//! Lap timer for splitting one frame into step and render time.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::OnceLock;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Monotonic-ish milliseconds. Browser wall clock on wasm32, process
/// relative on native.
pub(crate) fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        static EPOCH: OnceLock<Instant> = OnceLock::new();
        EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct FrameTimer {
    last_ms: f64,
}

impl FrameTimer {
    pub(crate) fn start() -> Self {
        Self { last_ms: now_ms() }
    }

    /// Milliseconds since `start` or the previous lap
    pub(crate) fn lap(&mut self) -> f64 {
        let now = now_ms();
        let elapsed = (now - self.last_ms).max(0.0);
        self.last_ms = now;
        elapsed
    }
}
