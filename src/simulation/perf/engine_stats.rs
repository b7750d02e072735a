use wasm_bindgen::prelude::*;

/// Snapshot handed to the host after each frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineStats {
    pub(super) fps: f32,
    pub(super) particle_count: u32,
    pub(super) degraded: bool,
    pub(super) pool_size: u32,
    pub(super) connection_count: u32,
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) steps_last_frame: u32,
}

#[wasm_bindgen]
impl EngineStats {
    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f32 { self.fps }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn pool_size(&self) -> u32 { self.pool_size }
    #[wasm_bindgen(getter)]
    pub fn connection_count(&self) -> u32 { self.connection_count }

    /// True while the LOD controller is degraded
    #[wasm_bindgen(getter)]
    pub fn lod_mode(&self) -> bool { self.degraded }

    /// Wall time spent in physics steps during the last frame
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn steps_last_frame(&self) -> u32 { self.steps_last_frame }
}
