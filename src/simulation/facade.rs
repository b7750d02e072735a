use wasm_bindgen::prelude::*;

use crate::core::error::EngineError;
use crate::render::framebuffer::FrameBuffer;
use crate::render::host::HostSurface;

use super::engine_stats::EngineStats;
use super::EngineCore;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct Engine {
    core: EngineCore<HostSurface>,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine rendering into an in-memory pixel buffer of the given
    /// size. `options_json` is a camelCase options object (may be empty).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, options_json: &str) -> Result<Engine, JsValue> {
        let surface = HostSurface::Pixels(FrameBuffer::new(width, height));
        let core = EngineCore::from_json(surface, options_json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    /// requestAnimationFrame callback; keep scheduling while this returns true
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        self.core.frame(timestamp_ms)
    }

    /// Advance by `delta_ms` and render. Returns the physics steps taken.
    pub fn tick(&mut self, delta_ms: f64) -> u32 {
        self.core.tick(delta_ms)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.core.resize(width, height).map_err(to_js)
    }

    pub fn destroy(&mut self) {
        self.core.destroy();
    }

    pub fn set_visibility(&mut self, visible: bool) {
        self.core.set_visibility(visible);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.core.pointer_leave();
    }

    /// Returns the new particle id, or undefined for invalid coordinates
    pub fn add_particle(&mut self, x: f32, y: f32) -> Option<u32> {
        self.core.add_particle(x, y).map(|id| id as u32)
    }

    pub fn add_random_particle(&mut self) -> Option<u32> {
        self.core.add_random_particle().map(|id| id as u32)
    }

    /// Returns the removed id, or undefined when there was nothing to remove
    pub fn remove_particle(&mut self) -> Option<u32> {
        self.core.remove_particle().map(|id| id as u32)
    }

    pub fn set_particle_count(&mut self, count: f64) {
        self.core.set_particle_count(count);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Merge a partial camelCase options object
    pub fn update_options(&mut self, patch_json: &str) -> Result<(), JsValue> {
        self.core.update_options_json(patch_json).map_err(to_js)
    }

    /// Effective options as JSON
    pub fn options_json(&self) -> String {
        self.core.options_json()
    }

    pub fn stats(&self) -> EngineStats {
        self.core.stats()
    }

    /// Pointer to the ABGR pixel buffer (null for canvas-backed engines)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core
            .surface()
            .frame_buffer()
            .map_or(std::ptr::null(), FrameBuffer::pixels_ptr)
    }

    /// Pixel count of the buffer behind `pixels_ptr`
    pub fn pixels_len(&self) -> usize {
        self.core.surface().frame_buffer().map_or(0, FrameBuffer::pixels_len)
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Engine {
    /// Create an engine drawing straight onto a canvas. Fails when the canvas
    /// has no 2D context.
    pub fn from_canvas(canvas: web_sys::HtmlCanvasElement, options_json: &str) -> Result<Engine, JsValue> {
        let surface = crate::render::canvas::CanvasSurface::new(canvas).map_err(to_js)?;
        let core = EngineCore::from_json(HostSurface::Canvas(surface), options_json).map_err(to_js)?;
        Ok(Self { core })
    }
}

impl Engine {
    /// Native access to the wrapped core
    pub fn core(&self) -> &EngineCore<HostSurface> {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut EngineCore<HostSurface> {
        &mut self.core
    }
}
