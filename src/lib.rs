//! Plexus Engine - Verlet particle network simulation for WASM hosts
//!
//! Architecture:
//! - core/        - colors, RNG, errors, console logging
//! - domain/      - particle, segment, options
//! - spatial/     - uniform grid index
//! - systems/     - particle store, integrator, connections, LOD
//! - render/      - drawing surfaces and line batching
//! - simulation/  - engine orchestration + wasm facade

pub mod core;
pub mod domain;
pub mod render;
pub mod simulation;
pub mod spatial;
pub mod systems;

use wasm_bindgen::prelude::*;

// Thread pool for the parallel connection search (browser side)
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook, console logger, banner.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    core::logging::init_console_logger(log::LevelFilter::Info);
    log::info!("Plexus engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::color::Color;
pub use crate::core::error::EngineError;
pub use domain::{OptionsPatch, Particle, ParticleId, Segment, SimulationOptions};
pub use render::{FrameBuffer, HostSurface, Surface};
pub use simulation::{Engine, EngineCore, EngineStats};
pub use systems::lod::LodState;
