use crate::core::error::EngineError;
use crate::core::random;
use crate::domain::options::SimulationOptions;
use crate::render::batch::AlphaBatches;
use crate::render::surface::Surface;
use crate::spatial::grid::SpatialGrid;
use crate::systems::connections::ConnectionScratch;
use crate::systems::lod::LodController;
use crate::systems::store::ParticleStore;

use super::commands;
use super::engine_stats::EngineStats;
use super::{EngineCore, FrameScheduler};

pub(super) fn create_engine_core<S: Surface>(
    surface: S,
    options: SimulationOptions,
    seed: u32,
) -> Result<EngineCore<S>, EngineError> {
    let (width, height) = surface.size();
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(EngineError::InvalidDimensions { width, height });
    }

    let grid = SpatialGrid::new(options.effective_grid_size(), options.enable_spatial_partitioning);
    let store = ParticleStore::new(options.enable_pooling);

    let mut engine = EngineCore {
        surface,
        store,
        grid,
        lod: LodController::new(),
        scheduler: FrameScheduler::new(),
        rng_state: random::seed(seed),
        pointer: None,

        running: false,
        pending_frame: false,
        visible: true,
        resume_on_visible: false,
        destroyed: false,

        step_count: 0,
        clock_ms: 0.0,

        segments: Vec::new(),
        connection_scratch: ConnectionScratch::default(),
        batches: AlphaBatches::new(),

        stats: EngineStats::default(),
        options,
    };
    commands::apply_particle_count(&mut engine);

    log::info!(
        "engine created: {}x{} surface, {} particles, grid {} ({})",
        width,
        height,
        engine.store.len(),
        engine.grid.cell_size(),
        if engine.grid.is_enabled() { "partitioned" } else { "flat" }
    );
    Ok(engine)
}
