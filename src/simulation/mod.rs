//! Engine - orchestration only
//!
//! `EngineCore` owns one particle field: store + pool, spatial grid, LOD
//! controller, frame scheduler and the drawing surface. The work itself lives
//! in the systems; the submodules below wire them together per frame:
//! - scheduler/  fixed-timestep accumulator
//! - step/       one physics step over every live particle
//! - render/     background, connections, particles
//! - commands/   add / remove / resize the population
//! - lifecycle/  start, stop, frame, visibility, resize, destroy
//! - init/       construction and option updates
//!
//! Host input (pointer, options, visibility) only touches light state; the
//! particle and grid structures are mutated from `tick` and the commands.

use crate::core::error::EngineError;
use crate::domain::options::{OptionsPatch, SimulationOptions};
use crate::domain::particle::{Particle, ParticleId};
use crate::domain::segment::Segment;
use crate::render::batch::AlphaBatches;
use crate::render::surface::Surface;
use crate::spatial::grid::SpatialGrid;
use crate::systems::connections::ConnectionScratch;
use crate::systems::lod::{LodController, LodState};
use crate::systems::store::ParticleStore;

#[path = "perf/frame_timer.rs"]
mod frame_timer;
#[path = "perf/engine_stats.rs"]
mod engine_stats;
#[path = "scheduler/scheduler.rs"]
mod scheduler;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_pass.rs"]
mod render_pass;
#[path = "commands/commands.rs"]
mod commands;
#[path = "lifecycle/lifecycle.rs"]
mod lifecycle;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use engine_stats::EngineStats;
pub use facade::Engine;
pub use scheduler::{step_interval_ms, FrameScheduler, BASE_TIMESTEP_MS, MAX_STEPS_PER_FRAME};

use frame_timer::FrameTimer;

/// RNG seed used when the host does not pick one
pub const DEFAULT_SEED: u32 = 0x2545_F491;

pub struct EngineCore<S: Surface> {
    surface: S,
    options: SimulationOptions,
    store: ParticleStore,
    grid: SpatialGrid,
    lod: LodController,
    scheduler: FrameScheduler,
    rng_state: u32,
    /// Repel origin; None while the pointer is outside the surface
    pointer: Option<(f32, f32)>,

    // Lifecycle
    running: bool,
    pending_frame: bool,
    visible: bool,
    resume_on_visible: bool,
    destroyed: bool,

    step_count: u64,
    /// Sum of frame deltas, drives LOD sampling
    clock_ms: f64,

    // Per-frame scratch, reused
    segments: Vec<Segment>,
    connection_scratch: ConnectionScratch,
    batches: AlphaBatches,

    stats: EngineStats,
}

impl<S: Surface> EngineCore<S> {
    /// Create an engine drawing on `surface`. Spawns `options.particle_count`
    /// particles right away; nothing runs until `start`.
    pub fn new(surface: S, options: SimulationOptions) -> Result<Self, EngineError> {
        init::create_engine_core(surface, options, DEFAULT_SEED)
    }

    /// Same as `new` with an explicit RNG seed (reproducible layouts).
    pub fn with_seed(surface: S, options: SimulationOptions, seed: u32) -> Result<Self, EngineError> {
        init::create_engine_core(surface, options, seed)
    }

    /// Parse camelCase options JSON (empty string = defaults) and create.
    pub fn from_json(surface: S, options_json: &str) -> Result<Self, EngineError> {
        let options = SimulationOptions::from_json(options_json)?;
        Self::new(surface, options)
    }

    // === Observation ===

    pub fn surface(&self) -> &S { &self.surface }

    pub fn width(&self) -> f32 { self.surface.size().0 }

    pub fn height(&self) -> f32 { self.surface.size().1 }

    pub fn options(&self) -> &SimulationOptions { &self.options }

    /// Effective configuration as camelCase JSON
    pub fn options_json(&self) -> String { self.options.to_json() }

    pub fn particle_count(&self) -> usize { self.store.len() }

    pub fn pool_size(&self) -> usize { self.store.pool_size() }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> { self.store.get(id) }

    /// Live particles in update order
    pub fn particles(&self) -> impl Iterator<Item = (ParticleId, &Particle)> + '_ {
        self.store.iter()
    }

    pub fn grid(&self) -> &SpatialGrid { &self.grid }

    /// Connections built by the last render pass
    pub fn segments(&self) -> &[Segment] { &self.segments }

    pub fn lod_state(&self) -> LodState { self.lod.state() }

    pub fn is_running(&self) -> bool { self.running }

    /// True while the host should deliver another frame callback
    pub fn has_pending_frame(&self) -> bool { self.pending_frame }

    pub fn is_destroyed(&self) -> bool { self.destroyed }

    pub fn step_count(&self) -> u64 { self.step_count }

    pub fn stats(&self) -> EngineStats {
        lifecycle::snapshot_stats(self)
    }

    // === Lifecycle ===

    /// Begin requesting frames. No-op while running or after `destroy`.
    pub fn start(&mut self) {
        lifecycle::start(self)
    }

    /// Cancel the pending frame. Idempotent.
    pub fn stop(&mut self) {
        lifecycle::stop(self)
    }

    /// Animation-frame callback. Returns whether the host should schedule
    /// another one.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        lifecycle::frame(self, timestamp_ms)
    }

    /// Advance by an explicit wall-clock delta: run the due physics steps,
    /// then render once. Returns the number of steps taken.
    pub fn tick(&mut self, delta_ms: f64) -> u32 {
        lifecycle::tick(self, delta_ms)
    }

    /// One physics step, no render
    pub fn step(&mut self) {
        step::step(self)
    }

    /// One render pass, no physics
    pub fn render(&mut self) {
        render_pass::render(self)
    }

    pub fn set_visibility(&mut self, visible: bool) {
        lifecycle::set_visibility(self, visible)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), EngineError> {
        lifecycle::resize(self, width, height)
    }

    /// Stop for good and drop every particle.
    pub fn destroy(&mut self) {
        lifecycle::destroy(self)
    }

    // === Input ===

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        settings::pointer_move(self, x, y)
    }

    pub fn pointer_leave(&mut self) {
        settings::pointer_leave(self)
    }

    // === Mutation ===

    /// Spawn one particle at (x, y). None for non-finite coordinates.
    pub fn add_particle(&mut self, x: f32, y: f32) -> Option<ParticleId> {
        commands::add_particle(self, x, y)
    }

    /// Spawn one particle somewhere inside the surface.
    pub fn add_random_particle(&mut self) -> Option<ParticleId> {
        commands::add_random_particle(self)
    }

    /// Retire the newest particle. None when the field is empty.
    pub fn remove_particle(&mut self) -> Option<ParticleId> {
        commands::remove_particle(self)
    }

    /// Grow or shrink to `count` (floored, negatives and NaN become 0).
    pub fn set_particle_count(&mut self, count: f64) {
        commands::set_particle_count(self, count)
    }

    /// Drop every particle, including the pool.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn update_options(&mut self, patch: &OptionsPatch) {
        settings::update_options(self, patch)
    }

    pub fn update_options_json(&mut self, json: &str) -> Result<(), EngineError> {
        settings::update_options_json(self, json)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
