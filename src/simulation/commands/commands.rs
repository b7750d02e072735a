use crate::core::random::range_f32;
use crate::domain::options::clamp_count;
use crate::domain::particle::ParticleId;
use crate::render::surface::Surface;

use super::EngineCore;

pub(super) fn add_particle<S: Surface>(engine: &mut EngineCore<S>, x: f32, y: f32) -> Option<ParticleId> {
    if engine.destroyed || !x.is_finite() || !y.is_finite() {
        return None;
    }
    let (width, height) = engine.surface.size();
    let x = x.clamp(0.0, width.max(0.0));
    let y = y.clamp(0.0, height.max(0.0));

    let spawn_velocity = engine.options.effective_spawn_velocity();
    let id = engine
        .store
        .acquire(&mut engine.grid, &mut engine.rng_state, x, y, spawn_velocity);
    engine.options.particle_count = engine.store.len();
    Some(id)
}

pub(super) fn add_random_particle<S: Surface>(engine: &mut EngineCore<S>) -> Option<ParticleId> {
    let (width, height) = engine.surface.size();
    let x = range_f32(&mut engine.rng_state, 0.0, width);
    let y = range_f32(&mut engine.rng_state, 0.0, height);
    add_particle(engine, x, y)
}

pub(super) fn remove_particle<S: Surface>(engine: &mut EngineCore<S>) -> Option<ParticleId> {
    let removed = engine.store.release_last(&mut engine.grid)?;
    engine.options.particle_count = engine.store.len();
    Some(removed)
}

pub(super) fn set_particle_count<S: Surface>(engine: &mut EngineCore<S>, count: f64) {
    if engine.destroyed {
        return;
    }
    let target = clamp_count(count);
    engine.options.particle_count = target;
    apply_particle_count(engine);
}

/// Grow or shrink the live set to `options.particle_count`.
pub(super) fn apply_particle_count<S: Surface>(engine: &mut EngineCore<S>) {
    let (width, height) = engine.surface.size();
    let spawn_velocity = engine.options.effective_spawn_velocity();
    let before = engine.store.len();
    engine.store.set_count(
        &mut engine.grid,
        &mut engine.rng_state,
        engine.options.particle_count,
        width,
        height,
        spawn_velocity,
    );
    if before != engine.store.len() {
        log::debug!(
            "particle count {} -> {} (pool {})",
            before,
            engine.store.len(),
            engine.store.pool_size()
        );
    }
}

pub(super) fn clear<S: Surface>(engine: &mut EngineCore<S>) {
    engine.store.clear(&mut engine.grid);
    engine.segments.clear();
    engine.options.particle_count = 0;
}
