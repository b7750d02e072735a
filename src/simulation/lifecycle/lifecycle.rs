use crate::core::error::EngineError;
use crate::render::surface::Surface;
use crate::systems::integrator::{clamp_into, Bounds};

use super::engine_stats::EngineStats;
use super::{render_pass, step, EngineCore, FrameTimer};

pub(super) fn start<S: Surface>(engine: &mut EngineCore<S>) {
    if engine.destroyed || engine.running {
        return;
    }
    engine.running = true;
    engine.pending_frame = true;
    // First frame after (re)start has delta 0
    engine.scheduler.restart();
    engine.lod.reset_window();
    log::info!("engine started with {} particles", engine.store.len());
}

pub(super) fn stop<S: Surface>(engine: &mut EngineCore<S>) {
    let was_running = engine.running;
    engine.running = false;
    engine.pending_frame = false;
    if was_running {
        log::info!("engine stopped after {} steps", engine.step_count);
    }
}

pub(super) fn frame<S: Surface>(engine: &mut EngineCore<S>, timestamp_ms: f64) -> bool {
    if !engine.running || engine.destroyed {
        engine.pending_frame = false;
        return false;
    }
    let delta = engine.scheduler.delta_for(timestamp_ms);
    tick(engine, delta);
    engine.pending_frame = engine.running;
    engine.pending_frame
}

pub(super) fn tick<S: Surface>(engine: &mut EngineCore<S>, delta_ms: f64) -> u32 {
    if engine.destroyed {
        return 0;
    }
    let mut timer = FrameTimer::start();

    let steps = engine.scheduler.advance(delta_ms, engine.options.effective_speed());
    for _ in 0..steps {
        step::step(engine);
    }
    let step_ms = timer.lap();

    render_pass::render(engine);
    let render_ms = timer.lap();

    if delta_ms.is_finite() && delta_ms > 0.0 {
        engine.clock_ms += delta_ms;
    }
    engine.lod.record_frame(
        engine.clock_ms,
        engine.options.enable_adaptive_lod,
        engine.options.performance_threshold,
    );

    engine.stats.step_ms = step_ms;
    engine.stats.render_ms = render_ms;
    engine.stats.steps_last_frame = steps;
    steps
}

pub(super) fn set_visibility<S: Surface>(engine: &mut EngineCore<S>, visible: bool) {
    if engine.visible == visible {
        return;
    }
    engine.visible = visible;
    if !visible {
        // Only a loss while running earns an automatic restart
        engine.resume_on_visible = engine.running;
        if engine.running {
            log::debug!("surface hidden, pausing");
            stop(engine);
        }
    } else if engine.resume_on_visible {
        engine.resume_on_visible = false;
        log::debug!("surface visible again, resuming");
        start(engine);
    }
}

pub(super) fn resize<S: Surface>(engine: &mut EngineCore<S>, width: u32, height: u32) -> Result<(), EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions {
            width: width as f32,
            height: height as f32,
        });
    }
    engine.surface.resize(width, height);
    let bounds = Bounds::new(width as f32, height as f32);
    for (_, p) in engine.store.iter_mut() {
        clamp_into(p, bounds);
    }
    engine.grid.rebuild(engine.store.iter_mut());
    log::info!("surface resized to {}x{}", width, height);
    Ok(())
}

pub(super) fn destroy<S: Surface>(engine: &mut EngineCore<S>) {
    if engine.destroyed {
        return;
    }
    stop(engine);
    engine.resume_on_visible = false;
    engine.store.clear(&mut engine.grid);
    engine.segments.clear();
    engine.pointer = None;
    engine.destroyed = true;
    log::info!("engine destroyed");
}

pub(super) fn snapshot_stats<S: Surface>(engine: &EngineCore<S>) -> EngineStats {
    EngineStats {
        fps: engine.lod.fps(),
        particle_count: engine.store.len() as u32,
        degraded: engine.lod.is_degraded(),
        pool_size: engine.store.pool_size() as u32,
        ..engine.stats.clone()
    }
}
