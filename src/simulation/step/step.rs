use crate::render::surface::Surface;
use crate::systems::integrator::{apply_repel, integrate, select_mode, Bounds, IntegratorParams, Repeller};

use super::EngineCore;

/// One fixed physics step over every live particle.
///
/// Order per particle: repel force, integrate (full or minimal by LOD rank),
/// then relocate in the grid if the cell changed. A particle whose update
/// went non-finite has already been restored by the integrator and is left
/// where it was.
pub(super) fn step<S: Surface>(engine: &mut EngineCore<S>) {
    let (width, height) = engine.surface.size();
    let bounds = Bounds::new(width, height);
    let params = IntegratorParams::from_options(&engine.options);
    let degraded = engine.lod.is_degraded();
    let repeller = active_repeller(engine);
    let step_index = engine.step_count;

    let mut skipped = 0usize;
    for (rank, (id, particle)) in engine.store.iter_mut().enumerate() {
        if let Some(repeller) = &repeller {
            apply_repel(particle, repeller);
        }
        if !integrate(particle, select_mode(degraded, rank, step_index), &params, bounds) {
            skipped += 1;
            continue;
        }
        engine.grid.relocate(id, particle);
    }

    if skipped > 0 {
        log::debug!("step {}: {} particle(s) skipped on non-finite update", step_index, skipped);
    }
    engine.step_count = engine.step_count.wrapping_add(1);
}

fn active_repeller<S: Surface>(engine: &EngineCore<S>) -> Option<Repeller> {
    if !engine.options.enable_mouse_repel {
        return None;
    }
    let (x, y) = engine.pointer?;
    Some(Repeller {
        x,
        y,
        radius: engine.options.mouse_repel_radius,
        strength: engine.options.mouse_repel_strength,
    })
}
