use crate::core::error::EngineError;
use crate::domain::options::OptionsPatch;
use crate::render::surface::Surface;

use super::commands;
use super::EngineCore;

pub(super) fn update_options<S: Surface>(engine: &mut EngineCore<S>, patch: &OptionsPatch) {
    let change = engine.options.merge(patch);

    engine.store.set_pooling(engine.options.enable_pooling);
    if change.pooling_disabled {
        log::debug!("pooling disabled, pool drained");
    }

    if change.grid_changed {
        engine.grid.configure(
            engine.options.effective_grid_size(),
            engine.options.enable_spatial_partitioning,
        );
        engine.grid.rebuild(engine.store.iter_mut());
    }

    if change.count_changed && !engine.destroyed {
        commands::apply_particle_count(engine);
    }

    if !engine.options.enable_adaptive_lod {
        engine.lod.force_normal();
    }
}

/// Parse a camelCase patch and apply it. A parse failure leaves the options
/// untouched.
pub(super) fn update_options_json<S: Surface>(engine: &mut EngineCore<S>, json: &str) -> Result<(), EngineError> {
    let patch = OptionsPatch::from_json(json).map_err(|e| {
        log::warn!("options patch rejected: {}", e);
        e
    })?;
    update_options(engine, &patch);
    Ok(())
}

pub(super) fn pointer_move<S: Surface>(engine: &mut EngineCore<S>, x: f32, y: f32) {
    engine.pointer = if x.is_finite() && y.is_finite() {
        Some((x, y))
    } else {
        None
    };
}

pub(super) fn pointer_leave<S: Surface>(engine: &mut EngineCore<S>) {
    engine.pointer = None;
}
