use crate::render::surface::Surface;
use crate::systems::connections::{build_connections, ConnectionParams};

use super::EngineCore;

/// Paint one frame: background, connections, particles.
pub(super) fn render<S: Surface>(engine: &mut EngineCore<S>) {
    let EngineCore {
        surface,
        options,
        store,
        grid,
        lod,
        segments,
        connection_scratch,
        batches,
        stats,
        ..
    } = engine;

    // Background. Persistence keeps the previous frame as is.
    if !options.enable_persistence {
        let alpha = if options.enable_trails {
            options.effective_trail_opacity()
        } else {
            1.0
        };
        surface.fill(options.background_color, alpha);
    }

    let degraded = lod.is_degraded();

    if options.show_connections {
        let params = ConnectionParams::from_options(options, store.len(), degraded);
        build_connections(
            store,
            grid,
            options.enable_spatial_partitioning,
            &params,
            connection_scratch,
            segments,
        );
        let width = if options.connection_width.is_finite() {
            options.connection_width.max(0.0)
        } else {
            1.0
        };
        if options.enable_batch_rendering {
            batches.fill(segments, params.max_alpha);
            batches.draw(surface, options.particle_color, params.max_alpha, width);
        } else {
            for segment in segments.iter() {
                surface.stroke_line(segment, options.particle_color, segment.alpha, width);
            }
        }
    } else {
        segments.clear();
    }
    stats.connection_count = segments.len() as u32;

    // Particles. Squares while degraded, they are cheaper to fill.
    let radius = if options.particle_radius.is_finite() {
        options.particle_radius.max(0.0)
    } else {
        0.0
    };
    for (_, p) in store.iter() {
        if degraded {
            let side = (radius * 2.0).max(1.0);
            surface.fill_rect(p.x - radius, p.y - radius, side, side, options.particle_color, 1.0);
        } else {
            surface.fill_circle(p.x, p.y, radius, options.particle_color, 1.0);
        }
    }
}
