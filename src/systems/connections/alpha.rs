use crate::domain::options::SimulationOptions;

/// Segments at or below this alpha are dropped rather than drawn faint
pub const ALPHA_FLOOR: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionParams {
    /// Effective max distance (density scaled, LOD reduced)
    pub max_distance: f32,
    /// Distances at or below this get `max_alpha`
    pub fade_start: f32,
    pub max_alpha: f32,
    pub max_per_particle: usize,
}

impl ConnectionParams {
    /// Resolve the distance thresholds for this frame.
    ///
    /// The base distance is scaled by `max(0.5, 1000 / population)` so the
    /// segment count stays roughly flat as the population grows. While
    /// degraded it is further multiplied by the LOD reduction factor, inflated
    /// by the hysteresis margin so pairs sitting near the cut-off don't blink
    /// in and out as particles jitter.
    pub fn from_options(options: &SimulationOptions, population: usize, degraded: bool) -> Self {
        let mut max_distance = options.density_scaled_distance(population);
        if degraded {
            max_distance *= lod_distance_factor(options);
        }
        Self {
            max_distance,
            fade_start: max_distance * options.effective_fade_ratio(),
            max_alpha: options.effective_connection_opacity(),
            max_per_particle: options.max_connections_per_particle,
        }
    }
}

/// Distance multiplier applied while degraded
pub fn lod_distance_factor(options: &SimulationOptions) -> f32 {
    let reduction = if options.lod_reduction_factor.is_finite() {
        options.lod_reduction_factor.max(0.0)
    } else {
        1.0
    };
    let hysteresis = if options.connection_hysteresis.is_finite() {
        options.connection_hysteresis.max(0.0)
    } else {
        0.0
    };
    reduction * (1.0 + hysteresis)
}

/// Map a pair distance to line alpha; None means "no segment".
///
/// `d > max` -> None, `d <= fade_start` -> max alpha, otherwise linear from
/// max alpha down to the floor at `max`.
#[inline]
pub fn distance_alpha(distance: f32, params: &ConnectionParams) -> Option<f32> {
    if distance.is_nan() || distance > params.max_distance {
        return None;
    }
    let alpha = if distance <= params.fade_start {
        params.max_alpha
    } else {
        let span = params.max_distance - params.fade_start;
        let t = (distance - params.fade_start) / span;
        ALPHA_FLOOR + (params.max_alpha - ALPHA_FLOOR) * (1.0 - t)
    };
    if alpha > ALPHA_FLOOR {
        Some(alpha)
    } else {
        None
    }
}
