//! Simulation options
//!
//! A plain struct with named fields and documented defaults. Hosts change it
//! through [`OptionsPatch`] (every field optional, camelCase JSON keys), which
//! is merged field by field between frames.
//!
//! Values are stored as given; anything that could break the integrator or
//! the grid arithmetic is clamped by the `effective_*` accessors at the point
//! of use.

use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::error::EngineError;

/// Reference population for density scaling of the connection distance
pub const DENSITY_REFERENCE_COUNT: f32 = 1000.0;
/// Lower bound of the density scale factor
pub const MIN_DENSITY_SCALE: f32 = 0.5;

const MIN_GRID_SIZE: f32 = 1.0;
const MIN_SPEED: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Gravity {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOptions {
    /// Target population
    pub particle_count: usize,
    /// Drawn radius in pixels
    pub particle_radius: f32,
    /// Spawn jitter: initial velocity is uniform in [-v, v] per axis
    pub particle_velocity: f32,
    /// Simulation speed multiplier (scales physics steps per wall-clock second)
    pub speed: f32,

    /// Base connection distance before density scaling
    pub connection_distance: f32,
    /// Fraction of the max distance below which lines are fully opaque
    pub connection_fade_ratio: f32,
    /// Alpha of a connection at or below the fade start
    pub connection_opacity: f32,
    pub connection_width: f32,

    pub background_color: Color,
    pub particle_color: Color,

    pub show_connections: bool,
    /// Never clear the surface between frames
    pub enable_persistence: bool,
    /// Clear with a translucent background instead of an opaque one
    pub enable_trails: bool,
    pub trail_opacity: f32,
    pub enable_spatial_partitioning: bool,
    pub enable_pooling: bool,
    pub enable_adaptive_lod: bool,
    /// Group connections by alpha and stroke each group with a single call
    pub enable_batch_rendering: bool,
    pub enable_mouse_repel: bool,
    /// True position-Verlet with gravity and damping
    pub enable_advanced_physics: bool,

    /// Spatial grid cell size in pixels
    pub grid_size: f32,
    pub max_connections_per_particle: usize,
    /// FPS below which the LOD controller degrades
    pub performance_threshold: f32,
    /// Connection distance multiplier while degraded
    pub lod_reduction_factor: f32,
    /// Extra margin applied to the degraded distance
    pub connection_hysteresis: f32,

    pub mouse_repel_radius: f32,
    pub mouse_repel_strength: f32,

    /// Velocity retention per step (advanced physics only)
    pub damping: f32,
    /// Acceleration in px/s^2 (advanced physics only)
    pub gravity: Gravity,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            particle_count: 100,
            particle_radius: 2.0,
            particle_velocity: 1.0,
            speed: 1.0,
            connection_distance: 120.0,
            connection_fade_ratio: 0.5,
            connection_opacity: 0.6,
            connection_width: 1.0,
            background_color: Color::rgb(10, 10, 10),
            particle_color: Color::WHITE,
            show_connections: true,
            enable_persistence: false,
            enable_trails: false,
            trail_opacity: 0.15,
            enable_spatial_partitioning: true,
            enable_pooling: true,
            enable_adaptive_lod: true,
            enable_batch_rendering: true,
            enable_mouse_repel: false,
            enable_advanced_physics: false,
            grid_size: 100.0,
            max_connections_per_particle: 15,
            performance_threshold: 30.0,
            lod_reduction_factor: 0.7,
            connection_hysteresis: 0.1,
            mouse_repel_radius: 100.0,
            mouse_repel_strength: 0.5,
            damping: 0.99,
            gravity: Gravity { x: 0.0, y: 0.0 },
        }
    }
}

/// What a merge touched that the engine has to react to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptionsChange {
    pub grid_changed: bool,
    pub count_changed: bool,
    pub pooling_disabled: bool,
}

impl SimulationOptions {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let mut options = Self::default();
        options.merge(&OptionsPatch::from_json(json)?);
        Ok(options)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Shallow field-by-field merge
    pub fn merge(&mut self, patch: &OptionsPatch) -> OptionsChange {
        let before_grid = (self.grid_size, self.enable_spatial_partitioning);
        let before_count = self.particle_count;
        let before_pooling = self.enable_pooling;

        if let Some(n) = patch.particle_count {
            self.particle_count = clamp_count(n);
        }
        merge_field(&mut self.particle_radius, patch.particle_radius);
        merge_field(&mut self.particle_velocity, patch.particle_velocity);
        merge_field(&mut self.speed, patch.speed);
        merge_field(&mut self.connection_distance, patch.connection_distance);
        merge_field(&mut self.connection_fade_ratio, patch.connection_fade_ratio);
        merge_field(&mut self.connection_opacity, patch.connection_opacity);
        merge_field(&mut self.connection_width, patch.connection_width);
        if let Some(text) = &patch.background_color {
            self.background_color = Color::parse(text);
        }
        if let Some(text) = &patch.particle_color {
            self.particle_color = Color::parse(text);
        }
        merge_field(&mut self.show_connections, patch.show_connections);
        merge_field(&mut self.enable_persistence, patch.enable_persistence);
        merge_field(&mut self.enable_trails, patch.enable_trails);
        merge_field(&mut self.trail_opacity, patch.trail_opacity);
        merge_field(&mut self.enable_spatial_partitioning, patch.enable_spatial_partitioning);
        merge_field(&mut self.enable_pooling, patch.enable_pooling);
        merge_field(&mut self.enable_adaptive_lod, patch.enable_adaptive_lod);
        merge_field(&mut self.enable_batch_rendering, patch.enable_batch_rendering);
        merge_field(&mut self.enable_mouse_repel, patch.enable_mouse_repel);
        merge_field(&mut self.enable_advanced_physics, patch.enable_advanced_physics);
        merge_field(&mut self.grid_size, patch.grid_size);
        if let Some(n) = patch.max_connections_per_particle {
            self.max_connections_per_particle = clamp_count(n);
        }
        merge_field(&mut self.performance_threshold, patch.performance_threshold);
        merge_field(&mut self.lod_reduction_factor, patch.lod_reduction_factor);
        merge_field(&mut self.connection_hysteresis, patch.connection_hysteresis);
        merge_field(&mut self.mouse_repel_radius, patch.mouse_repel_radius);
        merge_field(&mut self.mouse_repel_strength, patch.mouse_repel_strength);
        merge_field(&mut self.damping, patch.damping);
        if let Some(g) = &patch.gravity {
            merge_field(&mut self.gravity.x, g.x);
            merge_field(&mut self.gravity.y, g.y);
        }

        OptionsChange {
            grid_changed: before_grid != (self.grid_size, self.enable_spatial_partitioning),
            count_changed: before_count != self.particle_count,
            pooling_disabled: before_pooling && !self.enable_pooling,
        }
    }

    // === Sanitized accessors ===

    pub fn effective_grid_size(&self) -> f32 {
        if self.grid_size.is_finite() {
            self.grid_size.max(MIN_GRID_SIZE)
        } else {
            Self::default().grid_size
        }
    }

    pub fn effective_speed(&self) -> f32 {
        if self.speed.is_finite() {
            self.speed.max(MIN_SPEED)
        } else {
            1.0
        }
    }

    pub fn effective_fade_ratio(&self) -> f32 {
        finite_or(self.connection_fade_ratio, 0.5).clamp(0.0, 1.0)
    }

    pub fn effective_connection_opacity(&self) -> f32 {
        finite_or(self.connection_opacity, 0.0).clamp(0.0, 1.0)
    }

    pub fn effective_spawn_velocity(&self) -> f32 {
        finite_or(self.particle_velocity, 0.0).abs()
    }

    pub fn effective_trail_opacity(&self) -> f32 {
        finite_or(self.trail_opacity, 1.0).clamp(0.0, 1.0)
    }

    /// Density-scaled max connection distance, before any LOD reduction
    pub fn density_scaled_distance(&self, population: usize) -> f32 {
        let base = finite_or(self.connection_distance, 0.0).max(0.0);
        if population == 0 {
            return base;
        }
        let scale = (DENSITY_REFERENCE_COUNT / population as f32).max(MIN_DENSITY_SCALE);
        base * scale
    }
}

/// Floor a host-provided count and clamp it to >= 0. NaN maps to 0.
pub fn clamp_count(n: f64) -> usize {
    if n.is_nan() || n <= 0.0 {
        0
    } else if n >= usize::MAX as f64 {
        usize::MAX
    } else {
        n.floor() as usize
    }
}

#[inline]
fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}

#[inline]
fn merge_field<T: Copy>(dst: &mut T, src: Option<T>) {
    if let Some(v) = src {
        *dst = v;
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GravityPatch {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

/// Partial options update. Unknown keys are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsPatch {
    pub particle_count: Option<f64>,
    pub particle_radius: Option<f32>,
    pub particle_velocity: Option<f32>,
    pub speed: Option<f32>,
    pub connection_distance: Option<f32>,
    pub connection_fade_ratio: Option<f32>,
    pub connection_opacity: Option<f32>,
    pub connection_width: Option<f32>,
    pub background_color: Option<String>,
    pub particle_color: Option<String>,
    pub show_connections: Option<bool>,
    pub enable_persistence: Option<bool>,
    pub enable_trails: Option<bool>,
    pub trail_opacity: Option<f32>,
    pub enable_spatial_partitioning: Option<bool>,
    pub enable_pooling: Option<bool>,
    pub enable_adaptive_lod: Option<bool>,
    pub enable_batch_rendering: Option<bool>,
    pub enable_mouse_repel: Option<bool>,
    pub enable_advanced_physics: Option<bool>,
    pub grid_size: Option<f32>,
    pub max_connections_per_particle: Option<f64>,
    pub performance_threshold: Option<f32>,
    pub lod_reduction_factor: Option<f32>,
    pub connection_hysteresis: Option<f32>,
    pub mouse_repel_radius: Option<f32>,
    pub mouse_repel_strength: Option<f32>,
    pub damping: Option<f32>,
    pub gravity: Option<GravityPatch>,
}

impl OptionsPatch {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_touches_present_fields() {
        let mut opts = SimulationOptions::default();
        let patch = OptionsPatch {
            particle_radius: Some(4.0),
            ..Default::default()
        };
        let change = opts.merge(&patch);
        assert_eq!(opts.particle_radius, 4.0);
        assert_eq!(opts.particle_count, 100);
        assert_eq!(change, OptionsChange::default());
    }

    #[test]
    fn merge_reports_grid_and_count_changes() {
        let mut opts = SimulationOptions::default();
        let change = opts.merge(&OptionsPatch {
            grid_size: Some(50.0),
            particle_count: Some(12.9),
            enable_pooling: Some(false),
            ..Default::default()
        });
        assert!(change.grid_changed);
        assert!(change.count_changed);
        assert!(change.pooling_disabled);
        assert_eq!(opts.particle_count, 12);
    }

    #[test]
    fn partition_toggle_counts_as_grid_change() {
        let mut opts = SimulationOptions::default();
        let change = opts.merge(&OptionsPatch {
            enable_spatial_partitioning: Some(false),
            ..Default::default()
        });
        assert!(change.grid_changed);
    }

    #[test]
    fn counts_are_floored_and_clamped() {
        assert_eq!(clamp_count(-5.0), 0);
        assert_eq!(clamp_count(f64::NAN), 0);
        assert_eq!(clamp_count(3.99), 3);
    }

    #[test]
    fn degenerate_values_are_clamped_at_use() {
        let opts = SimulationOptions {
            grid_size: -10.0,
            speed: 0.0,
            connection_fade_ratio: 4.0,
            ..Default::default()
        };
        assert_eq!(opts.effective_grid_size(), 1.0);
        assert!(opts.effective_speed() > 0.0);
        assert_eq!(opts.effective_fade_ratio(), 1.0);

        let nan_grid = SimulationOptions {
            grid_size: f32::NAN,
            ..Default::default()
        };
        assert_eq!(nan_grid.effective_grid_size(), 100.0);
    }

    #[test]
    fn density_scaling_shrinks_with_population() {
        let opts = SimulationOptions::default();
        assert_eq!(opts.density_scaled_distance(1000), 120.0);
        assert_eq!(opts.density_scaled_distance(500), 240.0);
        // Floor of 0.5 kicks in past 2000 particles.
        assert_eq!(opts.density_scaled_distance(4000), 60.0);
        assert_eq!(opts.density_scaled_distance(100_000), 60.0);
    }

    #[test]
    fn colors_in_patch_are_parsed_with_fallback() {
        let mut opts = SimulationOptions::default();
        opts.merge(&OptionsPatch {
            background_color: Some("rgb(1,2,3)".to_string()),
            particle_color: Some("not a color".to_string()),
            ..Default::default()
        });
        assert_eq!(opts.background_color, Color::rgb(1, 2, 3));
        assert_eq!(opts.particle_color, Color::WHITE);
    }
}
