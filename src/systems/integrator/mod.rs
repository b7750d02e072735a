//! Integrator - position-Verlet particle update
//!
//! Two update policies:
//! - Full: derived velocity `current - past`, basic or advanced (gravity +
//!   damping) Verlet, boundary reflection by mirroring the past position.
//! - Minimal: tracked velocity with forces added directly, boundary
//!   reflection by negating the velocity. Used for half the population while
//!   the LOD controller is degraded.
//!
//! Stateless: every call is a pure function of the particle, its accumulated
//! force and the parameters. Forces are consumed (zeroed) by each update.

use crate::domain::options::SimulationOptions;
use crate::domain::particle::Particle;

mod boundary;
mod forces;
mod full;
mod minimal;

pub use boundary::{clamp_into, reflect_full, reflect_minimal};
pub use forces::{apply_repel, Repeller};
pub use full::full_update;
pub use minimal::minimal_update;

/// Simulated time per physics step, in seconds
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Simulation extent; positions are kept inside [0, width] x [0, height]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self { width: clean(width), height: clean(height) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMode {
    Full,
    Minimal,
}

/// Pick the policy for the particle at `rank` (position in iteration order).
///
/// While degraded, ranks alternate between policies and the pattern flips
/// every step, so exactly half the population (one more or less for odd
/// counts) gets the full update and each particle gets it every other step.
#[inline]
pub fn select_mode(degraded: bool, rank: usize, step: u64) -> UpdateMode {
    if degraded && ((rank as u64).wrapping_add(step) & 1) == 1 {
        UpdateMode::Minimal
    } else {
        UpdateMode::Full
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegratorParams {
    /// True position-Verlet with acceleration (gravity) and damping
    pub advanced: bool,
    pub dt: f32,
    /// Velocity retention per step, [0, 1]
    pub damping: f32,
    pub gravity_x: f32,
    pub gravity_y: f32,
}

impl Default for IntegratorParams {
    fn default() -> Self {
        Self {
            advanced: false,
            dt: FIXED_DT,
            damping: 1.0,
            gravity_x: 0.0,
            gravity_y: 0.0,
        }
    }
}

impl IntegratorParams {
    pub fn from_options(options: &SimulationOptions) -> Self {
        let finite = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };
        Self {
            advanced: options.enable_advanced_physics,
            dt: FIXED_DT,
            damping: finite(options.damping, 1.0).clamp(0.0, 1.0),
            gravity_x: finite(options.gravity.x, 0.0),
            gravity_y: finite(options.gravity.y, 0.0),
        }
    }
}

/// Advance one particle by one step.
///
/// A particle whose update produces non-finite values is restored to its
/// pre-step state (force dropped) and false is returned.
pub fn integrate(particle: &mut Particle, mode: UpdateMode, params: &IntegratorParams, bounds: Bounds) -> bool {
    let before = *particle;
    match mode {
        UpdateMode::Full => full_update(particle, params, bounds),
        UpdateMode::Minimal => minimal_update(particle, bounds),
    }
    if particle.is_finite() {
        return true;
    }
    *particle = before;
    particle.clear_force();
    false
}
