//! Boundary policy
//!
//! A coordinate at or beyond an edge is clamped onto it. Only outward motion
//! is reflected; a particle already heading back inside keeps its velocity,
//! which stops it from flipping back and forth at the edge.

use crate::domain::particle::Particle;

use super::Bounds;

/// Full mode: mirror the past position about the edge.
#[inline]
pub fn reflect_full(p: &mut Particle, bounds: Bounds) {
    reflect_axis_full(&mut p.x, &mut p.past_x, bounds.width);
    reflect_axis_full(&mut p.y, &mut p.past_y, bounds.height);
}

#[inline]
fn reflect_axis_full(pos: &mut f32, past: &mut f32, extent: f32) {
    // Outward speed is mirrored, inward speed kept; either way the implied
    // velocity after the clamp points back inside with the same magnitude.
    let speed = (*pos - *past).abs();
    if *pos <= 0.0 {
        *pos = 0.0;
        *past = -speed;
    } else if *pos >= extent {
        *pos = extent;
        *past = extent + speed;
    }
}

/// Minimal mode: negate the tracked velocity component.
#[inline]
pub fn reflect_minimal(pos: &mut f32, vel: &mut f32, extent: f32) {
    if *pos <= 0.0 {
        *pos = 0.0;
        if *vel < 0.0 {
            *vel = -*vel;
        }
    } else if *pos >= extent {
        *pos = extent;
        if *vel > 0.0 {
            *vel = -*vel;
        }
    }
}

/// Pull a particle left outside by a shrinking surface back onto the edge,
/// shifting its past position by the same amount so velocity is unchanged.
#[inline]
pub fn clamp_into(p: &mut Particle, bounds: Bounds) {
    let shift_x = p.x.clamp(0.0, bounds.width) - p.x;
    let shift_y = p.y.clamp(0.0, bounds.height) - p.y;
    p.x += shift_x;
    p.past_x += shift_x;
    p.y += shift_y;
    p.past_y += shift_y;
}
