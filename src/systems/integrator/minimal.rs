use crate::domain::particle::Particle;

use super::boundary::reflect_minimal;
use super::Bounds;

/// Reduced-fidelity update: force goes straight into the velocity, the
/// position advances by it, and the past position is derived back from the
/// (possibly reflected) velocity. No gravity, no damping.
#[inline]
pub fn minimal_update(p: &mut Particle, bounds: Bounds) {
    let (mut vx, mut vy) = p.velocity();
    vx += p.fx;
    vy += p.fy;

    p.x += vx;
    p.y += vy;
    reflect_minimal(&mut p.x, &mut vx, bounds.width);
    reflect_minimal(&mut p.y, &mut vy, bounds.height);

    p.past_x = p.x - vx;
    p.past_y = p.y - vy;
    p.clear_force();
}
