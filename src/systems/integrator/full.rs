use crate::domain::particle::Particle;

use super::boundary::reflect_full;
use super::{Bounds, IntegratorParams};

/// Full Verlet update
///
/// Basic:    new = current + v + F
/// Advanced: new = 2*current - past + (g + F/dt^2) * dt^2, with the
///           velocity term scaled by damping
#[inline]
pub fn full_update(p: &mut Particle, params: &IntegratorParams, bounds: Bounds) {
    let (vx, vy) = p.velocity();

    let (nx, ny) = if params.advanced {
        let dt2 = params.dt * params.dt;
        let ax = params.gravity_x + p.fx / dt2;
        let ay = params.gravity_y + p.fy / dt2;
        (
            p.x + vx * params.damping + ax * dt2,
            p.y + vy * params.damping + ay * dt2,
        )
    } else {
        (p.x + vx + p.fx, p.y + vy + p.fy)
    };

    p.past_x = p.x;
    p.past_y = p.y;
    p.x = nx;
    p.y = ny;
    p.clear_force();

    reflect_full(p, bounds);
}
