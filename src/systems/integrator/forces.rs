use crate::domain::particle::Particle;

/// Pointer repel field: pushes particles radially away from (x, y) with
/// strength falling off linearly to zero at `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repeller {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub strength: f32,
}

/// Accumulate the repel force on `p`. Returns true if the particle was in range.
#[inline]
pub fn apply_repel(p: &mut Particle, repeller: &Repeller) -> bool {
    if !repeller.radius.is_finite() || repeller.radius <= 0.0 {
        return false;
    }
    let dx = p.x - repeller.x;
    let dy = p.y - repeller.y;
    let dist_sq = dx * dx + dy * dy;
    // Coincident points have no direction to push in.
    if dist_sq >= repeller.radius * repeller.radius || dist_sq == 0.0 {
        return false;
    }
    let dist = dist_sq.sqrt();
    let magnitude = repeller.strength * (1.0 - dist / repeller.radius);
    p.add_force(dx / dist * magnitude, dy / dist * magnitude);
    true
}
