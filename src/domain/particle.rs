//! Particle record
//!
//! Position-Verlet keeps no velocity field: velocity is always
//! `current - past`, where `past` is the position one step ago.

use crate::spatial::grid::CellKey;

/// Slot index into the particle arena
pub type ParticleId = usize;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub past_x: f32,
    pub past_y: f32,
    /// Force accumulated this step, cleared after integration
    pub fx: f32,
    pub fy: f32,
    /// Grid cell this particle is registered in (None = not indexed)
    pub cell: Option<CellKey>,
}

impl Particle {
    /// Particle at (x, y) moving with velocity (vx, vy)
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self {
            x,
            y,
            past_x: x - vx,
            past_y: y - vy,
            fx: 0.0,
            fy: 0.0,
            cell: None,
        }
    }

    /// Overwrite every field. Used when a pooled record gets a new tenant.
    #[inline]
    pub fn reset(&mut self, x: f32, y: f32, vx: f32, vy: f32) {
        *self = Self::new(x, y, vx, vy);
    }

    #[inline]
    pub fn velocity(&self) -> (f32, f32) {
        (self.x - self.past_x, self.y - self.past_y)
    }

    #[inline]
    pub fn add_force(&mut self, fx: f32, fy: f32) {
        self.fx += fx;
        self.fy += fy;
    }

    #[inline]
    pub fn clear_force(&mut self) {
        self.fx = 0.0;
        self.fy = 0.0;
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.past_x.is_finite() && self.past_y.is_finite()
    }
}
