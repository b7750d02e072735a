//! Particle Store - arena of particle records plus an index free-list
//!
//! Particles live in fixed-layout slots addressed by [`ParticleId`]. Retired
//! particles either go onto a LIFO pool (their slot keeps the stale record
//! until reuse) or, with pooling off, are discarded and their slot reclaimed
//! later as a fresh allocation.
//!
//! `live` keeps acquisition order so "remove the most recent particle" is a pop.

use crate::core::random::{jitter, range_f32};
use crate::domain::particle::{Particle, ParticleId};
use crate::spatial::grid::SpatialGrid;

mod pool;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Slot {
    Live(Particle),
    /// Retired into the pool; data is stale until reuse
    Pooled(Particle),
    Vacant,
}

pub struct ParticleStore {
    slots: Vec<Slot>,
    live: Vec<ParticleId>,
    pool: Vec<ParticleId>,
    vacant: Vec<ParticleId>,
    pooling: bool,
}

impl ParticleStore {
    pub fn new(pooling: bool) -> Self {
        Self {
            slots: Vec::new(),
            live: Vec::new(),
            pool: Vec::new(),
            vacant: Vec::new(),
            pooling,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Retired particles waiting for reuse
    #[inline]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    #[inline]
    pub fn pooling_enabled(&self) -> bool {
        self.pooling
    }

    /// Upper bound (exclusive) on every id handed out so far
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Live ids in acquisition order
    #[inline]
    pub fn live_ids(&self) -> &[ParticleId] {
        &self.live
    }

    #[inline]
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        match self.slots.get(id) {
            Some(Slot::Live(p)) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        match self.slots.get_mut(id) {
            Some(Slot::Live(p)) => Some(p),
            _ => None,
        }
    }

    /// Live particles in slot order
    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle)> + '_ {
        self.slots.iter().enumerate().filter_map(|(id, slot)| match slot {
            Slot::Live(p) => Some((id, p)),
            _ => None,
        })
    }

    /// Live particles in slot order, mutable
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ParticleId, &mut Particle)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(id, slot)| match slot {
            Slot::Live(p) => Some((id, p)),
            _ => None,
        })
    }

    /// Bring a particle to life at (x, y) with velocity jitter in
    /// [-spawn_velocity, spawn_velocity] per axis, and register it in `grid`.
    pub fn acquire(
        &mut self,
        grid: &mut SpatialGrid,
        rng: &mut u32,
        x: f32,
        y: f32,
        spawn_velocity: f32,
    ) -> ParticleId {
        let vx = jitter(rng, spawn_velocity);
        let vy = jitter(rng, spawn_velocity);

        let (id, mut particle) = match self.take_recycled() {
            Some((id, mut stale)) => {
                stale.reset(x, y, vx, vy);
                (id, stale)
            }
            None => {
                let id = self.vacant.pop().unwrap_or_else(|| {
                    self.slots.push(Slot::Vacant);
                    self.slots.len() - 1
                });
                (id, Particle::new(x, y, vx, vy))
            }
        };

        grid.insert(id, &mut particle);
        self.slots[id] = Slot::Live(particle);
        self.live.push(id);
        id
    }

    /// Retire a specific particle. Returns false if `id` is not live.
    pub fn release(&mut self, grid: &mut SpatialGrid, id: ParticleId) -> bool {
        let Some(pos) = self.live.iter().rposition(|&other| other == id) else {
            return false;
        };
        self.live.remove(pos);
        self.retire(grid, id);
        true
    }

    /// Retire the most recently acquired particle. None when empty.
    pub fn release_last(&mut self, grid: &mut SpatialGrid) -> Option<ParticleId> {
        let id = self.live.pop()?;
        self.retire(grid, id);
        Some(id)
    }

    /// Grow with particles at random positions inside `width` x `height`, or
    /// shrink from the end, until exactly `target` particles are live.
    pub fn set_count(
        &mut self,
        grid: &mut SpatialGrid,
        rng: &mut u32,
        target: usize,
        width: f32,
        height: f32,
        spawn_velocity: f32,
    ) {
        while self.live.len() < target {
            let x = range_f32(rng, 0.0, width);
            let y = range_f32(rng, 0.0, height);
            self.acquire(grid, rng, x, y, spawn_velocity);
        }
        while self.live.len() > target {
            if self.release_last(grid).is_none() {
                break;
            }
        }
    }

    /// Drop every particle, pooled or live. The grid is cleared too.
    pub fn clear(&mut self, grid: &mut SpatialGrid) {
        grid.clear();
        self.slots.clear();
        self.live.clear();
        self.pool.clear();
        self.vacant.clear();
    }
}

#[cfg(test)]
mod tests;
