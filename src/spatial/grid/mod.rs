//! Spatial Grid - uniform cell bucketing for neighbor queries
//!
//! Cells are keyed by `(floor(x / cell_size), floor(y / cell_size))` tuples
//! in a hash map, so arbitrarily large extents or tiny cell sizes never alias
//! two cells onto one key. Only occupied cells exist; a bucket that empties
//! is removed from the map and its storage parked for reuse.
//!
//! Invariant: a particle is registered in at most one bucket, and the key
//! stored on the particle is the key of that bucket.

use std::collections::HashMap;

use crate::domain::particle::ParticleId;

mod buckets;
mod indexing;
mod query;

pub use indexing::cell_coord;

/// Integer cell coordinate (gx, gy)
pub type CellKey = (i32, i32);

pub struct SpatialGrid {
    cell_size: f32,
    /// When false the grid stays empty and particles carry no key
    enabled: bool,
    cells: HashMap<CellKey, Vec<ParticleId>>,
    // Emptied buckets, kept to avoid reallocating on the next insert
    spare: Vec<Vec<ParticleId>>,
    registered: usize,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, enabled: bool) -> Self {
        Self {
            cell_size: sanitize_cell_size(cell_size),
            enabled,
            cells: HashMap::new(),
            spare: Vec::new(),
            registered: 0,
        }
    }

    /// Change cell size / enabled flag. Drops every registration; callers
    /// must `rebuild` afterwards.
    pub fn configure(&mut self, cell_size: f32, enabled: bool) {
        self.cell_size = sanitize_cell_size(cell_size);
        self.enabled = enabled;
        self.clear();
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of registered particles
    #[inline]
    pub fn len(&self) -> usize {
        self.registered
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registered == 0
    }

    /// Number of occupied cells
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.cells.len()
    }

    pub fn bucket(&self, key: CellKey) -> Option<&[ParticleId]> {
        self.cells.get(&key).map(|b| b.as_slice())
    }

    /// Forget every registration. Particles still hold their old keys, so
    /// this is only valid right before a `rebuild` or a full release.
    pub fn clear(&mut self) {
        for (_, mut bucket) in self.cells.drain() {
            bucket.clear();
            self.spare.push(bucket);
        }
        self.registered = 0;
    }
}

fn sanitize_cell_size(cell_size: f32) -> f32 {
    if cell_size.is_finite() {
        cell_size.max(1.0)
    } else {
        100.0
    }
}

#[cfg(test)]
mod tests;
