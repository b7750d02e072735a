use super::*;

use crate::domain::particle::Particle;

impl SpatialGrid {
    /// Register `id` in the cell its position hashes to and store the key on
    /// the particle. No-op (key cleared) while the grid is disabled.
    pub fn insert(&mut self, id: ParticleId, particle: &mut Particle) {
        if !self.enabled {
            particle.cell = None;
            return;
        }
        let key = self.cell_key(particle.x, particle.y);
        let spare = &mut self.spare;
        self.cells
            .entry(key)
            .or_insert_with(|| spare.pop().unwrap_or_default())
            .push(id);
        particle.cell = Some(key);
        self.registered += 1;
    }

    /// Unregister `id` if the particle records a key. Returns false when it
    /// was not registered.
    pub fn remove(&mut self, id: ParticleId, particle: &mut Particle) -> bool {
        let Some(key) = particle.cell.take() else {
            return false;
        };
        let Some(bucket) = self.cells.get_mut(&key) else {
            return false;
        };
        let Some(pos) = bucket.iter().position(|&other| other == id) else {
            return false;
        };
        bucket.swap_remove(pos);
        if bucket.is_empty() {
            if let Some(empty) = self.cells.remove(&key) {
                self.spare.push(empty);
            }
        }
        self.registered = self.registered.saturating_sub(1);
        true
    }

    /// Re-register after a position change. Performs one remove+insert only
    /// when the key actually changed. Returns true if the particle moved cell.
    pub fn relocate(&mut self, id: ParticleId, particle: &mut Particle) -> bool {
        if !self.enabled {
            return false;
        }
        let key = self.cell_key(particle.x, particle.y);
        if particle.cell == Some(key) {
            return false;
        }
        self.remove(id, particle);
        self.insert(id, particle);
        true
    }

    /// Clear and reinsert every live particle (resize, option change).
    pub fn rebuild<'a, I>(&mut self, particles: I)
    where
        I: IntoIterator<Item = (ParticleId, &'a mut Particle)>,
    {
        self.clear();
        for (id, particle) in particles {
            particle.cell = None;
            self.insert(id, particle);
        }
        log::debug!(
            "spatial grid rebuilt: {} particles in {} cells (cell size {})",
            self.registered,
            self.cells.len(),
            self.cell_size
        );
    }
}
