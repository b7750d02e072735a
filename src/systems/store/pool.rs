use super::*;

impl ParticleStore {
    /// Turn pooling on or off. Switching it off discards the pooled records.
    pub fn set_pooling(&mut self, enabled: bool) {
        if self.pooling == enabled {
            return;
        }
        self.pooling = enabled;
        if !enabled {
            while let Some(id) = self.pool.pop() {
                self.slots[id] = Slot::Vacant;
                self.vacant.push(id);
            }
            self.trim_vacant_tail();
        }
    }

    /// Most recently pooled record (LIFO), if pooling is on.
    pub(super) fn take_recycled(&mut self) -> Option<(ParticleId, Particle)> {
        if !self.pooling {
            return None;
        }
        let id = self.pool.pop()?;
        match std::mem::replace(&mut self.slots[id], Slot::Vacant) {
            Slot::Pooled(stale) => Some((id, stale)),
            other => {
                // Pool entry pointing at a non-pooled slot: put it back and
                // fall through to a fresh allocation.
                debug_assert!(false, "pool entry {} was {:?}", id, other);
                self.slots[id] = other;
                None
            }
        }
    }

    /// Unregister from the grid and move the record to the pool or discard it.
    pub(super) fn retire(&mut self, grid: &mut SpatialGrid, id: ParticleId) {
        let Some(slot) = self.slots.get_mut(id) else {
            return;
        };
        let Slot::Live(mut particle) = *slot else {
            return;
        };
        grid.remove(id, &mut particle);
        if self.pooling {
            *slot = Slot::Pooled(particle);
            self.pool.push(id);
        } else {
            *slot = Slot::Vacant;
            self.vacant.push(id);
            self.trim_vacant_tail();
        }
    }

    /// Shrink the arena while its last slot is vacant.
    fn trim_vacant_tail(&mut self) {
        let before = self.slots.len();
        while matches!(self.slots.last(), Some(Slot::Vacant)) {
            self.slots.pop();
        }
        if self.slots.len() != before {
            let len = self.slots.len();
            self.vacant.retain(|&id| id < len);
        }
    }
}
