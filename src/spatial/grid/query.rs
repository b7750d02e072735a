use super::*;

impl SpatialGrid {
    /// Particles in the 3x3 block around `key` (the caller's own id included).
    /// Results are appended to `out`.
    #[inline]
    pub fn neighbors(&self, key: CellKey, out: &mut Vec<ParticleId>) {
        self.neighbors_in_rings(key, 1, out);
    }

    /// Particles in every cell that can hold a point within `radius` of a
    /// point in cell `key`.
    #[inline]
    pub fn neighbors_in_range(&self, key: CellKey, radius: f32, out: &mut Vec<ParticleId>) {
        self.neighbors_in_rings(key, self.rings_for_radius(radius), out);
    }

    /// Particles in the (2r+1)^2 block around `key`.
    ///
    /// When the block has more cells than the map has occupied buckets, the
    /// occupied buckets are scanned instead; both paths return the same set.
    pub fn neighbors_in_rings(&self, key: CellKey, rings: i32, out: &mut Vec<ParticleId>) {
        let rings = rings.max(0);
        let side = 2 * (rings as u64) + 1;
        if side.saturating_mul(side) > self.cells.len() as u64 {
            for (&(gx, gy), bucket) in self.cells.iter() {
                let dx = (gx as i64 - key.0 as i64).abs();
                let dy = (gy as i64 - key.1 as i64).abs();
                if dx <= rings as i64 && dy <= rings as i64 {
                    out.extend_from_slice(bucket);
                }
            }
            return;
        }

        for dy in -rings..=rings {
            let Some(gy) = key.1.checked_add(dy) else { continue };
            for dx in -rings..=rings {
                let Some(gx) = key.0.checked_add(dx) else { continue };
                if let Some(bucket) = self.cells.get(&(gx, gy)) {
                    out.extend_from_slice(bucket);
                }
            }
        }
    }
}
