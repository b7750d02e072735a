use super::*;

/// Floor `v / cell_size` into a cell coordinate. Float-to-int casts
/// saturate, and NaN lands in cell 0.
#[inline]
pub fn cell_coord(v: f32, cell_size: f32) -> i32 {
    (v / cell_size).floor() as i32
}

impl SpatialGrid {
    // === Key conversion ===
    #[inline]
    pub fn cell_key(&self, x: f32, y: f32) -> CellKey {
        (cell_coord(x, self.cell_size), cell_coord(y, self.cell_size))
    }

    /// Rings of cells around the center needed to cover `radius`
    #[inline]
    pub fn rings_for_radius(&self, radius: f32) -> i32 {
        if !radius.is_finite() {
            return i32::MAX;
        }
        ((radius / self.cell_size).ceil() as i32).max(1)
    }
}
