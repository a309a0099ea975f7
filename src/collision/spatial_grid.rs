// Uniform spatial grid used as an optional broad phase.

use std::collections::HashSet;

use crate::collision::AABB;
use crate::math::vec2::Vec2;

#[derive(Debug, Default, Clone)]
struct GridCell {
    body_indices: Vec<usize>,
}

/// A uniform spatial grid for gathering candidate collision pairs.
///
/// Boxes outside the grid area are clamped onto the border cells, so bodies
/// that stray past the world bounds are still paired with their neighbours.
#[derive(Debug)]
pub struct SpatialGrid {
    bounds: AABB,
    inv_cell_size: f64,
    num_cols: usize,
    num_rows: usize,
    cells: Vec<GridCell>, // Row-major

    // Reused between queries to avoid reallocating
    seen_pairs: HashSet<(usize, usize)>,
}

impl SpatialGrid {
    /// Upper limit on the number of cells in one grid.
    pub const MAX_CELLS: usize = 1 << 20;

    /// Column and row counts of a grid covering `bounds` with cells of
    /// `cell_size`. `None` when the size is not positive and finite, or when
    /// the grid would need more than [`Self::MAX_CELLS`] cells.
    pub fn dimensions(bounds: &AABB, cell_size: f64) -> Option<(usize, usize)> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return None;
        }
        let inv_cell_size = 1.0 / cell_size;
        // At least one cell in each direction; `as` saturates huge counts
        let num_cols = ((bounds.max.x - bounds.min.x) * inv_cell_size).ceil().max(1.0) as usize;
        let num_rows = ((bounds.max.y - bounds.min.y) * inv_cell_size).ceil().max(1.0) as usize;
        num_cols
            .checked_mul(num_rows)
            .filter(|&count| count <= Self::MAX_CELLS)
            .map(|_| (num_cols, num_rows))
    }

    /// Creates a grid covering `bounds` with square cells of `cell_size`.
    ///
    /// A size rejected by [`Self::dimensions`] falls back to a single cell,
    /// which pairs every body with every other.
    pub fn new(bounds: AABB, cell_size: f64) -> Self {
        let inv_cell_size = 1.0 / cell_size;
        let (num_cols, num_rows) = Self::dimensions(&bounds, cell_size).unwrap_or_else(|| {
            log::warn!("unusable grid cell size {}; falling back to a single cell", cell_size);
            (1, 1)
        });

        log::debug!(
            "spatial grid: bounds={:?}, cell_size={}, dims={}x{}",
            bounds,
            cell_size,
            num_cols,
            num_rows
        );

        SpatialGrid {
            bounds,
            inv_cell_size,
            num_cols,
            num_rows,
            cells: vec![GridCell::default(); num_cols * num_rows],
            seen_pairs: HashSet::new(),
        }
    }

    /// Converts world coordinates to (col, row), clamped into the grid.
    #[inline]
    fn cell_coords(&self, point: Vec2) -> (usize, usize) {
        let local_x = (point.x - self.bounds.min.x) * self.inv_cell_size;
        let local_y = (point.y - self.bounds.min.y) * self.inv_cell_size;
        let col = (local_x.floor().max(0.0) as usize).min(self.num_cols - 1);
        let row = (local_y.floor().max(0.0) as usize).min(self.num_rows - 1);
        (col, row)
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.body_indices.clear();
        }
    }

    /// Inserts a body's box into every cell it overlaps.
    pub fn insert(&mut self, body_index: usize, aabb: &AABB) {
        let (min_col, min_row) = self.cell_coords(aabb.min);
        let (max_col, max_row) = self.cell_coords(aabb.max);

        for row in min_row..=max_row {
            for col in min_col..=max_col {
                self.cells[col + row * self.num_cols]
                    .body_indices
                    .push(body_index);
            }
        }
    }

    /// Returns every pair of bodies that share at least one cell, as `(low, high)`
    /// index tuples sorted ascending and free of duplicates.
    pub fn query_potential_pairs(&mut self) -> Vec<(usize, usize)> {
        self.seen_pairs.clear();

        for cell in &self.cells {
            let indices = &cell.body_indices;
            if indices.len() < 2 {
                continue;
            }
            for i in 0..indices.len() {
                for j in (i + 1)..indices.len() {
                    let (a, b) = (indices[i], indices[j]);
                    if a == b {
                        continue;
                    }
                    self.seen_pairs.insert((a.min(b), a.max(b)));
                }
            }
        }

        let mut pairs: Vec<(usize, usize)> = self.seen_pairs.drain().collect();
        pairs.sort_unstable();
        pairs
    }
}
