use nonmax::NonMaxU32;

use crate::aligner::costs::CostType;
use crate::errors::GenalignError;

/// Flat row-major table of best known cumulative costs per grid cell.
///
/// Cell `(i, j)` holds the cheapest known cost of aligning the length-`i`
/// prefix of sequence A against the length-`j` prefix of sequence B.
pub struct CostGrid<C> {
    cells: Vec<C>,
    cols: usize,
}

impl<C> CostGrid<C>
where
    C: CostType,
{
    pub fn new(rows: usize, cols: usize) -> Result<Self, GenalignError> {
        let num_cells = checked_cell_count(rows, cols)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(num_cells)?;
        cells.resize(num_cells, C::unreached());

        Ok(Self { cells, cols })
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> C {
        self.cells[i * self.cols + j]
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, cost: C) {
        self.cells[i * self.cols + j] = cost;
    }
}

/// Predecessor table parallel to [`CostGrid`].
///
/// Predecessors are stored as compact flat cell indices; `None` marks a
/// cell no path has reached yet. The `NonMaxU32` encoding keeps each
/// entry at four bytes, which is why grids are capped at `u32::MAX - 1`
/// cells.
pub struct BacktrackGrid {
    cells: Vec<Option<NonMaxU32>>,
    cols: usize,
}

impl BacktrackGrid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GenalignError> {
        let num_cells = checked_cell_count(rows, cols)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(num_cells)?;
        cells.resize(num_cells, None);

        Ok(Self { cells, cols })
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, pred_i: usize, pred_j: usize) {
        let flat = (pred_i * self.cols + pred_j) as u32;
        self.cells[i * self.cols + j] = NonMaxU32::new(flat);
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        self.cells[i * self.cols + j].map(|flat| {
            let flat = flat.get() as usize;
            (flat / self.cols, flat % self.cols)
        })
    }
}

fn checked_cell_count(rows: usize, cols: usize) -> Result<usize, GenalignError> {
    let num_cells = rows.checked_mul(cols)
        .ok_or(GenalignError::GridTooLarge(rows, cols))?;

    // Backtrack entries address cells as NonMaxU32
    if num_cells >= u32::MAX as usize {
        return Err(GenalignError::GridTooLarge(rows, cols));
    }

    Ok(num_cells)
}

#[cfg(test)]
mod tests {
    use super::{BacktrackGrid, CostGrid};
    use crate::aligner::costs::CostType;
    use crate::errors::GenalignError;

    #[test]
    fn cost_grid_starts_unreached() {
        let mut grid: CostGrid<f64> = CostGrid::new(3, 4).unwrap();

        assert!(grid.get(0, 0).is_unreached());
        assert!(grid.get(2, 3).is_unreached());

        grid.set(1, 2, 2.5);
        assert_eq!(grid.get(1, 2), 2.5);
        assert!(grid.get(2, 1).is_unreached());
    }

    #[test]
    fn backtrack_grid_round_trips_coordinates() {
        let mut grid = BacktrackGrid::new(5, 7).unwrap();

        assert_eq!(grid.get(4, 6), None);

        grid.set(4, 6, 3, 5);
        assert_eq!(grid.get(4, 6), Some((3, 5)));

        grid.set(1, 0, 0, 0);
        assert_eq!(grid.get(1, 0), Some((0, 0)));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let result: Result<CostGrid<u32>, _> = CostGrid::new(usize::MAX, 2);
        assert!(matches!(result, Err(GenalignError::GridTooLarge(_, _))));

        let result = BacktrackGrid::new(1 << 20, 1 << 20);
        assert!(matches!(result, Err(GenalignError::GridTooLarge(_, _))));
    }
}
