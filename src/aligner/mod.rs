pub mod alignment;
pub mod cost_models;
pub mod costs;
pub mod grid;
pub mod queue;

use std::cmp::Ordering;

use log::{debug, trace};
use num::Zero;
use smallvec::SmallVec;

use crate::aligner::costs::CostType;
use crate::aligner::grid::{BacktrackGrid, CostGrid};
use crate::aligner::queue::FrontierQueue;
use crate::errors::{CostSource, GenalignError};

pub use alignment::{AlignedPair, Alignment};
pub use cost_models::{CostModel, FnCosts, HeteroFnCosts, UnitCosts};

/// Counters describing how much of the alignment grid one search
/// actually explored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub num_queued: usize,
    pub num_visited: usize,
    pub num_pruned: usize,
}

/// Outcome of one alignment: the minimum total cost, the alignment
/// itself (borrowing elements from the input slices), and search
/// statistics.
#[derive(Debug)]
pub struct AlignmentResult<'a, A, B, C> {
    pub cost: C,
    pub alignment: Alignment<&'a A, &'a B>,
    pub stats: SearchStats,
}

/// Best-first global aligner over two element sequences.
///
/// Runs a Dijkstra-style search over the `(n+1) x (m+1)` grid of prefix
/// pairs, where each cell's outgoing edges are "skip the next element of
/// A", "align the next elements of A and B", and "skip the next element
/// of B", priced by the cost model. With nonnegative costs the first pop
/// of the terminal cell carries the minimum total cost, so the search
/// stops there without exhausting the grid.
pub struct Aligner<M> {
    costs: M,
}

impl<M> Aligner<M> {
    pub fn new(costs: M) -> Self {
        Self { costs }
    }

    pub fn costs(&self) -> &M {
        &self.costs
    }

    /// Align `a` and `b` end to end at minimum total cost.
    ///
    /// Every element of both slices appears in exactly one column of the
    /// returned alignment, in its original relative order. Among
    /// equal-cost alignments the result is canonical: cells closer to the
    /// terminal corner are expanded first on cost ties.
    pub fn align<'a, A, B>(
        &self,
        a: &'a [A],
        b: &'a [B],
    ) -> Result<AlignmentResult<'a, A, B, M::Cost>, GenalignError>
    where
        M: CostModel<A, B>,
    {
        let n = a.len();
        let m = b.len();

        let mut grid: CostGrid<M::Cost> = CostGrid::new(n + 1, m + 1)?;
        let mut backtrack = BacktrackGrid::new(n + 1, m + 1)?;
        grid.set(0, 0, M::Cost::zero());

        let mut queue = FrontierQueue::new();
        queue.queue_cell(M::Cost::zero(), 0, 0);

        let mut stats = SearchStats {
            num_queued: 1,
            ..SearchStats::default()
        };

        loop {
            let Some(cell) = queue.pop_cell() else {
                panic!("Frontier queue exhausted before the terminal cell was reached!");
            };
            let (i, j) = (cell.i as usize, cell.j as usize);

            // Lazy invalidation: a cheaper path reached this cell after
            // this entry was queued.
            if grid.get(i, j).cmp_cost(&cell.cost) == Ordering::Less {
                stats.num_pruned += 1;
                continue;
            }

            stats.num_visited += 1;

            if i == n && j == m {
                trace!("terminal cell popped after visiting {} of {} cells",
                       stats.num_visited, (n + 1) * (m + 1));
                break;
            }

            let mut edges: SmallVec<[(usize, usize, M::Cost); 3]> = SmallVec::new();
            if i < n {
                let edge = self.costs.skip_a_cost(&a[i]);
                if !edge.is_valid() {
                    return Err(GenalignError::InvalidCost(CostSource::SkipA(i)));
                }
                edges.push((i + 1, j, edge));
            }
            if i < n && j < m {
                let edge = self.costs.align_cost(&a[i], &b[j]);
                if !edge.is_valid() {
                    return Err(GenalignError::InvalidCost(CostSource::Align(i, j)));
                }
                edges.push((i + 1, j + 1, edge));
            }
            if j < m {
                let edge = self.costs.skip_b_cost(&b[j]);
                if !edge.is_valid() {
                    return Err(GenalignError::InvalidCost(CostSource::SkipB(j)));
                }
                edges.push((i, j + 1, edge));
            }

            for &(x, y, edge) in &edges {
                let candidate = cell.cost.add_cost(edge);
                if candidate.cmp_cost(&grid.get(x, y)) == Ordering::Less {
                    grid.set(x, y, candidate);
                    backtrack.set(x, y, i, j);
                    queue.queue_cell(candidate, x, y);
                    stats.num_queued += 1;
                }
            }
        }

        let cost = grid.get(n, m);
        let alignment = walk_backtrack(&backtrack, a, b);

        debug!("aligned {n}x{m}: cost {cost:?}, queued {}, visited {}, pruned {}",
               stats.num_queued, stats.num_visited, stats.num_pruned);

        Ok(AlignmentResult {
            cost,
            alignment,
            stats,
        })
    }
}

/// Reverse walk over the backtrack grid from the terminal cell back to
/// the origin, emitting one alignment column per step.
fn walk_backtrack<'a, A, B>(
    backtrack: &BacktrackGrid,
    a: &'a [A],
    b: &'a [B],
) -> Alignment<&'a A, &'a B> {
    // An all-skip path emits one column per element of either sequence
    let mut alignment = Vec::with_capacity(a.len() + b.len());
    let (mut x, mut y) = (a.len(), b.len());

    while (x, y) != (0, 0) {
        let Some((px, py)) = backtrack.get(x, y) else {
            panic!("Backtrack grid misses a predecessor for a cell on the optimal path!");
        };

        let pair = if px < x && py < y {
            AlignedPair::new(Some(&a[px]), Some(&b[py]))
        } else if px < x {
            AlignedPair::new(Some(&a[px]), None)
        } else {
            AlignedPair::new(None, Some(&b[py]))
        };

        alignment.push(pair);
        (x, y) = (px, py);
    }

    alignment.reverse();
    alignment
}

/// Align two sequences of a shared element type under caller-supplied
/// cost functions.
///
/// `calign` prices treating two elements as corresponding; `cskip`
/// prices leaving an element of either sequence unmatched. Both must
/// return nonnegative, finite values.
pub fn align<'a, T, C, F, G>(
    a: &'a [T],
    b: &'a [T],
    calign: F,
    cskip: G,
) -> Result<AlignmentResult<'a, T, T, C>, GenalignError>
where
    C: CostType,
    F: Fn(&T, &T) -> C,
    G: Fn(&T) -> C,
{
    Aligner::new(FnCosts::new(calign, cskip)).align(a, b)
}
