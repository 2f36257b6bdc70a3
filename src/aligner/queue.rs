use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::aligner::costs::CostType;

/// A pending frontier entry: the cumulative cost at which grid cell
/// `(i, j)` was queued.
///
/// Ordering is by cost ascending; among equal costs the cell closer to
/// the terminal corner wins (larger `i`, then larger `j`). The second
/// criterion makes the search prefer progress toward the goal and pins
/// a canonical output when several minimum-cost alignments exist.
#[derive(Clone, Copy, Debug)]
pub struct QueuedCell<C> {
    pub cost: C,
    pub i: u32,
    pub j: u32,
}

impl<C: CostType> Ord for QueuedCell<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp_cost(&other.cost)
            .then_with(|| other.i.cmp(&self.i))
            .then_with(|| other.j.cmp(&self.j))
    }
}

impl<C: CostType> PartialOrd for QueuedCell<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: CostType> PartialEq for QueuedCell<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: CostType> Eq for QueuedCell<C> {}

/// Min-priority queue over pending grid cells.
///
/// Relaxing a cell pushes a fresh entry instead of decreasing the key of
/// an existing one, so the heap may hold several entries for the same
/// cell. Stale entries (recorded cost no longer the cell's best) are
/// detected against the cost grid after popping and skipped.
pub struct FrontierQueue<C> {
    heap: BinaryHeap<Reverse<QueuedCell<C>>>,
}

impl<C> FrontierQueue<C>
where
    C: CostType,
{
    pub fn new() -> Self {
        Self { heap: BinaryHeap::with_capacity(64) }
    }

    pub fn queue_cell(&mut self, cost: C, i: usize, j: usize) {
        self.heap.push(Reverse(QueuedCell {
            cost,
            i: i as u32,
            j: j as u32,
        }));
    }

    pub fn pop_cell(&mut self) -> Option<QueuedCell<C>> {
        self.heap.pop().map(|Reverse(cell)| cell)
    }
}

impl<C> Default for FrontierQueue<C>
where
    C: CostType,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::FrontierQueue;

    #[test]
    fn pops_in_cost_order() {
        let mut queue: FrontierQueue<f64> = FrontierQueue::new();

        queue.queue_cell(3.0, 1, 1);
        queue.queue_cell(1.0, 0, 1);
        queue.queue_cell(2.0, 1, 0);

        let costs: Vec<f64> =
            std::iter::from_fn(|| queue.pop_cell().map(|c| c.cost)).collect();
        assert_eq!(costs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn equal_costs_prefer_cells_closer_to_the_end() {
        let mut queue: FrontierQueue<u32> = FrontierQueue::new();

        queue.queue_cell(5, 0, 0);
        queue.queue_cell(5, 2, 1);
        queue.queue_cell(5, 2, 3);
        queue.queue_cell(5, 1, 4);

        let cells: Vec<(u32, u32)> =
            std::iter::from_fn(|| queue.pop_cell().map(|c| (c.i, c.j))).collect();
        assert_eq!(cells, vec![(2, 3), (2, 1), (1, 4), (0, 0)]);
    }

    #[test]
    fn duplicate_entries_for_one_cell_are_allowed() {
        let mut queue: FrontierQueue<u32> = FrontierQueue::new();

        queue.queue_cell(7, 1, 1);
        queue.queue_cell(4, 1, 1);

        assert_eq!(queue.pop_cell().map(|c| c.cost), Some(4));
        assert_eq!(queue.pop_cell().map(|c| c.cost), Some(7));
        assert!(queue.pop_cell().is_none());
    }
}
