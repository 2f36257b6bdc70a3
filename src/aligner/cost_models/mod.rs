pub mod unit;
pub mod func;

use crate::aligner::costs::CostType;

pub use func::{FnCosts, HeteroFnCosts};
pub use unit::UnitCosts;

/// Prices the three alignment moves over elements of the two sequences.
///
/// `A` and `B` are the element types of the first and second sequence;
/// they are commonly the same type but do not have to be. All three
/// functions must return nonnegative, finite values for every element
/// they can be handed; the aligner validates each value as it is
/// evaluated and fails fast on a violation.
pub trait CostModel<A: ?Sized, B: ?Sized> {
    type Cost: CostType;

    /// Price of treating `a` and `b` as corresponding elements
    fn align_cost(&self, a: &A, b: &B) -> Self::Cost;

    /// Price of leaving an element of the first sequence unmatched
    fn skip_a_cost(&self, a: &A) -> Self::Cost;

    /// Price of leaving an element of the second sequence unmatched
    fn skip_b_cost(&self, b: &B) -> Self::Cost;
}
