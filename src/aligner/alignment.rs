use std::fmt::Display;

use itertools::Itertools;
use num::Zero;
use serde::Serialize;

use crate::aligner::cost_models::CostModel;
use crate::aligner::costs::CostType;

/// One column of an alignment: an element of sequence A, an element of
/// sequence B, or one of each. Never both absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AlignedPair<A, B> {
    /// Element of the first sequence, if not skipped over
    pub left: Option<A>,

    /// Element of the second sequence, if not skipped over
    pub right: Option<B>,
}

impl<A, B> AlignedPair<A, B> {
    pub fn new(left: Option<A>, right: Option<B>) -> Self {
        Self { left, right }
    }

    /// True if this column matches an element from each sequence
    pub fn is_aligned(&self) -> bool {
        matches!((&self.left, &self.right), (Some(_), Some(_)))
    }

    /// True if one side was left unmatched (an insertion or deletion)
    pub fn is_skip(&self) -> bool {
        !self.is_aligned()
    }
}

/// Left-to-right list of alignment columns covering both sequences
/// end to end.
pub type Alignment<A, B> = Vec<AlignedPair<A, B>>;

/// Re-apply a cost model to a finished alignment.
///
/// For a minimum-cost alignment this reproduces the total cost reported
/// by the aligner; callers can use it to cross-check results or to price
/// an alignment under a different model.
pub fn alignment_cost<M, A, B>(costs: &M, alignment: &[AlignedPair<&A, &B>]) -> M::Cost
where
    M: CostModel<A, B>,
{
    alignment.iter()
        .fold(M::Cost::zero(), |acc, pair| match (pair.left, pair.right) {
            (Some(a), Some(b)) => acc.add_cost(costs.align_cost(a, b)),
            (Some(a), None) => acc.add_cost(costs.skip_a_cost(a)),
            (None, Some(b)) => acc.add_cost(costs.skip_b_cost(b)),
            (None, None) => acc,
        })
}

/// Render an alignment as two rows of columns, gaps printed as `-`.
pub fn format_alignment<A, B>(alignment: &[AlignedPair<A, B>]) -> String
where
    A: Display,
    B: Display,
{
    let top = alignment.iter()
        .map(|pair| match &pair.left {
            Some(a) => a.to_string(),
            None => "-".to_string(),
        })
        .join(" ");
    let bottom = alignment.iter()
        .map(|pair| match &pair.right {
            Some(b) => b.to_string(),
            None => "-".to_string(),
        })
        .join(" ");

    format!("{top}\n{bottom}")
}

#[cfg(test)]
mod tests {
    use super::{format_alignment, AlignedPair};

    #[test]
    fn pair_classification() {
        let aligned: AlignedPair<char, char> = AlignedPair::new(Some('a'), Some('b'));
        assert!(aligned.is_aligned());
        assert!(!aligned.is_skip());

        let skip_a: AlignedPair<char, char> = AlignedPair::new(Some('a'), None);
        assert!(skip_a.is_skip());

        let skip_b: AlignedPair<char, char> = AlignedPair::new(None, Some('b'));
        assert!(skip_b.is_skip());
    }

    #[test]
    fn formats_gaps_as_dashes() {
        let alignment = vec![
            AlignedPair::new(Some('s'), Some('c')),
            AlignedPair::new(Some('m'), None),
            AlignedPair::new(Some('a'), Some('a')),
        ];

        assert_eq!(format_alignment(&alignment), "s m a\nc - a");
    }
}
