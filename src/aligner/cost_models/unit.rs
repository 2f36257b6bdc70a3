use crate::aligner::cost_models::CostModel;

/// Levenshtein costs: matching equal elements is free, matching unequal
/// elements costs 1, skipping an element costs 1.
///
/// The total cost of an alignment under this model is the edit distance
/// between the two sequences.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitCosts;

impl<T> CostModel<T, T> for UnitCosts
where
    T: PartialEq,
{
    type Cost = u32;

    fn align_cost(&self, a: &T, b: &T) -> u32 {
        u32::from(a != b)
    }

    fn skip_a_cost(&self, _: &T) -> u32 {
        1
    }

    fn skip_b_cost(&self, _: &T) -> u32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::UnitCosts;
    use crate::aligner::cost_models::CostModel;

    #[test]
    fn unit_costs_price_moves() {
        let costs = UnitCosts;

        assert_eq!(costs.align_cost(&'a', &'a'), 0);
        assert_eq!(costs.align_cost(&'a', &'b'), 1);
        assert_eq!(costs.skip_a_cost(&'a'), 1);
        assert_eq!(costs.skip_b_cost(&'b'), 1);
    }
}
