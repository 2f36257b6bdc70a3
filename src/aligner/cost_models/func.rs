use std::marker::PhantomData;

use crate::aligner::cost_models::CostModel;
use crate::aligner::costs::CostType;

/// Cost model built from caller-supplied functions over a shared element
/// type: one alignment cost function and one skip cost function applied
/// to elements of either sequence.
pub struct FnCosts<T: ?Sized, C, F, G> {
    calign: F,
    cskip: G,
    _marker: PhantomData<(fn(&T) -> C,)>,
}

impl<T, C, F, G> FnCosts<T, C, F, G>
where
    T: ?Sized,
    C: CostType,
    F: Fn(&T, &T) -> C,
    G: Fn(&T) -> C,
{
    pub fn new(calign: F, cskip: G) -> Self {
        Self {
            calign,
            cskip,
            _marker: PhantomData,
        }
    }
}

impl<T, C, F, G> CostModel<T, T> for FnCosts<T, C, F, G>
where
    T: ?Sized,
    C: CostType,
    F: Fn(&T, &T) -> C,
    G: Fn(&T) -> C,
{
    type Cost = C;

    fn align_cost(&self, a: &T, b: &T) -> C {
        (self.calign)(a, b)
    }

    fn skip_a_cost(&self, a: &T) -> C {
        (self.cskip)(a)
    }

    fn skip_b_cost(&self, b: &T) -> C {
        (self.cskip)(b)
    }
}

/// Cost model built from caller-supplied functions over two distinct
/// element types, with an independent skip cost function per sequence.
pub struct HeteroFnCosts<A: ?Sized, B: ?Sized, C, F, Ga, Gb> {
    calign: F,
    cskip_a: Ga,
    cskip_b: Gb,
    _marker: PhantomData<(fn(&A, &B) -> C,)>,
}

impl<A, B, C, F, Ga, Gb> HeteroFnCosts<A, B, C, F, Ga, Gb>
where
    A: ?Sized,
    B: ?Sized,
    C: CostType,
    F: Fn(&A, &B) -> C,
    Ga: Fn(&A) -> C,
    Gb: Fn(&B) -> C,
{
    pub fn new(calign: F, cskip_a: Ga, cskip_b: Gb) -> Self {
        Self {
            calign,
            cskip_a,
            cskip_b,
            _marker: PhantomData,
        }
    }
}

impl<A, B, C, F, Ga, Gb> CostModel<A, B> for HeteroFnCosts<A, B, C, F, Ga, Gb>
where
    A: ?Sized,
    B: ?Sized,
    C: CostType,
    F: Fn(&A, &B) -> C,
    Ga: Fn(&A) -> C,
    Gb: Fn(&B) -> C,
{
    type Cost = C;

    fn align_cost(&self, a: &A, b: &B) -> C {
        (self.calign)(a, b)
    }

    fn skip_a_cost(&self, a: &A) -> C {
        (self.cskip_a)(a)
    }

    fn skip_b_cost(&self, b: &B) -> C {
        (self.cskip_b)(b)
    }
}

#[cfg(test)]
mod tests {
    use super::{FnCosts, HeteroFnCosts};
    use crate::aligner::cost_models::CostModel;

    #[test]
    fn fn_costs_delegate_to_closures() {
        let costs = FnCosts::new(
            |x: &u8, y: &u8| f64::from(x.abs_diff(*y)),
            |_: &u8| 2.0,
        );

        assert_eq!(costs.align_cost(&10, &13), 3.0);
        assert_eq!(costs.skip_a_cost(&10), 2.0);
        assert_eq!(costs.skip_b_cost(&13), 2.0);
    }

    #[test]
    fn hetero_costs_take_independent_skip_functions() {
        let costs = HeteroFnCosts::new(
            |word: &&str, len: &usize| {
                if word.len() == *len { 0u32 } else { 1 }
            },
            |word: &&str| word.len() as u32,
            |_: &usize| 1u32,
        );

        assert_eq!(costs.align_cost(&"four", &4), 0);
        assert_eq!(costs.align_cost(&"four", &5), 1);
        assert_eq!(costs.skip_a_cost(&"four"), 4);
        assert_eq!(costs.skip_b_cost(&7), 1);
    }
}
