use std::cmp::Ordering;
use std::fmt::Debug;

use num::Zero;

/// Numeric type used for edge and cumulative alignment costs.
///
/// Floating point implementations use the native infinity as the
/// "unreached" sentinel; unsigned integer implementations use their
/// maximum value and saturate on addition so a cumulative cost can
/// never wrap past the sentinel.
pub trait CostType: Zero + PartialOrd + Copy + Debug {
    /// Sentinel for a grid cell not yet reached by any path
    fn unreached() -> Self;

    fn is_unreached(&self) -> bool;

    /// Cumulative cost of extending a path by one edge
    fn add_cost(self, edge: Self) -> Self;

    /// Total order over cost values, used for heap ordering and
    /// grid relaxation
    fn cmp_cost(&self, other: &Self) -> Ordering;

    /// Whether this value is admissible as an edge cost (nonnegative
    /// and finite)
    fn is_valid(&self) -> bool;
}

impl CostType for f64 {
    #[inline(always)]
    fn unreached() -> Self {
        Self::INFINITY
    }

    #[inline(always)]
    fn is_unreached(&self) -> bool {
        *self == Self::INFINITY
    }

    #[inline(always)]
    fn add_cost(self, edge: Self) -> Self {
        self + edge
    }

    #[inline(always)]
    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    #[inline(always)]
    fn is_valid(&self) -> bool {
        *self >= 0.0 && self.is_finite()
    }
}

impl CostType for f32 {
    #[inline(always)]
    fn unreached() -> Self {
        Self::INFINITY
    }

    #[inline(always)]
    fn is_unreached(&self) -> bool {
        *self == Self::INFINITY
    }

    #[inline(always)]
    fn add_cost(self, edge: Self) -> Self {
        self + edge
    }

    #[inline(always)]
    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    #[inline(always)]
    fn is_valid(&self) -> bool {
        *self >= 0.0 && self.is_finite()
    }
}

macro_rules! impl_cost_for_uint {
    ($t:ty) => {
        impl CostType for $t {
            #[inline(always)]
            fn unreached() -> Self {
                Self::MAX
            }

            #[inline(always)]
            fn is_unreached(&self) -> bool {
                *self == Self::MAX
            }

            #[inline(always)]
            fn add_cost(self, edge: Self) -> Self {
                self.saturating_add(edge)
            }

            #[inline(always)]
            fn cmp_cost(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            #[inline(always)]
            fn is_valid(&self) -> bool {
                *self < Self::MAX
            }
        }
    };
}

impl_cost_for_uint!(u16);
impl_cost_for_uint!(u32);
impl_cost_for_uint!(u64);
impl_cost_for_uint!(usize);

#[cfg(test)]
mod tests {
    use super::CostType;
    use std::cmp::Ordering;

    #[test]
    fn float_sentinel_dominates_finite_costs() {
        assert!(f64::unreached().is_unreached());
        assert_eq!(0.0f64.cmp_cost(&f64::unreached()), Ordering::Less);
        assert!(!f64::unreached().is_valid());
        assert!(!(-1.0f64).is_valid());
        assert!(0.0f64.is_valid());
    }

    #[test]
    fn integer_addition_saturates_below_sentinel() {
        let near_max = u32::MAX - 1;
        assert_eq!(near_max.add_cost(10), u32::MAX);
        assert!(near_max.add_cost(10).is_unreached());
    }
}
