use std::collections::TryReserveError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which cost function produced an invalid value, and for which element(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostSource {
    /// `align_cost` over elements `a[i]` and `b[j]`
    Align(usize, usize),

    /// `skip_a_cost` over element `a[i]`
    SkipA(usize),

    /// `skip_b_cost` over element `b[j]`
    SkipB(usize),
}

#[derive(Debug)]
pub enum GenalignError {
    /// A cost function returned a negative or non-finite value
    InvalidCost(CostSource),

    /// The alignment grid exceeds the addressable number of cells
    GridTooLarge(usize, usize),

    /// Error variant when we couldn't reserve memory for the alignment grid
    GridAllocation { source: TryReserveError },
}

impl Error for GenalignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::GridAllocation { ref source } => Some(source),
            _ => None
        }
    }
}

impl From<TryReserveError> for GenalignError {
    fn from(value: TryReserveError) -> Self {
        Self::GridAllocation {
            source: value
        }
    }
}

impl Display for CostSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Align(i, j) =>
                write!(f, "align_cost(a[{i}], b[{j}])"),
            Self::SkipA(i) =>
                write!(f, "skip_a_cost(a[{i}])"),
            Self::SkipB(j) =>
                write!(f, "skip_b_cost(b[{j}])"),
        }
    }
}

impl Display for GenalignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::InvalidCost(ref source) =>
                write!(f, "Cost function returned a negative or non-finite value: {source}"),
            Self::GridTooLarge(rows, cols) =>
                write!(f, "The alignment grid of {rows}x{cols} cells exceeds the addressable cell space!"),
            Self::GridAllocation { source: _ } =>
                write!(f, "Could not allocate memory for the alignment grid!"),
        }
    }
}
