pub mod errors;
pub mod aligner;

pub use aligner::{align, AlignedPair, Aligner, Alignment, AlignmentResult};
pub use errors::GenalignError;
