//! Constants shared across the crate.

/// Tolerance used when comparing two gains that should coincide.
pub const NUMERIC_TOLERANCE: f64 = 1e-9;

pub(crate) const WIDTH:      usize =  8;
pub(crate) const PREC_WIDTH: usize =  5;
pub(crate) const FULL_WIDTH: usize = 40;
