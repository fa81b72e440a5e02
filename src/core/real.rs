//! Floating-point element type shared by every decomposition routine.
//!
//! The engine is written once against [`Real`] and monomorphised for `f32`
//! and `f64`, so both precisions run the same algorithm.

use std::fmt::{Debug, Display};

use num_traits::{Float, FromPrimitive};

/// Sample type accepted by the smoothers and decomposers.
pub trait Real: Float + FromPrimitive + Debug + Display + Send + Sync + 'static {
    /// Convert a literal constant.
    #[inline]
    fn lit(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }

    /// Convert an index or count.
    #[inline]
    fn from_index(index: usize) -> Self {
        Self::from_usize(index).unwrap_or_else(Self::nan)
    }

    /// Lossy view used in diagnostics and error values.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Real for f32 {}

impl Real for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_round_trip_small_values() {
        assert_eq!(<f32 as Real>::lit(0.5), 0.5_f32);
        assert_eq!(<f64 as Real>::from_index(29), 29.0);
        assert_eq!(Real::as_f64(2.5_f32), 2.5);
    }
}
