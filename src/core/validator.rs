//! Up-front checks on series, periods and smoothing parameters.
//!
//! Every check runs before any computation starts, so a call either fails
//! here or produces a complete decomposition.

use std::collections::HashSet;

use super::real::Real;
use crate::error::{MstlError, Result};

/// Shortest series any Loess window can be fitted to.
pub const MIN_SERIES_LEN: usize = 3;

/// Validation utility for decomposition inputs.
pub struct Validator;

impl Validator {
    /// Series must be long enough for the minimum window and fully finite.
    pub fn validate_series<T: Real>(series: &[T]) -> Result<()> {
        if series.len() < MIN_SERIES_LEN {
            return Err(MstlError::InsufficientData {
                needed: MIN_SERIES_LEN,
                got: series.len(),
            });
        }

        if let Some(index) = series.iter().position(|v| !v.is_finite()) {
            return Err(MstlError::NonFiniteValue { index });
        }

        Ok(())
    }

    /// Every period lies in `2..len`.
    pub fn validate_period(period: usize, len: usize) -> Result<()> {
        if period < 2 || period >= len {
            return Err(MstlError::InvalidPeriod { period, len });
        }
        Ok(())
    }

    /// Non-empty, individually valid, no repeats.
    pub fn validate_periods(periods: &[usize], len: usize) -> Result<()> {
        if periods.is_empty() {
            return Err(MstlError::EmptyPeriods);
        }

        let mut seen = HashSet::with_capacity(periods.len());
        for &period in periods {
            Self::validate_period(period, len)?;
            if !seen.insert(period) {
                return Err(MstlError::DuplicatePeriod(period));
            }
        }

        Ok(())
    }

    /// User-supplied window lengths are never coerced.
    pub fn validate_window_length(length: usize, name: &'static str) -> Result<()> {
        if length < 3 || length % 2 == 0 {
            return Err(MstlError::InvalidWindowLength { name, length });
        }
        Ok(())
    }

    pub fn validate_jump(jump: usize, name: &'static str) -> Result<()> {
        if jump == 0 {
            return Err(MstlError::InvalidJump { name });
        }
        Ok(())
    }

    /// Box-Cox parameter accepted by the MSTL driver.
    pub fn validate_lambda(lambda: f64) -> Result<()> {
        if !lambda.is_finite() || !(0.0..=1.0).contains(&lambda) {
            return Err(MstlError::InvalidLambda(lambda));
        }
        Ok(())
    }
}
