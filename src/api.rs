//! Precision-dispatching entry point.
//!
//! The element width of the input picks the monomorphised engine; the
//! result comes back in the same width.

use tracing::debug;

use crate::error::Result;
use crate::options::FitOptions;
use crate::seasonality::MSTLResult;

/// Input series in either supported precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Series<'a> {
    F32(&'a [f32]),
    F64(&'a [f64]),
}

impl Series<'_> {
    pub fn len(&self) -> usize {
        match self {
            Series::F32(s) => s.len(),
            Series::F64(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a [f32]> for Series<'a> {
    fn from(series: &'a [f32]) -> Self {
        Series::F32(series)
    }
}

impl<'a> From<&'a [f64]> for Series<'a> {
    fn from(series: &'a [f64]) -> Self {
        Series::F64(series)
    }
}

impl<'a> From<&'a Vec<f32>> for Series<'a> {
    fn from(series: &'a Vec<f32>) -> Self {
        Series::F32(series)
    }
}

impl<'a> From<&'a Vec<f64>> for Series<'a> {
    fn from(series: &'a Vec<f64>) -> Self {
        Series::F64(series)
    }
}

/// Decomposition in the precision of the input.
#[derive(Debug, Clone)]
pub enum Decomposition {
    F32(MSTLResult<f32>),
    F64(MSTLResult<f64>),
}

impl Decomposition {
    pub fn as_f32(&self) -> Option<&MSTLResult<f32>> {
        match self {
            Decomposition::F32(r) => Some(r),
            Decomposition::F64(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<&MSTLResult<f64>> {
        match self {
            Decomposition::F64(r) => Some(r),
            Decomposition::F32(_) => None,
        }
    }

    /// Series length of the decomposition.
    pub fn len(&self) -> usize {
        match self {
            Decomposition::F32(r) => r.trend.len(),
            Decomposition::F64(r) => r.trend.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decompose `series` into one seasonal component per period, a trend and
/// a remainder.
///
/// # Example
///
/// ```
/// use mstl::{fit, FitOptions};
///
/// let series: Vec<f64> = (0..60)
///     .map(|i| 10.0 + (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin())
///     .collect();
/// let result = fit(&series, &[7], &FitOptions::default()).unwrap();
/// let result = result.as_f64().unwrap();
/// assert_eq!(result.seasonal.len(), 1);
/// assert_eq!(result.trend.len(), 60);
/// ```
pub fn fit<'a>(
    series: impl Into<Series<'a>>,
    periods: &[usize],
    options: &FitOptions,
) -> Result<Decomposition> {
    let series = series.into();
    let mstl = options.to_mstl(periods)?;

    match series {
        Series::F32(values) => {
            debug!(precision = "f32", n = values.len(), "dispatching fit");
            mstl.decompose(values).map(Decomposition::F32)
        }
        Series::F64(values) => {
            debug!(precision = "f64", n = values.len(), "dispatching fit");
            mstl.decompose(values).map(Decomposition::F64)
        }
    }
}

/// Decompose an `f32` series.
pub fn fit_f32(series: &[f32], periods: &[usize], options: &FitOptions) -> Result<MSTLResult<f32>> {
    options.to_mstl(periods)?.decompose(series)
}

/// Decompose an `f64` series.
pub fn fit_f64(series: &[f64], periods: &[usize], options: &FitOptions) -> Result<MSTLResult<f64>> {
    options.to_mstl(periods)?.decompose(series)
}
