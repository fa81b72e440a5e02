//! MSTL (Multiple Seasonal-Trend decomposition using LOESS) implementation.
//!
//! MSTL extends STL to handle multiple seasonal periods, such as daily and weekly
//! patterns in hourly data. Each global pass walks the periods in the order
//! given, re-adds the component currently held for a period, refits it with
//! STL and subtracts the new estimate again. The trend is then smoothed from
//! the fully deseasonalised series.

use tracing::{debug, trace};

use super::params::{StlConfig, StlParams};
use super::stl::fit_stl;
use super::strength::component_strength;
use crate::core::{Real, Validator};
use crate::error::{MstlError, Result};
use crate::transform::boxcox;

/// Result of MSTL decomposition.
#[derive(Debug, Clone)]
pub struct MSTLResult<T> {
    /// Trend component.
    pub trend: Vec<T>,
    /// Seasonal components, in the order the periods were requested.
    pub seasonal: Vec<Vec<T>>,
    /// The seasonal periods corresponding to each component.
    pub periods: Vec<usize>,
    /// Remainder component.
    pub remainder: Vec<T>,
}

impl<T: Real> MSTLResult<T> {
    /// Get the total seasonal component (sum of all seasonal components).
    pub fn total_seasonal(&self) -> Vec<T> {
        let mut total = vec![T::zero(); self.trend.len()];
        for component in &self.seasonal {
            for (t, &s) in total.iter_mut().zip(component.iter()) {
                *t = *t + s;
            }
        }
        total
    }

    /// Get seasonal strength for a specific component.
    pub fn seasonal_strength(&self, index: usize) -> Option<T> {
        self.seasonal
            .get(index)
            .map(|seasonal| component_strength(seasonal, &self.remainder))
    }

    /// Get trend strength.
    pub fn trend_strength(&self) -> T {
        component_strength(&self.trend, &self.remainder)
    }
}

/// MSTL decomposition for multiple seasonal periods.
#[derive(Debug, Clone, PartialEq)]
pub struct MSTL {
    /// Seasonal periods, in extraction order.
    periods: Vec<usize>,
    /// Number of global passes.
    iterations: usize,
    /// Box-Cox parameter applied before decomposition.
    lambda: Option<f64>,
    /// Per-period seasonal windows, parallel to `periods`.
    seasonal_lengths: Option<Vec<usize>>,
    /// Parameters shared by every STL fit.
    stl: StlParams,
}

impl MSTL {
    /// Create a new MSTL decomposer with the given seasonal periods.
    ///
    /// The order of `periods` is the extraction order and the output order.
    pub fn new(periods: Vec<usize>) -> Self {
        Self {
            periods,
            iterations: 2,
            lambda: None,
            seasonal_lengths: None,
            stl: StlParams::new(),
        }
    }

    /// Set number of global passes.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Apply a Box-Cox transform with this lambda before decomposing.
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = Some(lambda);
        self
    }

    /// Seasonal window per period, overriding the position-based default.
    pub fn with_seasonal_lengths(mut self, lengths: Vec<usize>) -> Self {
        self.seasonal_lengths = Some(lengths);
        self
    }

    /// Smoothing parameters passed to every STL fit.
    pub fn with_stl_params(mut self, params: StlParams) -> Self {
        self.stl = params;
        self
    }

    /// Enable robust fitting.
    pub fn robust(mut self) -> Self {
        self.stl = self.stl.robust();
        self
    }

    /// Get the seasonal periods.
    pub fn periods(&self) -> &[usize] {
        &self.periods
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn lambda(&self) -> Option<f64> {
        self.lambda
    }

    pub fn stl_params(&self) -> &StlParams {
        &self.stl
    }

    /// Resolve the STL configuration of every period, in extraction order.
    ///
    /// Unless overridden, the k-th extracted period (1-based) uses a
    /// seasonal window of `7 + 4k`.
    fn resolve(&self) -> Result<Vec<StlConfig>> {
        if let Some(lengths) = &self.seasonal_lengths {
            if lengths.len() != self.periods.len() {
                return Err(MstlError::DimensionMismatch {
                    expected: self.periods.len(),
                    got: lengths.len(),
                });
            }
        }

        self.periods
            .iter()
            .enumerate()
            .map(|(i, &period)| {
                let params = match (&self.seasonal_lengths, self.stl.seasonal_length()) {
                    (Some(lengths), _) => self.stl.clone().with_seasonal_length(lengths[i]),
                    (None, Some(_)) => self.stl.clone(),
                    (None, None) => self.stl.clone().with_seasonal_length(7 + 4 * (i + 1)),
                };
                params.resolve(period)
            })
            .collect()
    }

    /// Decompose the time series.
    #[tracing::instrument(skip_all, fields(n = series.len(), periods = ?self.periods))]
    pub fn decompose<T: Real>(&self, series: &[T]) -> Result<MSTLResult<T>> {
        Validator::validate_series(series)?;
        Validator::validate_periods(&self.periods, series.len())?;
        if let Some(lambda) = self.lambda {
            Validator::validate_lambda(lambda)?;
        }
        let configs = self.resolve()?;
        debug!(?configs, iterations = self.iterations, "resolved MSTL configuration");

        let n = series.len();
        let mut deseasonalized = match self.lambda {
            Some(lambda) => boxcox(series, lambda)?,
            None => series.to_vec(),
        };

        // A single period is plain STL: exactly one pass.
        let iterations = if self.periods.len() == 1 {
            1
        } else {
            self.iterations
        };

        let mut seasonal = vec![vec![T::zero(); n]; self.periods.len()];
        let mut weights: Option<Vec<T>> = None;

        for pass in 0..iterations {
            for (idx, config) in configs.iter().enumerate() {
                let component = &mut seasonal[idx];
                for (d, &s) in deseasonalized.iter_mut().zip(component.iter()) {
                    *d = *d + s;
                }

                let fit = fit_stl(&deseasonalized, config);

                *component = fit.seasonal;
                for (d, &s) in deseasonalized.iter_mut().zip(component.iter()) {
                    *d = *d - s;
                }
                weights = fit.weights;
            }
            trace!(pass, "completed MSTL pass");
        }

        // The final trend uses the trend smoother of the last extracted period.
        let trend_loess = configs
            .last()
            .map(|config| config.trend)
            .ok_or(MstlError::EmptyPeriods)?;
        let trend = trend_loess.smooth(&deseasonalized, weights.as_deref());

        let remainder: Vec<T> = deseasonalized
            .iter()
            .zip(trend.iter())
            .map(|(&d, &t)| d - t)
            .collect();

        Ok(MSTLResult {
            trend,
            seasonal,
            periods: self.periods.clone(),
            remainder,
        })
    }
}
