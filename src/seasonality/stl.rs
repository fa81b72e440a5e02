//! STL (Seasonal-Trend decomposition using LOESS) implementation.
//!
//! STL decomposes a time series into three components:
//! - Trend: The underlying long-term pattern
//! - Seasonal: The repeating seasonal pattern
//! - Remainder: The residual after removing trend and seasonal
//!
//! The inner loop alternates seasonal extraction and trend smoothing. When
//! robust fitting is enabled, each outer pass recomputes bisquare weights
//! from the remainder and reruns the inner loop with them.

use tracing::{debug, trace};

use super::extractor::SeasonalExtractor;
use super::params::{StlConfig, StlParams};
use super::robustness::bisquare_weights;
use super::strength::component_strength;
use crate::core::{Real, Validator};
use crate::error::Result;

/// Result of STL decomposition.
#[derive(Debug, Clone)]
pub struct STLResult<T> {
    /// Trend component.
    pub trend: Vec<T>,
    /// Seasonal component.
    pub seasonal: Vec<T>,
    /// Remainder component.
    pub remainder: Vec<T>,
    /// Robustness weights used by the final trend smoothing (all ones unless robust).
    pub weights: Vec<T>,
}

impl<T: Real> STLResult<T> {
    /// Get the seasonal strength (0 to 1).
    /// Values close to 1 indicate strong seasonality.
    pub fn seasonal_strength(&self) -> T {
        component_strength(&self.seasonal, &self.remainder)
    }

    /// Get the trend strength (0 to 1).
    /// Values close to 1 indicate strong trend.
    pub fn trend_strength(&self) -> T {
        component_strength(&self.trend, &self.remainder)
    }
}

/// STL decomposition configuration and algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct STL {
    /// Seasonal period.
    period: usize,
    /// Smoothing parameters; unset values are derived from the period.
    params: StlParams,
}

impl STL {
    /// Create a new STL decomposer with the given seasonal period.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            params: StlParams::new(),
        }
    }

    /// Replace all smoothing parameters.
    pub fn with_params(mut self, params: StlParams) -> Self {
        self.params = params;
        self
    }

    /// Set custom seasonal smoothness (ns parameter).
    pub fn with_seasonal_length(mut self, ns: usize) -> Self {
        self.params = self.params.with_seasonal_length(ns);
        self
    }

    /// Set custom trend smoothness (nt parameter).
    pub fn with_trend_length(mut self, nt: usize) -> Self {
        self.params = self.params.with_trend_length(nt);
        self
    }

    /// Set number of inner iterations.
    pub fn with_inner_loops(mut self, n: usize) -> Self {
        self.params = self.params.with_inner_loops(n);
        self
    }

    /// Set number of outer (robustness) iterations.
    pub fn with_outer_loops(mut self, n: usize) -> Self {
        self.params = self.params.with_outer_loops(n);
        self
    }

    /// Enable robust fitting with default iterations.
    pub fn robust(mut self) -> Self {
        self.params = self.params.robust();
        self
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn params(&self) -> &StlParams {
        &self.params
    }

    /// Decompose the time series.
    #[tracing::instrument(skip_all, fields(n = series.len(), period = self.period))]
    pub fn decompose<T: Real>(&self, series: &[T]) -> Result<STLResult<T>> {
        Validator::validate_series(series)?;
        Validator::validate_period(self.period, series.len())?;
        let config = self.params.resolve(self.period)?;
        debug!(?config, "resolved STL configuration");

        let fit = fit_stl(series, &config);

        let remainder: Vec<T> = series
            .iter()
            .zip(fit.seasonal.iter())
            .zip(fit.trend.iter())
            .map(|((&y, &s), &t)| y - s - t)
            .collect();
        let weights = fit
            .weights
            .unwrap_or_else(|| vec![T::one(); series.len()]);

        Ok(STLResult {
            trend: fit.trend,
            seasonal: fit.seasonal,
            remainder,
            weights,
        })
    }
}

/// Raw output of one STL fit.
#[derive(Debug, Clone)]
pub(crate) struct StlFit<T> {
    pub seasonal: Vec<T>,
    pub trend: Vec<T>,
    /// Weights used by the last trend smoothing; `None` when not robust.
    pub weights: Option<Vec<T>>,
}

/// Run the STL inner/outer loops on an already validated series.
pub(crate) fn fit_stl<T: Real>(series: &[T], config: &StlConfig) -> StlFit<T> {
    let n = series.len();
    let extractor = SeasonalExtractor::from_config(config);

    let mut seasonal = vec![T::zero(); n];
    let mut trend = vec![T::zero(); n];
    let mut weights: Option<Vec<T>> = None;
    let mut work = vec![T::zero(); n];
    let mut scratch = vec![T::zero(); n];

    let mut pass = 0;
    loop {
        for _ in 0..config.inner_loops {
            // Detrend, extract the seasonal, then smooth what is left.
            for i in 0..n {
                work[i] = series[i] - trend[i];
            }
            seasonal = extractor.extract(&work, weights.as_deref());

            for i in 0..n {
                work[i] = series[i] - seasonal[i];
            }
            config
                .trend
                .smooth_into(&work, weights.as_deref(), &mut trend, &mut scratch);
        }

        pass += 1;
        if pass > config.outer_loops {
            break;
        }

        for i in 0..n {
            work[i] = trend[i] + seasonal[i];
        }
        let rw = weights.get_or_insert_with(|| vec![T::one(); n]);
        bisquare_weights(series, &work, rw);
        trace!(pass, "updated robustness weights");
    }

    StlFit {
        seasonal,
        trend,
        weights,
    }
}
