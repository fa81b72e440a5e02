//! Seasonal component extraction for a single period.
//!
//! 1. Each cycle-subseries (`j, j + p, j + 2p, ...`) is Loess-smoothed and
//!    extended by one extrapolated value at each end.
//! 2. The smoothed subseries are interleaved into a series `2p` longer
//!    than the input.
//! 3. Moving averages (p, p, 3) followed by Loess give a low-pass estimate
//!    of the trend that leaked into the subseries.
//! 4. The seasonal component is the extended series minus the low-pass.

use super::params::StlConfig;
use crate::core::Real;
use crate::smoothing::{low_pass_average, Loess};

/// Cycle-subseries smoother plus low-pass filter for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalExtractor {
    period: usize,
    seasonal: Loess,
    low_pass: Loess,
}

impl SeasonalExtractor {
    pub fn new(period: usize, seasonal: Loess, low_pass: Loess) -> Self {
        Self {
            period: period.max(1),
            seasonal,
            low_pass,
        }
    }

    pub fn from_config(config: &StlConfig) -> Self {
        Self::new(config.period, config.seasonal, config.low_pass)
    }

    /// Seasonal component of `series`, same length as the input.
    pub fn extract<T: Real>(&self, series: &[T], robustness: Option<&[T]>) -> Vec<T> {
        let n = series.len();
        if n == 0 {
            return Vec::new();
        }

        let extended = self.smooth_cycle_subseries(series, robustness);
        let low_pass = self.low_pass(&extended);

        extended[self.period..self.period + n]
            .iter()
            .zip(low_pass.iter())
            .map(|(&s, &l)| s - l)
            .collect()
    }

    /// Smoothed cycle-subseries, interleaved, of length `n + 2 * period`.
    ///
    /// Position `m * period + j` holds the `m`-th value of subseries `j`
    /// after prepending one extrapolated value, so input sample `i` maps to
    /// position `i + period`.
    pub fn smooth_cycle_subseries<T: Real>(
        &self,
        series: &[T],
        robustness: Option<&[T]>,
    ) -> Vec<T> {
        let n = series.len();
        let np = self.period;
        let mut extended = vec![T::zero(); n + 2 * np];
        if n == 0 {
            return extended;
        }

        // One scratch set reused for every subseries.
        let max_len = (n - 1) / np + 1;
        let mut values = vec![T::zero(); max_len];
        let mut weights = vec![T::zero(); max_len];
        let mut smoothed = vec![T::zero(); max_len + 2];
        let mut scratch = vec![T::zero(); max_len];

        for j in 0..np {
            let k = (n + np - 1 - j) / np;
            if k == 0 {
                continue;
            }

            for i in 0..k {
                values[i] = series[i * np + j];
            }
            let sub_weights = match robustness {
                Some(rw) => {
                    for i in 0..k {
                        weights[i] = rw[i * np + j];
                    }
                    Some(&weights[..k])
                }
                None => None,
            };
            let sub = &values[..k];

            self.seasonal
                .smooth_into(sub, sub_weights, &mut smoothed[1..k + 1], &mut scratch[..k]);

            let right = self.seasonal.length().min(k) - 1;
            smoothed[0] = self
                .seasonal
                .fit_at(sub, -T::one(), 0, right, &mut scratch[..k], sub_weights)
                .unwrap_or(smoothed[1]);

            let left = k.saturating_sub(self.seasonal.length());
            smoothed[k + 1] = self
                .seasonal
                .fit_at(sub, T::from_index(k), left, k - 1, &mut scratch[..k], sub_weights)
                .unwrap_or(smoothed[k]);

            for m in 0..k + 2 {
                extended[m * np + j] = smoothed[m];
            }
        }

        extended
    }

    /// Low-pass estimate of an extended seasonal series (length `n`).
    fn low_pass<T: Real>(&self, extended: &[T]) -> Vec<T> {
        let averaged = low_pass_average(extended, self.period);
        self.low_pass.smooth(&averaged, None)
    }
}
