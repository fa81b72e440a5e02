//! STL smoothing parameters and their per-period resolution.

use tracing::warn;

use crate::core::Validator;
use crate::error::Result;
use crate::smoothing::{Degree, Loess};

/// User-facing STL parameters. Unset values are derived from the period.
#[derive(Debug, Clone, PartialEq)]
pub struct StlParams {
    seasonal_length: Option<usize>,
    trend_length: Option<usize>,
    low_pass_length: Option<usize>,
    seasonal_degree: Degree,
    trend_degree: Option<Degree>,
    low_pass_degree: Option<Degree>,
    seasonal_jump: Option<usize>,
    trend_jump: Option<usize>,
    low_pass_jump: Option<usize>,
    inner_loops: Option<usize>,
    outer_loops: Option<usize>,
    robust: bool,
}

/// Fully resolved STL configuration for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StlConfig {
    pub period: usize,
    pub seasonal: Loess,
    pub trend: Loess,
    pub low_pass: Loess,
    pub inner_loops: usize,
    pub outer_loops: usize,
}

impl StlParams {
    pub fn new() -> Self {
        Self {
            seasonal_length: None,
            trend_length: None,
            low_pass_length: None,
            seasonal_degree: Degree::Constant,
            trend_degree: None,
            low_pass_degree: None,
            seasonal_jump: None,
            trend_jump: None,
            low_pass_jump: None,
            inner_loops: None,
            outer_loops: None,
            robust: false,
        }
    }

    /// Set the cycle-subseries window (ns); must be odd and at least 3.
    pub fn with_seasonal_length(mut self, length: usize) -> Self {
        self.seasonal_length = Some(length);
        self
    }

    /// Set the trend window (nt); must be odd and at least 3.
    pub fn with_trend_length(mut self, length: usize) -> Self {
        self.trend_length = Some(length);
        self
    }

    /// Set the low-pass window (nl); must be odd and at least 3.
    pub fn with_low_pass_length(mut self, length: usize) -> Self {
        self.low_pass_length = Some(length);
        self
    }

    pub fn with_seasonal_degree(mut self, degree: Degree) -> Self {
        self.seasonal_degree = degree;
        self
    }

    pub fn with_trend_degree(mut self, degree: Degree) -> Self {
        self.trend_degree = Some(degree);
        self
    }

    /// Defaults to the trend degree.
    pub fn with_low_pass_degree(mut self, degree: Degree) -> Self {
        self.low_pass_degree = Some(degree);
        self
    }

    pub fn with_seasonal_jump(mut self, jump: usize) -> Self {
        self.seasonal_jump = Some(jump);
        self
    }

    pub fn with_trend_jump(mut self, jump: usize) -> Self {
        self.trend_jump = Some(jump);
        self
    }

    pub fn with_low_pass_jump(mut self, jump: usize) -> Self {
        self.low_pass_jump = Some(jump);
        self
    }

    pub fn with_inner_loops(mut self, n: usize) -> Self {
        self.inner_loops = Some(n);
        self
    }

    /// Number of robustness passes; ignored unless robust fitting is enabled.
    pub fn with_outer_loops(mut self, n: usize) -> Self {
        self.outer_loops = Some(n);
        self
    }

    /// Enable or disable robust fitting.
    pub fn with_robust(mut self, robust: bool) -> Self {
        self.robust = robust;
        self
    }

    /// Enable robust fitting.
    pub fn robust(self) -> Self {
        self.with_robust(true)
    }

    pub fn is_robust(&self) -> bool {
        self.robust
    }

    pub fn seasonal_length(&self) -> Option<usize> {
        self.seasonal_length
    }

    /// Check explicitly configured values; derived values are always valid.
    pub fn validate(&self) -> Result<()> {
        if let Some(ns) = self.seasonal_length {
            Validator::validate_window_length(ns, "seasonal length")?;
        }
        if let Some(nt) = self.trend_length {
            Validator::validate_window_length(nt, "trend length")?;
        }
        if let Some(nl) = self.low_pass_length {
            Validator::validate_window_length(nl, "low-pass length")?;
        }
        if let Some(j) = self.seasonal_jump {
            Validator::validate_jump(j, "seasonal jump")?;
        }
        if let Some(j) = self.trend_jump {
            Validator::validate_jump(j, "trend jump")?;
        }
        if let Some(j) = self.low_pass_jump {
            Validator::validate_jump(j, "low-pass jump")?;
        }
        Ok(())
    }

    /// Resolve every parameter for `period`, following Cleveland et al. (1990)
    /// for the defaults.
    pub fn resolve(&self, period: usize) -> Result<StlConfig> {
        self.validate()?;

        let np = period.max(2);

        let ns = make_odd(self.seasonal_length.unwrap_or(np).max(3));

        let nt = match self.trend_length {
            Some(nt) => nt,
            None => {
                let nt = (1.5 * np as f64 / (1.0 - 1.5 / ns as f64)).ceil() as usize;
                make_odd(nt.max(3))
            }
        };

        let nl = match self.low_pass_length {
            Some(nl) => nl,
            None => make_odd(np),
        };

        let trend_degree = self.trend_degree.unwrap_or(Degree::Linear);
        let low_pass_degree = self.low_pass_degree.unwrap_or(trend_degree);

        let inner_loops = self
            .inner_loops
            .unwrap_or(if self.robust { 1 } else { 2 });
        let outer_loops = if self.robust {
            self.outer_loops.unwrap_or(15)
        } else {
            if let Some(n) = self.outer_loops.filter(|&n| n > 0) {
                warn!(outer_loops = n, "outer loops ignored without robust fitting");
            }
            0
        };

        Ok(StlConfig {
            period,
            seasonal: Loess::new(
                ns,
                self.seasonal_degree,
                self.seasonal_jump.unwrap_or_else(|| default_jump(ns)),
            ),
            trend: Loess::new(
                nt,
                trend_degree,
                self.trend_jump.unwrap_or_else(|| default_jump(nt)),
            ),
            low_pass: Loess::new(
                nl,
                low_pass_degree,
                self.low_pass_jump.unwrap_or_else(|| default_jump(nl)),
            ),
            inner_loops,
            outer_loops,
        })
    }
}

impl Default for StlParams {
    fn default() -> Self {
        Self::new()
    }
}

fn make_odd(length: usize) -> usize {
    if length % 2 == 0 {
        length + 1
    } else {
        length
    }
}

/// One fitted point in ten.
fn default_jump(length: usize) -> usize {
    length.div_ceil(10)
}
