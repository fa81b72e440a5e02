//! Caller-facing fit options.
//!
//! [`FitOptions`] mirrors the flat option record of the `fit` entry point:
//! every field is optional and named in camelCase, so it can be read straight
//! from JSON or any other serde format.

use serde::Deserialize;

use crate::error::Result;
use crate::seasonality::{StlParams, MSTL};
use crate::smoothing::Degree;

/// Flat option set for [`crate::fit`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FitOptions {
    /// Enable the outer robustness loop.
    pub robust: Option<bool>,
    pub trend_jump: Option<usize>,
    pub trend_length: Option<usize>,
    pub trend_degree: Option<u32>,
    pub inner_loops: Option<usize>,
    pub outer_loops: Option<usize>,
    pub low_pass_jump: Option<usize>,
    pub low_pass_length: Option<usize>,
    pub low_pass_degree: Option<u32>,
    pub seasonal_jump: Option<usize>,
    pub seasonal_degree: Option<u32>,
    /// Seasonal window per period, in period order.
    pub seasonal_lengths: Option<Vec<usize>>,
    /// Box-Cox parameter; absent means no transform.
    pub lambda: Option<f64>,
    /// Number of MSTL global passes.
    pub iterations: Option<usize>,
}

impl FitOptions {
    /// STL parameters described by these options.
    pub fn stl_params(&self) -> Result<StlParams> {
        let mut params = StlParams::new().with_robust(self.robust.unwrap_or(false));

        if let Some(v) = self.trend_jump {
            params = params.with_trend_jump(v);
        }
        if let Some(v) = self.trend_length {
            params = params.with_trend_length(v);
        }
        if let Some(v) = self.trend_degree {
            params = params.with_trend_degree(Degree::parse(v, "trend degree")?);
        }
        if let Some(v) = self.inner_loops {
            params = params.with_inner_loops(v);
        }
        if let Some(v) = self.outer_loops {
            params = params.with_outer_loops(v);
        }
        if let Some(v) = self.low_pass_jump {
            params = params.with_low_pass_jump(v);
        }
        if let Some(v) = self.low_pass_length {
            params = params.with_low_pass_length(v);
        }
        if let Some(v) = self.low_pass_degree {
            params = params.with_low_pass_degree(Degree::parse(v, "low-pass degree")?);
        }
        if let Some(v) = self.seasonal_jump {
            params = params.with_seasonal_jump(v);
        }
        if let Some(v) = self.seasonal_degree {
            params = params.with_seasonal_degree(Degree::parse(v, "seasonal degree")?);
        }

        params.validate()?;
        Ok(params)
    }

    /// Build the MSTL decomposer for `periods`.
    pub fn to_mstl(&self, periods: &[usize]) -> Result<MSTL> {
        let mut mstl = MSTL::new(periods.to_vec()).with_stl_params(self.stl_params()?);

        if let Some(n) = self.iterations {
            mstl = mstl.with_iterations(n);
        }
        if let Some(lambda) = self.lambda {
            mstl = mstl.with_lambda(lambda);
        }
        if let Some(lengths) = &self.seasonal_lengths {
            mstl = mstl.with_seasonal_lengths(lengths.clone());
        }

        Ok(mstl)
    }
}
