//! # mstl
//!
//! Multiple Seasonal-Trend decomposition using LOESS.
//!
//! Splits a univariate series into a trend, one seasonal component per
//! period and a remainder. The single-period STL engine, the LOESS
//! smoother and the Box-Cox transform are exposed as building blocks.
//!
//! # Example
//!
//! ```
//! use mstl::{fit, FitOptions};
//!
//! let series: Vec<f32> = (0..84)
//!     .map(|i| 5.0 + (i % 7) as f32 + 0.5 * (i % 12) as f32)
//!     .collect();
//! let result = fit(&series, &[7, 12], &FitOptions::default()).unwrap();
//! let result = result.as_f32().unwrap();
//! assert_eq!(result.seasonal.len(), 2);
//! ```

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::needless_range_loop)]

pub mod api;
pub mod core;
pub mod error;
pub mod options;
pub mod seasonality;
pub mod smoothing;
pub mod transform;

pub use api::{fit, fit_f32, fit_f64, Decomposition, Series};
pub use error::{ErrorKind, MstlError, Result};
pub use options::FitOptions;
pub use seasonality::{MSTLResult, StlParams, STLResult, MSTL, STL};

pub mod prelude {
    pub use crate::api::{fit, Decomposition, Series};
    pub use crate::core::Real;
    pub use crate::error::{ErrorKind, MstlError, Result};
    pub use crate::options::FitOptions;
    pub use crate::seasonality::{MSTLResult, StlParams, STLResult, MSTL, STL};
    pub use crate::smoothing::Degree;
}
