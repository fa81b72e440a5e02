//! Variance-stabilising transforms applied before decomposition.
//!
//! # Example
//!
//! ```
//! use mstl::transform::{boxcox, inv_boxcox};
//!
//! let series = vec![1.0, 4.0, 9.0, 16.0];
//! let transformed = boxcox(&series, 0.5).unwrap();
//! let recovered = inv_boxcox(&transformed, 0.5);
//! assert!((recovered[3] - 16.0_f64).abs() < 1e-9);
//! ```

pub mod boxcox;

pub use boxcox::{boxcox, inv_boxcox, is_boxcox_suitable};
