//! Smoothing primitives shared by the decomposers.
//!
//! - [`Loess`]: local polynomial regression over index-spaced samples
//! - [`moving_average`] / [`low_pass_average`]: running means for the STL low-pass filter

mod loess;
mod moving_average;

pub use loess::{Degree, Loess};
pub use moving_average::{low_pass_average, moving_average};
