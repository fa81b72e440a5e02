//! Seasonal-trend decomposition.
//!
//! This module provides the decomposition engine:
//! - STL: Seasonal-Trend decomposition using LOESS for one period
//! - MSTL: Multiple seasonal-trend decomposition for several periods
//! - SeasonalExtractor: the cycle-subseries and low-pass step shared by both

mod extractor;
mod mstl;
mod params;
mod robustness;
mod stl;
mod strength;

pub use extractor::SeasonalExtractor;
pub use mstl::{MSTLResult, MSTL};
pub use params::{StlConfig, StlParams};
pub use stl::{STLResult, STL};
