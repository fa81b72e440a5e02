//! Numeric element type and input validation.

mod real;
mod validator;

pub use real::Real;
pub use validator::{Validator, MIN_SERIES_LEN};
