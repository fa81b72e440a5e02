//! Error types for the mstl library.

use thiserror::Error;

/// Result type alias for decomposition operations.
pub type Result<T> = std::result::Result<T, MstlError>;

/// Broad category of a [`MstlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The series or the period set is unusable.
    Validation,
    /// A smoothing parameter is out of range.
    Configuration,
    /// The variance transform is undefined for the input.
    Domain,
}

/// Errors that can occur during decomposition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MstlError {
    /// Series is shorter than the smallest usable window.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// No seasonal period was supplied.
    #[error("periods must not be empty")]
    EmptyPeriods,

    /// Period outside `2..len`.
    #[error("invalid period {period}: must be at least 2 and less than the series length {len}")]
    InvalidPeriod { period: usize, len: usize },

    /// The same period was requested twice.
    #[error("duplicate period {0}")]
    DuplicatePeriod(usize),

    /// Series contains NaN or infinity.
    #[error("non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    /// A per-period list does not match the number of periods.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Window length is even or shorter than 3.
    #[error("{name} must be odd and at least 3, got {length}")]
    InvalidWindowLength { name: &'static str, length: usize },

    /// Polynomial degree outside {0, 1, 2}.
    #[error("{name} must be 0, 1 or 2, got {degree}")]
    InvalidDegree { name: &'static str, degree: u32 },

    /// Jump of zero.
    #[error("{name} must be at least 1")]
    InvalidJump { name: &'static str },

    /// Box-Cox parameter outside [0, 1] or not finite.
    #[error("lambda must be between 0 and 1, got {0}")]
    InvalidLambda(f64),

    /// Box-Cox input outside the transform's domain.
    #[error("box-cox is undefined for value {value} at index {index}")]
    NonPositiveValue { index: usize, value: f64 },
}

impl MstlError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MstlError::InsufficientData { .. }
            | MstlError::EmptyPeriods
            | MstlError::InvalidPeriod { .. }
            | MstlError::DuplicatePeriod(_)
            | MstlError::NonFiniteValue { .. }
            | MstlError::DimensionMismatch { .. } => ErrorKind::Validation,
            MstlError::InvalidWindowLength { .. }
            | MstlError::InvalidDegree { .. }
            | MstlError::InvalidJump { .. }
            | MstlError::InvalidLambda(_) => ErrorKind::Configuration,
            MstlError::NonPositiveValue { .. } => ErrorKind::Domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = MstlError::InsufficientData { needed: 3, got: 2 };
        assert_eq!(err.to_string(), "insufficient data: need at least 3, got 2");

        let err = MstlError::InvalidPeriod { period: 1, len: 30 };
        assert_eq!(
            err.to_string(),
            "invalid period 1: must be at least 2 and less than the series length 30"
        );

        let err = MstlError::InvalidWindowLength {
            name: "trend length",
            length: 12,
        };
        assert_eq!(err.to_string(), "trend length must be odd and at least 3, got 12");

        let err = MstlError::InvalidDegree {
            name: "seasonal degree",
            degree: 3,
        };
        assert_eq!(err.to_string(), "seasonal degree must be 0, 1 or 2, got 3");

        let err = MstlError::NonPositiveValue {
            index: 4,
            value: -1.0,
        };
        assert_eq!(err.to_string(), "box-cox is undefined for value -1 at index 4");
    }

    #[test]
    fn errors_are_categorised() {
        assert_eq!(MstlError::DuplicatePeriod(7).kind(), ErrorKind::Validation);
        assert_eq!(MstlError::EmptyPeriods.kind(), ErrorKind::Validation);
        assert_eq!(
            MstlError::InvalidJump { name: "trend jump" }.kind(),
            ErrorKind::Configuration
        );
        assert_eq!(MstlError::InvalidLambda(2.0).kind(), ErrorKind::Configuration);
        assert_eq!(
            MstlError::NonPositiveValue {
                index: 0,
                value: 0.0
            }
            .kind(),
            ErrorKind::Domain
        );
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = MstlError::EmptyPeriods;
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
