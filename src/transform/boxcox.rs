//! Box-Cox power transformation.
//!
//! Stabilises the variance of a positive series before decomposition.

use crate::core::Real;
use crate::error::{MstlError, Result};

/// Lambdas this close to zero use the log form.
const LOG_THRESHOLD: f64 = 1e-10;

/// Apply Box-Cox transformation with a given lambda.
///
/// For lambda != 0: y = (x^lambda - 1) / lambda
/// For lambda == 0: y = ln(x)
///
/// # Errors
/// Negative samples are rejected for every lambda. Zero is accepted only
/// for lambda > 0, where the power form is defined at the origin.
pub fn boxcox<T: Real>(series: &[T], lambda: f64) -> Result<Vec<T>> {
    if let Some(index) = first_invalid(series, lambda) {
        return Err(MstlError::NonPositiveValue {
            index,
            value: series[index].as_f64(),
        });
    }

    let lam = T::lit(lambda);
    Ok(series
        .iter()
        .map(|&x| {
            if lambda.abs() < LOG_THRESHOLD {
                x.ln()
            } else {
                (x.powf(lam) - T::one()) / lam
            }
        })
        .collect())
}

/// Inverse Box-Cox transformation.
///
/// For lambda != 0: x = (lambda * y + 1)^(1/lambda)
/// For lambda == 0: x = exp(y)
///
/// The decomposition never applies this itself; it is offered for callers
/// that want components back on the original scale.
pub fn inv_boxcox<T: Real>(transformed: &[T], lambda: f64) -> Vec<T> {
    let lam = T::lit(lambda);
    transformed
        .iter()
        .map(|&y| {
            if lambda.abs() < LOG_THRESHOLD {
                y.exp()
            } else {
                let val = lam * y + T::one();
                if val <= T::zero() {
                    T::nan()
                } else {
                    val.powf(T::one() / lam)
                }
            }
        })
        .collect()
}

/// Check if data is suitable for Box-Cox transformation with `lambda`.
pub fn is_boxcox_suitable<T: Real>(series: &[T], lambda: f64) -> bool {
    !series.is_empty() && first_invalid(series, lambda).is_none()
}

fn first_invalid<T: Real>(series: &[T], lambda: f64) -> Option<usize> {
    let allow_zero = lambda >= LOG_THRESHOLD;
    series
        .iter()
        .position(|&x| x < T::zero() || (x == T::zero() && !allow_zero))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    // ==================== boxcox ====================

    #[test]
    fn boxcox_lambda_1() {
        // Lambda = 1: y = x - 1
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = boxcox(&series, 1.0).unwrap();

        for (i, &x) in series.iter().enumerate() {
            assert_relative_eq!(result[i], x - 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn boxcox_lambda_0() {
        // Lambda = 0: y = ln(x)
        let series = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = boxcox(&series, 0.0).unwrap();

        for (i, &x) in series.iter().enumerate() {
            assert_relative_eq!(result[i], x.ln(), epsilon = 1e-10);
        }
    }

    #[test]
    fn boxcox_lambda_half() {
        // Lambda = 0.5: y = 2 (sqrt(x) - 1)
        let series = vec![0.0_f32, 1.0, 4.0, 9.0];
        let result = boxcox(&series, 0.5).unwrap();

        assert_relative_eq!(result[0], -2.0, epsilon = 1e-6);
        assert_relative_eq!(result[1], 0.0, epsilon = 1e-6);
        assert_relative_eq!(result[2], 2.0, epsilon = 1e-6);
        assert_relative_eq!(result[3], 4.0, epsilon = 1e-6);
    }

    #[test]
    fn boxcox_negative_values() {
        let err = boxcox(&[1.0, 2.0, -1.0, 3.0], 0.5).unwrap_err();
        assert_eq!(
            err,
            MstlError::NonPositiveValue {
                index: 2,
                value: -1.0
            }
        );
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn boxcox_zero_with_log() {
        let err = boxcox(&[1.0, 0.0, 2.0], 0.0).unwrap_err();
        assert_eq!(err, MstlError::NonPositiveValue { index: 1, value: 0.0 });
    }

    #[test]
    fn boxcox_empty() {
        let result: Vec<f64> = boxcox(&[], 1.0).unwrap();
        assert!(result.is_empty());
    }

    // ==================== inv_boxcox ====================

    #[test]
    fn inv_boxcox_roundtrip() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        for lambda in [0.0, 0.5, 1.0] {
            let transformed = boxcox(&series, lambda).unwrap();
            let recovered = inv_boxcox(&transformed, lambda);

            for (orig, rec) in series.iter().zip(recovered.iter()) {
                assert_relative_eq!(orig, rec, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn inv_boxcox_outside_range_is_nan() {
        let recovered = inv_boxcox(&[-3.0_f64], 0.5);
        assert!(recovered[0].is_nan());
    }

    // ==================== is_boxcox_suitable ====================

    #[test]
    fn is_suitable_positive() {
        assert!(is_boxcox_suitable(&[1.0, 2.0, 3.0], 0.0));
    }

    #[test]
    fn is_suitable_with_zero() {
        assert!(!is_boxcox_suitable(&[0.0, 1.0, 2.0], 0.0));
        assert!(is_boxcox_suitable(&[0.0, 1.0, 2.0], 0.5));
    }

    #[test]
    fn is_suitable_with_negative() {
        assert!(!is_boxcox_suitable(&[-1.0, 1.0, 2.0], 0.5));
    }

    #[test]
    fn is_suitable_empty() {
        assert!(!is_boxcox_suitable::<f64>(&[], 1.0));
    }
}
