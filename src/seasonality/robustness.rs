//! Bisquare robustness weights for the STL outer loop.

use std::cmp::Ordering::Equal;

use crate::core::Real;

/// Bisquare weights from the residuals `y - fit`, written into `weights`.
///
/// The scale is six times the median absolute residual. Residuals within
/// 0.1% of the scale get weight 1, residuals beyond 99.9% of it get 0.
pub(crate) fn bisquare_weights<T: Real>(y: &[T], fit: &[T], weights: &mut [T]) {
    let n = y.len();
    if n == 0 {
        return;
    }

    for i in 0..n {
        weights[i] = (y[i] - fit[i]).abs();
    }

    let scale = T::lit(6.0) * median_inplace(&mut weights[..n]);
    let c9 = T::lit(0.999) * scale;
    let c1 = T::lit(0.001) * scale;

    for i in 0..n {
        let r = (y[i] - fit[i]).abs();
        weights[i] = if r <= c1 {
            T::one()
        } else if r <= c9 {
            let u = r / scale;
            let c = T::one() - u * u;
            c * c
        } else {
            T::zero()
        };
    }
}

/// Median via selection; reorders `vals`.
fn median_inplace<T: Real>(vals: &mut [T]) -> T {
    let n = vals.len();
    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 0 {
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);
        (lower + upper) / T::lit(2.0)
    } else {
        upper
    }
}
