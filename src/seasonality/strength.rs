//! Strength-of-component summaries shared by the STL and MSTL results.

use crate::core::Real;

/// `1 - Var(remainder) / Var(component + remainder)`, clamped to [0, 1].
///
/// Values close to 1 indicate that the component dominates the remainder.
pub(crate) fn component_strength<T: Real>(component: &[T], remainder: &[T]) -> T {
    let var_remainder = variance(remainder);
    let combined: Vec<T> = component
        .iter()
        .zip(remainder.iter())
        .map(|(&c, &r)| c + r)
        .collect();
    let var_combined = variance(&combined);

    if var_combined < T::lit(1e-10) {
        return T::zero();
    }

    (T::one() - var_remainder / var_combined)
        .max(T::zero())
        .min(T::one())
}

/// Sample variance.
pub(crate) fn variance<T: Real>(values: &[T]) -> T {
    let n = values.len();
    if n < 2 {
        return T::zero();
    }
    let mean = values.iter().fold(T::zero(), |acc, &v| acc + v) / T::from_index(n);
    values
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - mean) * (v - mean))
        / T::from_index(n - 1)
}
