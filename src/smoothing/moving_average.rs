//! Running-sum moving averages used by the STL low-pass filter.

use crate::core::Real;

/// Trailing moving average over every full window.
///
/// Returns `series.len() - window + 1` values, or nothing when the window
/// does not fit.
pub fn moving_average<T: Real>(series: &[T], window: usize) -> Vec<T> {
    let n = series.len();
    if window == 0 || window > n {
        return Vec::new();
    }

    let flen = T::from_index(window);
    let mut result = Vec::with_capacity(n - window + 1);

    let mut sum = series[..window].iter().fold(T::zero(), |acc, &v| acc + v);
    result.push(sum / flen);

    // Slide the window down the array.
    for k in window..n {
        sum = sum - series[k - window] + series[k];
        result.push(sum / flen);
    }

    result
}

/// Moving averages of length `period`, `period` and 3 applied in turn.
///
/// An input of length `n + 2 * period` yields `n` values.
pub fn low_pass_average<T: Real>(series: &[T], period: usize) -> Vec<T> {
    let first = moving_average(series, period);
    let second = moving_average(&first, period);
    moving_average(&second, 3)
}
