//! Loess smoothing over equally spaced samples.
//!
//! Each evaluation fits a tricube-weighted polynomial to a window of
//! `length` neighbouring samples and reads the fit at the query position.
//! With `jump > 1` only every `jump`-th position (and always the last one)
//! is fitted; the positions in between are filled by linear interpolation.

use crate::core::Real;
use crate::error::{MstlError, Result};

/// Local polynomial degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Degree {
    /// Weighted local mean.
    Constant,
    /// Weighted local line.
    #[default]
    Linear,
    /// Weighted local parabola.
    Quadratic,
}

impl Degree {
    /// Parse a numeric degree, naming the offending option on failure.
    pub fn parse(degree: u32, name: &'static str) -> Result<Self> {
        match degree {
            0 => Ok(Degree::Constant),
            1 => Ok(Degree::Linear),
            2 => Ok(Degree::Quadratic),
            _ => Err(MstlError::InvalidDegree { name, degree }),
        }
    }
}

/// A Loess smoother with fixed window, degree and jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loess {
    length: usize,
    degree: Degree,
    jump: usize,
}

impl Loess {
    /// Create a smoother. The window is raised to at least 3 and made odd;
    /// the jump is raised to at least 1.
    pub fn new(length: usize, degree: Degree, jump: usize) -> Self {
        let mut length = length.max(3);
        if length % 2 == 0 {
            length += 1;
        }
        Self {
            length,
            degree,
            jump: jump.max(1),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    pub fn jump(&self) -> usize {
        self.jump
    }

    /// Smooth `y`, optionally scaling the kernel by per-sample robustness weights.
    pub fn smooth<T: Real>(&self, y: &[T], robustness: Option<&[T]>) -> Vec<T> {
        let mut fitted = vec![T::zero(); y.len()];
        let mut scratch = vec![T::zero(); y.len()];
        self.smooth_into(y, robustness, &mut fitted, &mut scratch);
        fitted
    }

    /// Smooth `y` into `fitted`, using `scratch` for kernel weights.
    ///
    /// `fitted` and `scratch` must be at least `y.len()` long.
    pub(crate) fn smooth_into<T: Real>(
        &self,
        y: &[T],
        robustness: Option<&[T]>,
        fitted: &mut [T],
        scratch: &mut [T],
    ) {
        let n = y.len();
        if n == 0 {
            return;
        }
        if n < 2 {
            fitted[0] = y[0];
            return;
        }

        let len = self.length;
        let step = self.jump.min(n - 1);
        let (mut left, mut right) = (0, n - 1);

        if len >= n {
            for i in (0..n).step_by(step) {
                fitted[i] = self
                    .fit_at(y, T::from_index(i), left, right, scratch, robustness)
                    .unwrap_or(y[i]);
            }
        } else if step == 1 {
            // The window slides once the query passes its centre.
            let half = (len + 1) / 2;
            right = len - 1;
            for i in 0..n {
                if i + 1 > half && right != n - 1 {
                    left += 1;
                    right += 1;
                }
                fitted[i] = self
                    .fit_at(y, T::from_index(i), left, right, scratch, robustness)
                    .unwrap_or(y[i]);
            }
        } else {
            let half = (len + 1) / 2;
            for i in (0..n).step_by(step) {
                let pos = i + 1;
                if pos < half {
                    left = 0;
                    right = len - 1;
                } else if pos >= n - half + 1 {
                    left = n - len;
                    right = n - 1;
                } else {
                    left = pos - half;
                    right = len + pos - half - 1;
                }
                fitted[i] = self
                    .fit_at(y, T::from_index(i), left, right, scratch, robustness)
                    .unwrap_or(y[i]);
            }
        }

        if step != 1 {
            for i in (0..n - step).step_by(step) {
                let delta = (fitted[i + step] - fitted[i]) / T::from_index(step);
                for j in i + 1..i + step {
                    fitted[j] = fitted[i] + delta * T::from_index(j - i);
                }
            }

            // Last stride-grid position; the tail beyond it is fitted directly.
            let k = ((n - 1) / step) * step;
            if k != n - 1 {
                fitted[n - 1] = self
                    .fit_at(y, T::from_index(n - 1), left, right, scratch, robustness)
                    .unwrap_or(y[n - 1]);
                if k != n - 2 {
                    let delta = (fitted[n - 1] - fitted[k]) / T::from_index(n - 1 - k);
                    for j in k + 1..n - 1 {
                        fitted[j] = fitted[k] + delta * T::from_index(j - k);
                    }
                }
            }
        }
    }

    /// Fit the local polynomial over `y[left..=right]` and evaluate it at `x`.
    ///
    /// `x` may lie outside the window (used for subseries extrapolation).
    /// Returns `None` when every kernel weight is zero.
    pub(crate) fn fit_at<T: Real>(
        &self,
        y: &[T],
        x: T,
        left: usize,
        right: usize,
        weights: &mut [T],
        robustness: Option<&[T]>,
    ) -> Option<T> {
        let n = y.len();
        let range = T::from_index(n) - T::one();
        let mut h = (x - T::from_index(left)).max(T::from_index(right) - x);
        if self.length > n {
            h = h + T::from_index((self.length - n) / 2);
        }

        let h9 = T::lit(0.999) * h;
        let h1 = T::lit(0.001) * h;

        let mut total = T::zero();
        for j in left..=right {
            weights[j] = T::zero();
            let r = (T::from_index(j) - x).abs();
            if r <= h9 {
                weights[j] = if r <= h1 { T::one() } else { tricube(r / h) };
                if let Some(rw) = robustness {
                    weights[j] = weights[j] * rw[j];
                }
                total = total + weights[j];
            }
        }

        if total <= T::zero() {
            return None;
        }

        for w in &mut weights[left..=right] {
            *w = *w / total;
        }

        if h > T::zero() {
            match self.degree {
                Degree::Constant => {}
                Degree::Linear => linear_kernel(x, left, right, range, weights),
                Degree::Quadratic => {
                    if !quadratic_kernel(x, h, left, right, weights) {
                        linear_kernel(x, left, right, range, weights);
                    }
                }
            }
        }

        let mut fit = T::zero();
        for j in left..=right {
            fit = fit + weights[j] * y[j];
        }
        Some(fit)
    }
}

#[inline]
fn tricube<T: Real>(u: T) -> T {
    let c = T::one() - u * u * u;
    c * c * c
}

/// Fold a local linear fit into normalised kernel weights.
///
/// Left unchanged when the weighted positions are too concentrated to
/// estimate a slope.
fn linear_kernel<T: Real>(x: T, left: usize, right: usize, range: T, weights: &mut [T]) {
    let mut center = T::zero();
    for j in left..=right {
        center = center + weights[j] * T::from_index(j);
    }

    let mut spread = T::zero();
    for j in left..=right {
        let d = T::from_index(j) - center;
        spread = spread + weights[j] * d * d;
    }

    if spread.sqrt() > T::lit(0.001) * range {
        let slope = (x - center) / spread;
        for j in left..=right {
            weights[j] = weights[j] * (slope * (T::from_index(j) - center) + T::one());
        }
    }
}

/// Fold a local quadratic fit into normalised kernel weights.
///
/// Solves the 3x3 weighted normal equations in coordinates scaled by the
/// bandwidth. Returns `false` (weights untouched) when the system is singular.
fn quadratic_kernel<T: Real>(x: T, h: T, left: usize, right: usize, weights: &mut [T]) -> bool {
    let mut m = [T::zero(); 5];
    for j in left..=right {
        let u = (T::from_index(j) - x) / h;
        let mut p = weights[j];
        for moment in m.iter_mut() {
            *moment = *moment + p;
            p = p * u;
        }
    }

    // Symmetric moment matrix [[m0, m1, m2], [m1, m2, m3], [m2, m3, m4]].
    let c00 = m[2] * m[4] - m[3] * m[3];
    let c01 = m[2] * m[3] - m[1] * m[4];
    let c02 = m[1] * m[3] - m[2] * m[2];
    let det = m[0] * c00 + m[1] * c01 + m[2] * c02;

    if det.abs() <= T::epsilon() * T::lit(1e3) {
        return false;
    }

    // First column of the inverse gives the equivalent kernel at u = 0.
    let (a0, a1, a2) = (c00 / det, c01 / det, c02 / det);
    for j in left..=right {
        let u = (T::from_index(j) - x) / h;
        weights[j] = weights[j] * (a0 + a1 * u + a2 * u * u);
    }
    true
}
