//! Energy landscapes.

use std::f64::consts::PI;

/// A scalar objective with an analytic derivative.
///
/// Every runner reads the objective through this trait. Both methods must
/// be pure: the same `theta` always yields the same value. Non-finite
/// outputs are legal values and are handled by the runners.
pub trait Landscape: Send + Sync {
    /// Evaluates `H(theta)`.
    fn evaluate(&self, theta: f64) -> f64;

    /// Evaluates `dH/dtheta`.
    fn gradient(&self, theta: f64) -> f64;
}

/// The rippled double well `H(theta) = theta^4 - 8 theta^2 - 2 cos(4 pi theta)`.
///
/// Two deep wells near `theta = ±2` are overlaid with a cosine ripple of
/// period `1/2`, which scatters shallow local minima across the domain.
///
/// # Examples
///
/// ```
/// use u_landscape::{DoubleWell, Landscape};
///
/// let h = DoubleWell;
/// assert!((h.evaluate(-1.0) - (-9.0)).abs() < 1e-12);
/// assert!((h.gradient(-1.0) - 12.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoubleWell;

impl Landscape for DoubleWell {
    #[inline]
    fn evaluate(&self, theta: f64) -> f64 {
        theta.powi(4) - 8.0 * theta * theta - 2.0 * (4.0 * PI * theta).cos()
    }

    #[inline]
    fn gradient(&self, theta: f64) -> f64 {
        4.0 * theta.powi(3) - 16.0 * theta + 8.0 * PI * (4.0 * PI * theta).sin()
    }
}

/// Locates the lowest strict local minimum of `landscape` on an evenly
/// spaced grid of `points` samples over `[lo, hi]`.
///
/// Only interior grid points are candidates: a point qualifies when its
/// energy is strictly below both neighbours. Returns `(theta, H(theta))`,
/// or `None` when the grid has fewer than three points, the bounds are
/// not ordered, or no interior minimum exists.
pub fn grid_minimum<L: Landscape + ?Sized>(
    landscape: &L,
    lo: f64,
    hi: f64,
    points: usize,
) -> Option<(f64, f64)> {
    if points < 3 || lo.is_nan() || hi.is_nan() || lo >= hi {
        return None;
    }

    let step = (hi - lo) / (points - 1) as f64;
    let samples: Vec<(f64, f64)> = (0..points)
        .map(|i| {
            let theta = if i == points - 1 {
                hi
            } else {
                lo + i as f64 * step
            };
            (theta, landscape.evaluate(theta))
        })
        .collect();

    samples
        .windows(3)
        .filter(|w| w[1].1 < w[0].1 && w[1].1 < w[2].1)
        .map(|w| w[1])
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
