//! Precomputed learning-rate schedule.

use crate::error::{require_positive, Error, Result};

/// Decreasing step sizes `1 / d_i`, where the denominators `d_i` are
/// evenly spaced from `min_denom` to `max_denom`.
///
/// Querying past the end of the schedule clamps to the last rate.
///
/// # Examples
///
/// ```
/// use u_landscape::gd::LearningRateSchedule;
///
/// let schedule = LearningRateSchedule::new(50.0, 200.0, 4).unwrap();
/// assert!((schedule.rate(0) - 1.0 / 50.0).abs() < 1e-15);
/// assert!((schedule.rate(3) - 1.0 / 200.0).abs() < 1e-15);
/// assert_eq!(schedule.rate(10), schedule.rate(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LearningRateSchedule {
    min_denom: f64,
    rates: Vec<f64>,
}

impl LearningRateSchedule {
    /// Builds a schedule of `length` rates.
    pub fn new(min_denom: f64, max_denom: f64, length: usize) -> Result<Self> {
        require_positive("min_denom", min_denom)?;
        require_positive("max_denom", max_denom)?;
        if max_denom < min_denom {
            return Err(Error::invalid(
                "max_denom",
                format!("must be >= min_denom ({min_denom}), got {max_denom}"),
            ));
        }

        let rates = (0..length)
            .map(|i| 1.0 / linspace_point(min_denom, max_denom, length, i))
            .collect();

        Ok(Self { min_denom, rates })
    }

    /// The rate for iteration `index`, clamped to the last defined rate.
    ///
    /// An empty schedule yields `1 / min_denom`.
    pub fn rate(&self, index: usize) -> f64 {
        match self.rates.last() {
            Some(&last) => self.rates.get(index).copied().unwrap_or(last),
            None => 1.0 / self.min_denom,
        }
    }

    /// Number of defined rates.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// All defined rates in order.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }
}

/// Point `i` of `n` evenly spaced samples over `[start, stop]`; the last
/// point is exactly `stop`.
fn linspace_point(start: f64, stop: f64, n: usize, i: usize) -> f64 {
    if n == 1 {
        return start;
    }
    if i == n - 1 {
        return stop;
    }
    start + i as f64 * (stop - start) / (n - 1) as f64
}
