// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Middle band = SMA(period); band half-width = num_std * rolling standard
// deviation over the same window; upper/lower = middle ± half-width.
//
// The standard deviation is the *sample* form (divisor period - 1), used
// consistently across the crate, so `period` must be at least 2.

use crate::error::{Error, Result};
use crate::indicators::sma::sma;

/// The three Bollinger band series, each aligned 1:1 with the input closes.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

impl BollingerBands {
    /// The most recent defined (upper, middle, lower) triple, if any.
    pub fn last_defined(&self) -> Option<(f64, f64, f64)> {
        let idx = self.middle.iter().rposition(|v| !v.is_nan())?;
        Some((self.upper[idx], self.middle[idx], self.lower[idx]))
    }
}

/// Compute Bollinger Bands for `closes`.
///
/// All three output series share the input length; the first `period - 1`
/// entries of each are NaN.
///
/// # Errors
/// `InvalidArgument` when `period < 2` (the sample standard deviation is
/// undefined for a single observation) or `num_std` is not finite.
pub fn bollinger(closes: &[f64], period: usize, num_std: f64) -> Result<BollingerBands> {
    if period < 2 {
        return Err(Error::invalid_argument("bollinger period must be >= 2"));
    }
    if !num_std.is_finite() {
        return Err(Error::invalid_argument("bollinger num_std must be finite"));
    }

    let middle = sma(closes, period)?;
    let n = closes.len();
    let mut upper = vec![f64::NAN; n];
    let mut lower = vec![f64::NAN; n];

    for i in (period - 1)..n {
        let window = &closes[i + 1 - period..=i];
        let mean = middle[i];
        let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
            / (period - 1) as f64;
        let half_width = num_std * variance.sqrt();
        upper[i] = mean + half_width;
        lower[i] = mean - half_width;
    }

    Ok(BollingerBands {
        upper,
        middle,
        lower,
    })
}
