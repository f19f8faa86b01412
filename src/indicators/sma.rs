// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Arithmetic mean of the trailing `period` closes, computed with a rolling
// sum.  Output is aligned 1:1 with the input: the first `period - 1` entries
// are NaN because the window is not yet full.

use crate::error::{Error, Result};

/// Compute the SMA series for `closes` with the given look-back `period`.
///
/// The result has the same length as `closes`; entries before the first full
/// window are `f64::NAN`.  When the input is shorter than `period` every
/// entry is NaN.
///
/// # Errors
/// `InvalidArgument` when `period == 0`.
pub fn sma(closes: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(Error::invalid_argument("sma period must be > 0"));
    }

    let mut result = vec![f64::NAN; closes.len()];
    if closes.len() < period {
        return Ok(result);
    }

    let mut sum: f64 = closes[..period].iter().sum();
    result[period - 1] = sum / period as f64;

    for i in period..closes.len() {
        sum += closes[i] - closes[i - period];
        result[i] = sum / period as f64;
    }

    Ok(result)
}
