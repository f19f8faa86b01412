// =============================================================================
// Relative Strength Index (RSI) — trailing-average form
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an instrument is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Average the gains and the losses over the trailing `period`
//          deltas (plain arithmetic means, recomputed per window).
// Step 3 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// When avg_loss is exactly zero the division would blow up; RSI is defined
// as 100 in that case, which also covers the flat window (no movement in
// either direction counts as "no losses").
//
// Thresholds:  RSI > 70 => OVERBOUGHT,  RSI < 30 => OVERSOLD.
// =============================================================================

use crate::error::{Error, Result};

/// Compute the RSI series for `closes` with the given look-back `period`.
///
/// The result has the same length as `closes`; the first `period` entries are
/// NaN (each delta consumes one bar, so the first full window of `period`
/// deltas ends at index `period`).
///
/// # Errors
/// `InvalidArgument` when `period == 0`.
pub fn rsi(closes: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(Error::invalid_argument("rsi period must be > 0"));
    }

    let n = closes.len();
    let mut result = vec![f64::NAN; n];
    if n < period + 1 {
        return Ok(result);
    }

    // Deltas: deltas[i] is the change from closes[i] to closes[i + 1].
    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    for i in period..n {
        let window = &deltas[i - period..i];
        let (sum_gain, sum_loss) = window.iter().fold((0.0_f64, 0.0_f64), |(g, l), &d| {
            if d > 0.0 {
                (g + d, l)
            } else {
                (g, l + d.abs())
            }
        });

        let avg_gain = sum_gain / period as f64;
        let avg_loss = sum_loss / period as f64;

        result[i] = if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - 100.0 / (1.0 + rs)
        };
    }

    Ok(result)
}
