// =============================================================================
// Average True Range (ATR)
// =============================================================================
//
// ATR measures volatility by decomposing the entire range of a bar.
//
// True Range (TR) per bar:
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// The first bar has no previous close, so its TR degenerates to H - L.
// ATR is the trailing simple mean of TR over `period`, aligned 1:1 with the
// input: the first `period - 1` entries are NaN.

use crate::error::{Error, Result};
use crate::indicators::sma::sma;
use crate::market_data::Bar;

/// Compute the ATR series for `bars` with the given look-back `period`.
///
/// # Errors
/// `InvalidArgument` when `period == 0`.
pub fn atr(bars: &[Bar], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(Error::invalid_argument("atr period must be > 0"));
    }

    let mut true_ranges = Vec::with_capacity(bars.len());
    for (i, bar) in bars.iter().enumerate() {
        let hl = bar.high - bar.low;
        let tr = if i == 0 {
            hl
        } else {
            let prev_close = bars[i - 1].close;
            let hc = (bar.high - prev_close).abs();
            let lc = (bar.low - prev_close).abs();
            hl.max(hc).max(lc)
        };
        true_ranges.push(tr);
    }

    sma(&true_ranges, period)
}
