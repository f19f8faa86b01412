// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
//   macd_line   = EMA(fast) - EMA(slow)
//   signal_line = EMA(macd_line, signal)
//   histogram   = macd_line - signal_line
//
// Because the EMAs are seeded at the first input value, every output entry
// is defined from index 0.

use crate::error::{Error, Result};
use crate::indicators::ema::ema;

/// The three MACD series, each aligned 1:1 with the input closes.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Compute MACD for `closes` with the given fast/slow/signal periods.
///
/// # Errors
/// `InvalidArgument` when any period is zero or `fast >= slow`.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> Result<MacdSeries> {
    if fast == 0 || slow == 0 || signal == 0 {
        return Err(Error::invalid_argument("macd periods must be > 0"));
    }
    if fast >= slow {
        return Err(Error::invalid_argument(
            "macd fast period must be shorter than slow period",
        ));
    }

    let fast_ema = ema(closes, fast)?;
    let slow_ema = ema(closes, slow)?;

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal_line = ema(&macd_line, signal)?;

    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(signal_line.iter())
        .map(|(m, s)| m - s)
        .collect();

    Ok(MacdSeries {
        macd: macd_line,
        signal: signal_line,
        histogram,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_bad_periods_are_invalid() {
        assert!(macd(&[1.0, 2.0], 0, 26, 9).is_err());
        assert!(macd(&[1.0, 2.0], 12, 0, 9).is_err());
        assert!(macd(&[1.0, 2.0], 12, 26, 0).is_err());
        assert!(macd(&[1.0, 2.0], 26, 12, 9).is_err());
        assert!(macd(&[1.0, 2.0], 12, 12, 9).is_err());
    }

    #[test]
    fn macd_alignment() {
        let closes: Vec<f64> = (1..=60).map(|x| x as f64).collect();
        let out = macd(&closes, 12, 26, 9).unwrap();
        assert_eq!(out.macd.len(), 60);
        assert_eq!(out.signal.len(), 60);
        assert_eq!(out.histogram.len(), 60);
        assert!(out.macd.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn macd_flat_input_is_zero() {
        let out = macd(&[100.0; 60], 12, 26, 9).unwrap();
        assert!(out.macd.iter().all(|v| v.abs() < 1e-10));
        assert!(out.signal.iter().all(|v| v.abs() < 1e-10));
        assert!(out.histogram.iter().all(|v| v.abs() < 1e-10));
    }

    #[test]
    fn macd_uptrend_is_positive() {
        // In a sustained uptrend the fast EMA sits above the slow EMA.
        let closes: Vec<f64> = (1..=100).map(|x| 100.0 + x as f64).collect();
        let out = macd(&closes, 12, 26, 9).unwrap();
        assert!(*out.macd.last().unwrap() > 0.0);
    }

    #[test]
    fn macd_histogram_is_macd_minus_signal() {
        let closes: Vec<f64> = (1..=50).map(|x| (x as f64 * 0.3).cos() * 4.0 + 50.0).collect();
        let out = macd(&closes, 12, 26, 9).unwrap();
        for i in 0..50 {
            let expected = out.macd[i] - out.signal[i];
            assert!((out.histogram[i] - expected).abs() < 1e-10, "index {i}");
        }
    }
}
