// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the SMA.
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = close_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The series is seeded at the first input value, so every output entry is
// defined: EMA_0 == close_0.  This is the plain recursive form with no
// bias-correction term.

use crate::error::{Error, Result};

/// Compute the EMA series for `closes` with the given look-back `period`.
///
/// The result has the same length as `closes` and every entry is defined
/// (the recursion starts from the first close rather than an SMA seed).
///
/// # Errors
/// `InvalidArgument` when `period == 0`.
pub fn ema(closes: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(Error::invalid_argument("ema period must be > 0"));
    }

    let multiplier = 2.0 / (period + 1) as f64;
    let mut result = Vec::with_capacity(closes.len());

    let mut prev = match closes.first() {
        Some(&first) => first,
        None => return Ok(result),
    };
    result.push(prev);

    for &close in &closes[1..] {
        prev = close * multiplier + prev * (1.0 - multiplier);
        result.push(prev);
    }

    Ok(result)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ema_period_zero_is_invalid() {
        assert!(ema(&[1.0, 2.0], 0).is_err());
    }

    #[test]
    fn ema_empty_input() {
        assert!(ema(&[], 5).unwrap().is_empty());
    }

    #[test]
    fn ema_first_output_equals_first_input() {
        let closes = vec![42.5, 43.0, 41.0];
        let out = ema(&closes, 10).unwrap();
        assert_eq!(out.len(), 3);
        assert!((out[0] - 42.5).abs() < 1e-10);
    }

    #[test]
    fn ema_known_values() {
        // period 5 => multiplier = 1/3; recursion from the first value.
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let out = ema(&closes, 5).unwrap();
        assert_eq!(out.len(), 10);

        let mult = 2.0 / 6.0;
        let mut expected = closes[0];
        for (i, &c) in closes.iter().enumerate() {
            if i > 0 {
                expected = c * mult + expected * (1.0 - mult);
            }
            assert!((out[i] - expected).abs() < 1e-10, "index {i}");
        }
    }

    #[test]
    fn ema_constant_input_stays_constant() {
        let out = ema(&[100.0; 30], 12).unwrap();
        assert!(out.iter().all(|v| (v - 100.0).abs() < 1e-10));
    }
}
