// =============================================================================
// OHLCV series
// =============================================================================
//
// An ordered run of daily bars for one ticker, ascending by date.  The empty
// series (zero bars, ticker preserved) is a valid state: it is what a data
// source returns when numeric generation fails, and downstream consumers
// treat it as "nothing to render" rather than an error.

use serde::{Deserialize, Serialize};

use crate::market_data::Bar;

/// An immutable daily OHLCV time series for a single ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvSeries {
    pub ticker: String,
    pub bars: Vec<Bar>,
}

impl OhlcvSeries {
    /// Build a series from pre-sorted bars.
    pub fn new(ticker: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            ticker: ticker.into(),
            bars,
        }
    }

    /// The degraded empty state with the same column shape.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            bars: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Closing prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Traded volumes, oldest first.
    pub fn volumes(&self) -> Vec<u64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// The most recent closing price, if any bars exist.
    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    /// True when every bar passes [`Bar::is_valid`].
    pub fn all_bars_valid(&self) -> bool {
        self.bars.iter().all(Bar::is_valid)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(day: u32, close: f64) -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn accessors() {
        let series = OhlcvSeries::new("AAPL", vec![bar(1, 100.0), bar(2, 101.0)]);
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert_eq!(series.closes(), vec![100.0, 101.0]);
        assert_eq!(series.volumes(), vec![1_000, 1_000]);
        assert_eq!(series.last_close(), Some(101.0));
        assert!(series.all_bars_valid());
    }

    #[test]
    fn empty_state_is_checkable() {
        let series = OhlcvSeries::empty("XYZ");
        assert!(series.is_empty());
        assert_eq!(series.ticker, "XYZ");
        assert_eq!(series.last_close(), None);
        assert!(series.closes().is_empty());
        assert!(series.all_bars_valid());
    }
}
