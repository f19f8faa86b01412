// =============================================================================
// Daily OHLCV bar
// =============================================================================
//
// One calendar (or business) day of price action.  The range invariant
//
//   low <= min(open, close)  and  high >= max(open, close)
//
// is never assumed from raw draws or file rows; callers run `enforce_range`
// after construction so the invariant holds for every bar that leaves a data
// source.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    /// Clamp `high` and `low` so the range invariant holds.
    ///
    /// Applied unconditionally after generation — the random jitter that
    /// produced `high`/`low` does not guarantee the ordering on its own.
    pub fn enforce_range(&mut self) {
        let body_high = self.open.max(self.close);
        let body_low = self.open.min(self.close);
        if self.high < body_high {
            self.high = body_high;
        }
        if self.low > body_low {
            self.low = body_low;
        }
    }

    /// True when every price field is finite and positive, volume is
    /// non-zero, and the range invariant holds.
    pub fn is_valid(&self) -> bool {
        let prices = [self.open, self.high, self.low, self.close];
        prices.iter().all(|p| p.is_finite() && *p > 0.0)
            && self.volume > 0
            && self.high >= self.open.max(self.close)
            && self.low <= self.open.min(self.close)
    }
}
