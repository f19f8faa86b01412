// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the core technical indicators.
// Every windowed function returns a vector aligned 1:1 with its input, with
// NaN marking entries whose rolling window is not yet full, and every
// function validates its period up front so callers get an explicit
// `InvalidArgument` instead of a silently empty result.
//
// `IndicatorKind` is the closed set of indicators a consumer can toggle;
// each variant carries its parameters and dispatches to the matching pure
// function.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use atr::atr;
pub use bollinger::{bollinger, BollingerBands};
pub use ema::ema;
pub use macd::{macd, MacdSeries};
pub use rsi::rsi;
pub use sma::sma;

use serde::Serialize;

use crate::error::Result;
use crate::market_data::OhlcvSeries;

// =============================================================================
// IndicatorSeries
// =============================================================================

/// A named numeric series aligned 1:1 with the bars it was computed from.
///
/// Undefined entries (insufficient window history) are `f64::NAN`; they
/// serialize as JSON `null`, which is what the chart consumers expect for a
/// gap.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl IndicatorSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of defined (non-NaN) entries.
    pub fn defined_len(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }

    /// The most recent defined value, if any.
    pub fn last_defined(&self) -> Option<f64> {
        self.values.iter().rev().find(|v| !v.is_nan()).copied()
    }
}

// =============================================================================
// IndicatorKind — tagged variant set with per-variant dispatch
// =============================================================================

/// The closed set of indicators the presentation layers can request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorKind {
    Sma { period: usize },
    Ema { period: usize },
    Rsi { period: usize },
    Bollinger { period: usize, num_std: f64 },
    Macd { fast: usize, slow: usize, signal: usize },
    Atr { period: usize },
}

impl IndicatorKind {
    /// Display label, e.g. `SMA(20)` or `MACD(12,26,9)`.
    pub fn label(&self) -> String {
        match self {
            Self::Sma { period } => format!("SMA({period})"),
            Self::Ema { period } => format!("EMA({period})"),
            Self::Rsi { period } => format!("RSI({period})"),
            Self::Bollinger { period, num_std } => format!("BB({period},{num_std})"),
            Self::Macd { fast, slow, signal } => format!("MACD({fast},{slow},{signal})"),
            Self::Atr { period } => format!("ATR({period})"),
        }
    }

    /// Compute this indicator over `series`.
    ///
    /// Single-line indicators return one series; Bollinger and MACD return
    /// their three constituent lines.  Every returned series has the same
    /// length as `series`.
    pub fn compute(&self, series: &OhlcvSeries) -> Result<Vec<IndicatorSeries>> {
        let closes = series.closes();
        match *self {
            Self::Sma { period } => Ok(vec![IndicatorSeries::new(
                format!("sma_{period}"),
                sma(&closes, period)?,
            )]),
            Self::Ema { period } => Ok(vec![IndicatorSeries::new(
                format!("ema_{period}"),
                ema(&closes, period)?,
            )]),
            Self::Rsi { period } => Ok(vec![IndicatorSeries::new(
                format!("rsi_{period}"),
                rsi(&closes, period)?,
            )]),
            Self::Bollinger { period, num_std } => {
                let bands = bollinger(&closes, period, num_std)?;
                Ok(vec![
                    IndicatorSeries::new("bb_upper", bands.upper),
                    IndicatorSeries::new("bb_middle", bands.middle),
                    IndicatorSeries::new("bb_lower", bands.lower),
                ])
            }
            Self::Macd { fast, slow, signal } => {
                let out = macd(&closes, fast, slow, signal)?;
                Ok(vec![
                    IndicatorSeries::new("macd", out.macd),
                    IndicatorSeries::new("macd_signal", out.signal),
                    IndicatorSeries::new("macd_histogram", out.histogram),
                ])
            }
            Self::Atr { period } => Ok(vec![IndicatorSeries::new(
                format!("atr_{period}"),
                atr(&series.bars, period)?,
            )]),
        }
    }
}
