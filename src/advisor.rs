// =============================================================================
// Investment advisor — rule-based recommendation engine
// =============================================================================
//
// Combines the latest close with indicator readings to emit one discrete
// recommendation plus the metrics that justify it.
//
// Decision precedence (evaluated top-to-bottom; first match wins):
//
//   1. BUY               — close > SMA20 AND close > SMA50 AND RSI < 70
//   2. SELL              — close < SMA20 AND close < SMA50 AND RSI > 30
//   3. BUY (Oversold)    — close < lower Bollinger band AND RSI < 30
//   4. SELL (Overbought) — close > upper Bollinger band AND RSI > 70
//   5. HOLD              — no rule fired
//
// With fewer than 50 bars the SMA-50 cannot be computed; its comparisons are
// treated as vacuously true and the result is flagged `degraded` so the
// caller can present the weaker confidence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::indicators::{bollinger, rsi, sma};
use crate::market_data::OhlcvSeries;

/// Minimum bars of history required for a recommendation.
pub const MIN_HISTORY: usize = 20;

const SMA_FAST: usize = 20;
const SMA_SLOW: usize = 50;
const RSI_PERIOD: usize = 14;
const BOLLINGER_NUM_STD: f64 = 2.0;
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

// =============================================================================
// Types
// =============================================================================

/// Discrete recommendation, refined with overbought/oversold context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Buy,
    Sell,
    BuyOversold,
    SellOverbought,
    Hold,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::BuyOversold => write!(f, "BUY (Oversold)"),
            Self::SellOverbought => write!(f, "SELL (Overbought)"),
            Self::Hold => write!(f, "HOLD"),
        }
    }
}

/// The indicator readings backing a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportingMetrics {
    pub current_price: f64,
    pub sma_20: f64,
    /// `None` below 50 bars of history (degraded-confidence mode).
    pub sma_50: Option<f64>,
    pub rsi_14: f64,
    pub bollinger_upper: f64,
    pub bollinger_lower: f64,
    /// Sample stddev of daily % returns, annualized over 252 trading days,
    /// in percent.
    pub volatility_annualized: f64,
    pub avg_volume_20d: f64,
    /// Latest volume relative to the 20-day average.
    pub volume_ratio: f64,
    /// 30-day price performance in percent (lookback clamped to history).
    pub perf_30d: f64,
    /// 90-day price performance in percent (lookback clamped to history).
    pub perf_90d: f64,
}

/// A complete recommendation: action, metrics, and templated reasoning.
/// Derived fresh on every call; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: Action,
    pub metrics: SupportingMetrics,
    /// Ordered reason sentences: trend direction, RSI zone, 30-day
    /// performance.
    pub narrative: Vec<String>,
    /// True when the SMA-50 comparisons were vacuous (< 50 bars).
    pub degraded: bool,
}

// =============================================================================
// Engine
// =============================================================================

/// Produce a recommendation for the latest bar of `series`.
///
/// # Errors
/// `InsufficientHistory` when the series holds fewer than [`MIN_HISTORY`]
/// bars.
pub fn recommend(series: &OhlcvSeries) -> Result<Recommendation> {
    let n = series.len();
    if n < MIN_HISTORY {
        return Err(Error::InsufficientHistory {
            required: MIN_HISTORY,
            actual: n,
        });
    }

    let closes = series.closes();
    let current_price = closes[n - 1];

    let sma_20 = sma(&closes, SMA_FAST)?[n - 1];
    let sma_50 = if n >= SMA_SLOW {
        Some(sma(&closes, SMA_SLOW)?[n - 1])
    } else {
        None
    };
    let rsi_14 = rsi(&closes, RSI_PERIOD)?[n - 1];

    let bands = bollinger(&closes, SMA_FAST, BOLLINGER_NUM_STD)?;
    let bollinger_upper = bands.upper[n - 1];
    let bollinger_lower = bands.lower[n - 1];

    let volumes = series.volumes();
    let window = &volumes[n - SMA_FAST..];
    let avg_volume_20d = window.iter().map(|v| *v as f64).sum::<f64>() / window.len() as f64;
    let volume_ratio = if avg_volume_20d > 0.0 {
        volumes[n - 1] as f64 / avg_volume_20d
    } else {
        0.0
    };

    let perf_30d = trailing_performance(&closes, 30);
    let perf_90d = trailing_performance(&closes, 90);

    let degraded = sma_50.is_none();
    let above_slow = sma_50.map_or(true, |s| current_price > s);
    let below_slow = sma_50.map_or(true, |s| current_price < s);

    let action = if current_price > sma_20 && above_slow && rsi_14 < 70.0 {
        Action::Buy
    } else if current_price < sma_20 && below_slow && rsi_14 > 30.0 {
        Action::Sell
    } else if current_price < bollinger_lower && rsi_14 < 30.0 {
        Action::BuyOversold
    } else if current_price > bollinger_upper && rsi_14 > 70.0 {
        Action::SellOverbought
    } else {
        Action::Hold
    };

    debug!(
        ticker = %series.ticker,
        action = %action,
        rsi = format!("{rsi_14:.2}"),
        sma_20 = format!("{sma_20:.2}"),
        degraded,
        "recommendation computed"
    );

    let narrative = build_narrative(
        action,
        rsi_14,
        perf_30d,
        bollinger_upper,
        bollinger_lower,
        degraded,
    );

    Ok(Recommendation {
        action,
        metrics: SupportingMetrics {
            current_price,
            sma_20,
            sma_50,
            rsi_14,
            bollinger_upper,
            bollinger_lower,
            volatility_annualized: annualized_volatility(&closes),
            avg_volume_20d,
            volume_ratio,
            perf_30d,
            perf_90d,
        },
        narrative,
        degraded,
    })
}

/// Percentage return over the trailing `lookback` bars, clamped to the
/// available history.
fn trailing_performance(closes: &[f64], lookback: usize) -> f64 {
    let lb = lookback.min(closes.len() - 1);
    let base = closes[closes.len() - 1 - lb];
    if base == 0.0 {
        return 0.0;
    }
    (closes[closes.len() - 1] / base - 1.0) * 100.0
}

/// Sample stddev of daily percentage returns, annualized, in percent.
fn annualized_volatility(closes: &[f64]) -> f64 {
    let returns: Vec<f64> = closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect();
    if returns.len() < 2 {
        return 0.0;
    }
    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance =
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (returns.len() - 1) as f64;
    variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt() * 100.0
}

/// Map the matched rule to its fixed reason sentences.
fn build_narrative(
    action: Action,
    rsi_14: f64,
    perf_30d: f64,
    upper: f64,
    lower: f64,
    degraded: bool,
) -> Vec<String> {
    let ma_phrase = if degraded {
        "its 20-day moving average"
    } else {
        "its 20-day and 50-day moving averages"
    };
    let perf_line = format!("The stock has returned {perf_30d:.1}% over the last 30 days.");

    match action {
        Action::Buy => vec![
            format!("Price is trading above {ma_phrase}, indicating a positive trend."),
            format!("RSI of {rsi_14:.1} suggests the stock is not yet overbought."),
            perf_line,
        ],
        Action::Sell => vec![
            format!("Price is trading below {ma_phrase}, indicating a negative trend."),
            format!("RSI of {rsi_14:.1} suggests the stock is not yet oversold."),
            perf_line,
        ],
        Action::BuyOversold => vec![
            format!("Price has closed below the lower Bollinger band at {lower:.2}."),
            format!("RSI of {rsi_14:.1} signals oversold conditions; this may be a value opportunity."),
            perf_line,
        ],
        Action::SellOverbought => vec![
            format!("Price has closed above the upper Bollinger band at {upper:.2}."),
            format!("RSI of {rsi_14:.1} signals overbought conditions; consider taking profits."),
            perf_line,
        ],
        Action::Hold => vec![
            format!("Price is showing mixed signals relative to {ma_phrase}."),
            format!("RSI of {rsi_14:.1} is in neutral territory."),
            perf_line,
        ],
    }
}
