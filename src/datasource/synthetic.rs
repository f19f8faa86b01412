// =============================================================================
// Synthetic OHLCV generator
// =============================================================================
//
// Deterministic random-walk price paths, seeded from the ticker alone so the
// same symbol always produces the same series on every platform.
//
// Path construction:
//   1. Seed an RNG from a SHA-256 checksum of the ticker, reduced into a
//      fixed seed space; derive a constant per-ticker drift (±3%) from the
//      same checksum.
//   2. Draw a starting price uniformly from the configured range.
//   3. Daily return = Normal(0, volatility) + drift; closes are the running
//      cumulative product.
//   4. Open jitters around the close; high/low extend the body by a drawn
//      volatility band and are clamped so the range invariant always holds.
//   5. Volume is a uniform integer draw; a handful of reproducible "event"
//      days get stretched ranges and multiplied volume.
//
// Numeric failure (non-finite or non-positive values anywhere in the path)
// degrades to the empty series so chart/table consumers render a uniform
// empty state; only healthy series are cached.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::datasource::MarketDataSource;
use crate::error::{Error, Result};
use crate::market_data::{Bar, OhlcvSeries, SeriesCache};

/// Seed space for the RNG; the checksum is reduced modulo this constant.
const SEED_SPACE: u64 = 100;

/// Drift buckets: checksum % 7 maps to a constant daily drift of -3%..+3%.
const DRIFT_BUCKETS: u64 = 7;

/// Event days are only injected at indices at or beyond this offset, and
/// only when the series is long enough to leave room for them.
const EVENT_START: usize = 20;

/// Stable string-to-integer checksum: the first eight bytes of the SHA-256
/// digest, big-endian.  Unlike a language-default string hash this is fixed
/// across runs, platforms, and versions.
fn ticker_checksum(ticker: &str) -> u64 {
    let digest = Sha256::digest(ticker.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Deterministic synthetic market-data source.
pub struct SyntheticDataSource {
    config: GeneratorConfig,
    cache: SeriesCache,
}

impl SyntheticDataSource {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            cache: SeriesCache::new(),
        }
    }

    /// Build the full price path for `ticker`.  Returns the empty series on
    /// any numeric failure.
    fn generate(&self, ticker: &str, days: usize) -> OhlcvSeries {
        let checksum = ticker_checksum(ticker);
        let mut rng = StdRng::seed_from_u64(checksum % SEED_SPACE);
        let drift = ((checksum % DRIFT_BUCKETS) as f64 - 3.0) / 100.0;

        // Consecutive calendar days ending at the configured end date.
        let end = self
            .config
            .end_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let start = match end.checked_sub_days(Days::new(days as u64 - 1)) {
            Some(d) => d,
            None => {
                warn!(ticker = %ticker, days, "date index out of range");
                return OhlcvSeries::empty(ticker);
            }
        };
        let dates: Vec<NaiveDate> = start.iter_days().take(days).collect();

        let start_price = rng.random_range(self.config.price_min..self.config.price_max) as f64;

        let normal = match Normal::new(0.0, self.config.volatility) {
            Ok(n) => n,
            Err(e) => {
                warn!(ticker = %ticker, error = %e, "bad volatility, returning empty series");
                return OhlcvSeries::empty(ticker);
            }
        };

        // Close path: cumulative product of (1 + daily return).
        let mut closes = Vec::with_capacity(days);
        let mut price = start_price;
        for _ in 0..days {
            let daily_return = normal.sample(&mut rng) + drift;
            price *= 1.0 + daily_return;
            closes.push(price);
        }

        // Derive open/high/low/volume per bar.
        let mut bars = Vec::with_capacity(days);
        for (date, &close) in dates.iter().zip(closes.iter()) {
            let open = close * (1.0 + rng.random_range(-0.01..0.01));
            let band = close * rng.random_range(0.005..0.02);
            let mut bar = Bar {
                date: *date,
                open,
                high: open.max(close) + band,
                low: open.min(close) - band,
                close,
                volume: rng.random_range(self.config.volume_min..self.config.volume_max),
            };
            // The jitter alone does not guarantee the range invariant.
            bar.enforce_range();
            bars.push(bar);
        }

        self.inject_events(&mut rng, &mut bars);

        let series = OhlcvSeries::new(ticker, bars);
        if !series.all_bars_valid() {
            warn!(ticker = %ticker, "numeric failure in generated path, returning empty series");
            return OhlcvSeries::empty(ticker);
        }
        series
    }

    /// Stretch a few reproducibly chosen days into high-volatility events.
    fn inject_events(&self, rng: &mut StdRng, bars: &mut [Bar]) {
        let count = self.config.event_days;
        if count == 0 || bars.len() <= EVENT_START + count {
            return;
        }

        let mut chosen: Vec<usize> = Vec::with_capacity(count);
        while chosen.len() < count {
            let idx = rng.random_range(EVENT_START..bars.len());
            if !chosen.contains(&idx) {
                chosen.push(idx);
            }
        }
        chosen.sort_unstable();

        for idx in chosen {
            let bar = &mut bars[idx];
            bar.high *= rng.random_range(1.05..1.15);
            bar.low *= rng.random_range(0.85..0.95);
            bar.volume = (bar.volume as f64 * rng.random_range(2.0..4.0)) as u64;
            bar.enforce_range();
        }
    }
}

impl MarketDataSource for SyntheticDataSource {
    fn series(&self, ticker: &str, days: usize) -> Result<Arc<OhlcvSeries>> {
        if days == 0 {
            return Err(Error::invalid_argument("days must be > 0"));
        }

        if let Some(hit) = self.cache.get(ticker) {
            debug!(ticker = %ticker, bars = hit.len(), "series cache hit");
            return Ok(hit);
        }

        let series = self.generate(ticker, days);
        debug!(ticker = %ticker, bars = series.len(), "series generated");

        if series.is_empty() {
            // Degraded result: hand it back but leave the cache untouched.
            return Ok(Arc::new(series));
        }
        Ok(self.cache.insert(ticker, series))
    }
}

impl Default for SyntheticDataSource {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn pinned_config() -> GeneratorConfig {
        GeneratorConfig {
            end_date: NaiveDate::from_ymd_opt(2025, 4, 30),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn checksum_is_stable_and_ticker_sensitive() {
        assert_eq!(ticker_checksum("AAPL"), ticker_checksum("AAPL"));
        assert_ne!(ticker_checksum("AAPL"), ticker_checksum("MSFT"));
    }

    #[test]
    fn zero_days_is_invalid() {
        let source = SyntheticDataSource::new(pinned_config());
        assert!(source.series("AAPL", 0).is_err());
    }

    #[test]
    fn deterministic_across_sources() {
        let a = SyntheticDataSource::new(pinned_config());
        let b = SyntheticDataSource::new(pinned_config());
        let series_a = a.series("AAPL", 180).unwrap();
        let series_b = b.series("AAPL", 180).unwrap();
        assert_eq!(*series_a, *series_b);
    }

    #[test]
    fn repeated_calls_hit_the_cache() {
        let source = SyntheticDataSource::new(pinned_config());
        let first = source.series("TSLA", 90).unwrap();
        let second = source.series("TSLA", 90).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn unknown_tickers_always_succeed() {
        let source = SyntheticDataSource::new(pinned_config());
        let series = source.series("ZZZZTOP", 60).unwrap();
        assert_eq!(series.len(), 60);
    }

    #[test]
    fn calendar_index_has_requested_length_and_end() {
        let source = SyntheticDataSource::new(pinned_config());
        let series = source.series("AAPL", 180).unwrap();
        assert_eq!(series.len(), 180);

        let end = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
        assert_eq!(series.bars.last().unwrap().date, end);
        assert_eq!(
            series.bars.first().unwrap().date,
            end.checked_sub_days(Days::new(179)).unwrap()
        );

        // Consecutive calendar days, no gaps.
        for pair in series.bars.windows(2) {
            assert_eq!(
                pair[1].date,
                pair[0].date.checked_add_days(Days::new(1)).unwrap()
            );
        }
    }

    #[test]
    fn range_invariant_holds_for_every_bar() {
        let source = SyntheticDataSource::new(pinned_config());
        for ticker in ["AAPL", "MSFT", "GOOGL", "NVDA", "JPM", "XOM"] {
            let series = source.series(ticker, 250).unwrap();
            assert!(!series.is_empty());
            for bar in &series.bars {
                assert!(bar.high >= bar.open.max(bar.close), "{ticker} {bar:?}");
                assert!(bar.low <= bar.open.min(bar.close), "{ticker} {bar:?}");
                assert!(bar.is_valid(), "{ticker} {bar:?}");
            }
        }
    }

    #[test]
    fn volumes_stay_in_configured_range_outside_events() {
        let cfg = GeneratorConfig {
            event_days: 0,
            ..pinned_config()
        };
        let source = SyntheticDataSource::new(cfg);
        let series = source.series("KO", 120).unwrap();
        for bar in &series.bars {
            assert!((100..10_000).contains(&bar.volume), "volume {}", bar.volume);
        }
    }

    #[test]
    fn short_series_skips_event_injection() {
        // 20 bars leaves no room for events beyond the start offset; the
        // generator must still succeed.
        let source = SyntheticDataSource::new(pinned_config());
        let series = source.series("PEP", 20).unwrap();
        assert_eq!(series.len(), 20);
    }

    #[test]
    fn bad_volatility_degrades_to_empty_series() {
        let cfg = GeneratorConfig {
            volatility: f64::NAN,
            ..pinned_config()
        };
        let source = SyntheticDataSource::new(cfg);
        let series = source.series("AAPL", 30).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.ticker, "AAPL");
    }

    #[test]
    fn sma_over_generated_series_has_expected_window() {
        let source = SyntheticDataSource::new(pinned_config());
        let series = source.series("AAPL", 180).unwrap();
        let out = crate::indicators::sma(&series.closes(), 20).unwrap();
        assert_eq!(out.iter().filter(|v| v.is_nan()).count(), 19);
        assert_eq!(out.iter().filter(|v| !v.is_nan()).count(), 161);
    }
}
