// =============================================================================
// Market data sources
// =============================================================================
//
// Two interchangeable producers of `OhlcvSeries` sit behind one trait: the
// deterministic synthetic generator and the file-backed CSV reader.  The
// indicator library and the advisor never learn which one produced a series.

pub mod spreadsheet;
pub mod synthetic;

pub use spreadsheet::CsvDataSource;
pub use synthetic::SyntheticDataSource;

use std::sync::Arc;

use crate::error::Result;
use crate::market_data::OhlcvSeries;

/// A provider of daily OHLCV series, keyed by ticker.
///
/// Implementations own an explicit [`crate::market_data::SeriesCache`]: the
/// first request for a ticker materialises the series, later requests hand
/// back the identical `Arc`.
pub trait MarketDataSource {
    /// Fetch (or lazily create) the series for `ticker` covering `days`
    /// daily bars.
    ///
    /// # Errors
    /// `InvalidArgument` when `days == 0`; `DataSourceUnavailable` when a
    /// file-backed implementation cannot supply the ticker.  The synthetic
    /// implementation never fails on ticker identity — numeric trouble
    /// degrades to `Ok` with an empty series instead.
    fn series(&self, ticker: &str, days: usize) -> Result<Arc<OhlcvSeries>>;
}
