// =============================================================================
// File-backed OHLCV source
// =============================================================================
//
// Drop-in alternative to the synthetic generator: reads pre-populated daily
// OHLCV rows from `<data_dir>/<TICKER>.csv` (header Date,Open,High,Low,
// Close,Volume — the one-sheet-per-ticker workbook of the original tooling,
// one file per ticker here).
//
// The trailing `days` business days (Mon-Fri) up to a fixed cutoff date form
// the index; the same number of trailing rows is taken from the file and
// re-indexed onto it.  The range invariant is re-enforced on load — file
// rows are not trusted either.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Deserialize;
use tracing::{debug, info};

use crate::datasource::MarketDataSource;
use crate::error::{Error, Result};
use crate::market_data::{Bar, OhlcvSeries, SeriesCache};

/// Fixed final business day of every file-backed series.
fn cutoff_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 30).expect("static cutoff date is valid")
}

/// The most recent `count` business days ending at `end` (oldest first).
/// `end` itself is included when it falls on a weekday.
fn trailing_business_days(end: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(count);
    let mut cursor = end;
    while days.len() < count {
        if !matches!(cursor.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(cursor);
        }
        cursor = match cursor.checked_sub_days(Days::new(1)) {
            Some(d) => d,
            None => break,
        };
    }
    days.reverse();
    days
}

/// One parsed spreadsheet row.  The file's own Date column is ignored; the
/// series is re-indexed onto the trailing business-day window.
#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Volume")]
    volume: u64,
}

/// File-backed market-data source reading one CSV per ticker.
pub struct CsvDataSource {
    data_dir: PathBuf,
    cache: SeriesCache,
}

impl CsvDataSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache: SeriesCache::new(),
        }
    }

    fn load(&self, ticker: &str, days: usize) -> Result<OhlcvSeries> {
        let path = self.data_dir.join(format!("{ticker}.csv"));
        let rows = read_rows(&path, ticker)?;

        let index = trailing_business_days(cutoff_date(), days);
        if rows.len() < index.len() {
            return Err(Error::unavailable(format!(
                "{ticker}: need {} rows, file has {}",
                index.len(),
                rows.len()
            )));
        }

        let tail = &rows[rows.len() - index.len()..];
        let mut bars = Vec::with_capacity(index.len());
        for (date, row) in index.iter().zip(tail.iter()) {
            let mut bar = Bar {
                date: *date,
                open: row.open,
                high: row.high,
                low: row.low,
                close: row.close,
                volume: row.volume,
            };
            bar.enforce_range();
            bars.push(bar);
        }

        let series = OhlcvSeries::new(ticker, bars);
        if !series.all_bars_valid() {
            return Err(Error::unavailable(format!(
                "{ticker}: file contains non-finite or non-positive values"
            )));
        }

        info!(ticker = %ticker, bars = series.len(), path = %path.display(), "loaded file-backed series");
        Ok(series)
    }
}

fn read_rows(path: &Path, ticker: &str) -> Result<Vec<SheetRow>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::unavailable(format!("{ticker}: cannot open {}: {e}", path.display())))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: SheetRow = record
            .map_err(|e| Error::unavailable(format!("{ticker}: malformed row: {e}")))?;
        rows.push(row);
    }
    Ok(rows)
}

impl MarketDataSource for CsvDataSource {
    fn series(&self, ticker: &str, days: usize) -> Result<Arc<OhlcvSeries>> {
        if days == 0 {
            return Err(Error::invalid_argument("days must be > 0"));
        }

        if let Some(hit) = self.cache.get(ticker) {
            debug!(ticker = %ticker, bars = hit.len(), "series cache hit");
            return Ok(hit);
        }

        let series = self.load(ticker, days)?;
        Ok(self.cache.insert(ticker, series))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &Path, ticker: &str, rows: usize) {
        let mut file = std::fs::File::create(dir.join(format!("{ticker}.csv"))).unwrap();
        writeln!(file, "Date,Open,High,Low,Close,Volume").unwrap();
        for i in 0..rows {
            let base = 100.0 + i as f64;
            writeln!(
                file,
                "2025-01-{:02},{},{},{},{},{}",
                (i % 28) + 1,
                base,
                base + 2.0,
                base - 2.0,
                base + 1.0,
                5_000 + i
            )
            .unwrap();
        }
    }

    #[test]
    fn business_day_index_skips_weekends() {
        let end = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(); // Wednesday
        let days = trailing_business_days(end, 10);
        assert_eq!(days.len(), 10);
        assert_eq!(*days.last().unwrap(), end);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2025, 4, 17).unwrap());
        assert!(days
            .iter()
            .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn zero_days_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvDataSource::new(dir.path());
        assert!(matches!(
            source.series("AAPL", 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn missing_ticker_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvDataSource::new(dir.path());
        assert!(matches!(
            source.series("NOPE", 10),
            Err(Error::DataSourceUnavailable(_))
        ));
    }

    #[test]
    fn loads_and_slices_trailing_rows() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "AAPL", 30);

        let source = CsvDataSource::new(dir.path());
        let series = source.series("AAPL", 10).unwrap();
        assert_eq!(series.len(), 10);

        // Last row of the file lands on the cutoff business day.
        assert_eq!(
            series.bars.last().unwrap().date,
            NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
        );
        // Trailing 10 of 30 rows: closes 121..130.
        assert_eq!(series.bars[0].close, 121.0);
        assert_eq!(series.bars[9].close, 130.0);
        assert!(series.all_bars_valid());
    }

    #[test]
    fn underpopulated_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "AAPL", 5);

        let source = CsvDataSource::new(dir.path());
        assert!(matches!(
            source.series("AAPL", 10),
            Err(Error::DataSourceUnavailable(_))
        ));
    }

    #[test]
    fn range_invariant_is_reenforced_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("BAD.csv")).unwrap();
        writeln!(file, "Date,Open,High,Low,Close,Volume").unwrap();
        // High below the close and low above the open: both sides violated.
        for _ in 0..3 {
            writeln!(file, "2025-01-02,100.0,101.0,100.5,103.0,4000").unwrap();
        }
        drop(file);

        let source = CsvDataSource::new(dir.path());
        let series = source.series("BAD", 3).unwrap();
        for bar in &series.bars {
            assert!(bar.high >= bar.open.max(bar.close));
            assert!(bar.low <= bar.open.min(bar.close));
        }
    }

    #[test]
    fn repeated_calls_hit_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "MSFT", 30);

        let source = CsvDataSource::new(dir.path());
        let first = source.series("MSFT", 10).unwrap();
        let second = source.series("MSFT", 10).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
