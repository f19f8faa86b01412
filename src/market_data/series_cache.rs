// =============================================================================
// SeriesCache — explicit ticker → series cache
// =============================================================================
//
// Each data source owns one of these instead of the hidden module-level dict
// the GUI prototypes used.  A series is immutable once generated, so the
// cache never invalidates within a process lifetime; values are `Arc`s so a
// hit hands back the identical allocation.  The lock makes a source shared
// across GUI worker threads safe.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::market_data::OhlcvSeries;

/// Thread-safe, never-evicting cache of generated series keyed by ticker.
#[derive(Default)]
pub struct SeriesCache {
    entries: RwLock<HashMap<String, Arc<OhlcvSeries>>>,
}

impl SeriesCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached series for `ticker`, if present.
    pub fn get(&self, ticker: &str) -> Option<Arc<OhlcvSeries>> {
        self.entries.read().get(ticker).cloned()
    }

    /// Insert a series and return the shared handle.
    ///
    /// If another thread raced us and already populated the key, the existing
    /// entry wins so every caller observes one canonical series per ticker.
    pub fn insert(&self, ticker: &str, series: OhlcvSeries) -> Arc<OhlcvSeries> {
        let mut map = self.entries.write();
        map.entry(ticker.to_string())
            .or_insert_with(|| Arc::new(series))
            .clone()
    }

    /// Number of cached tickers.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
