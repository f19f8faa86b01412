// =============================================================================
// Meridian Core — synthetic market data, indicators, recommendations
// =============================================================================
//
// The reusable core behind the Meridian financial-analytics demos.  GUI
// shells feed it a ticker and a day count and render whatever comes back:
//
//   ticker ──> data source ──> OhlcvSeries ──> indicators ──> advisor
//
// Everything is synchronous and side-effect-free apart from the per-source
// series cache; presentation layers may call it from a background thread as
// a plain call-and-return unit.

pub mod advisor;
pub mod config;
pub mod datasource;
pub mod error;
pub mod indicators;
pub mod market_data;
pub mod universe;

pub use advisor::{recommend, Action, Recommendation, SupportingMetrics};
pub use config::GeneratorConfig;
pub use datasource::{CsvDataSource, MarketDataSource, SyntheticDataSource};
pub use error::{Error, Result};
pub use indicators::{IndicatorKind, IndicatorSeries};
pub use market_data::{Bar, OhlcvSeries, SeriesCache};
