pub mod bar;
pub mod series;
pub mod series_cache;

// Re-export the bar/series types for convenient access (e.g. `use crate::market_data::Bar`).
pub use bar::Bar;
pub use series::OhlcvSeries;
pub use series_cache::SeriesCache;
