// =============================================================================
// Demo stock universe
// =============================================================================
//
// The built-in company list the presentation layers populate their pickers
// from, displayed as "Company Name | TICKER".  Only the ticker part matters
// to the core; `ticker_from_label` recovers it from a display string.

/// (company name, ticker) pairs available in the demo.
pub const STOCKS: &[(&str, &str)] = &[
    ("Apple Inc.", "AAPL"),
    ("Microsoft Corporation", "MSFT"),
    ("Alphabet Inc.", "GOOGL"),
    ("Amazon.com Inc.", "AMZN"),
    ("Meta Platforms Inc.", "META"),
    ("Tesla Inc.", "TSLA"),
    ("NVIDIA Corporation", "NVDA"),
    ("JPMorgan Chase & Co.", "JPM"),
    ("Bank of America Corp.", "BAC"),
    ("Visa Inc.", "V"),
    ("Johnson & Johnson", "JNJ"),
    ("Walmart Inc.", "WMT"),
    ("Procter & Gamble Co.", "PG"),
    ("Mastercard Inc.", "MA"),
    ("UnitedHealth Group Inc.", "UNH"),
    ("Exxon Mobil Corporation", "XOM"),
    ("Chevron Corporation", "CVX"),
    ("Home Depot Inc.", "HD"),
    ("Coca-Cola Company", "KO"),
    ("PepsiCo Inc.", "PEP"),
];

/// Ticker shown by default on startup.
pub const DEFAULT_TICKER: &str = "AAPL";

/// The "Company Name | TICKER" display label for a pair.
pub fn label(name: &str, ticker: &str) -> String {
    format!("{name} | {ticker}")
}

/// Extract the ticker from a "Company Name | TICKER" display label.
///
/// Returns `None` when the label has no separator or the ticker part is
/// empty.  A bare ticker with no separator is not accepted — callers pass
/// those straight through instead.
pub fn ticker_from_label(label: &str) -> Option<&str> {
    let (_, ticker) = label.rsplit_once('|')?;
    let ticker = ticker.trim();
    if ticker.is_empty() {
        None
    } else {
        Some(ticker)
    }
}
