// =============================================================================
// Meridian — headless demo consumer
// =============================================================================
//
// Stands in for the GUI shells: resolves a ticker, generates the series,
// computes the standard indicator set, and prints the recommendation.
//
// Usage:
//   meridian [TICKER|"Company Name | TICKER"] [DAYS]
//
// Defaults to AAPL over 180 days.  MERIDIAN_CONFIG points at an optional
// generator config JSON.
// =============================================================================

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use meridian_core::{
    advisor, universe, GeneratorConfig, IndicatorKind, MarketDataSource, SyntheticDataSource,
};

const DEFAULT_DAYS: usize = 180;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║        Meridian Analytics Core — Demo Run                ║");
    info!("╚══════════════════════════════════════════════════════════╝");

    // ── 1. Config ────────────────────────────────────────────────────────
    let config_path =
        std::env::var("MERIDIAN_CONFIG").unwrap_or_else(|_| "generator_config.json".to_string());
    let config = GeneratorConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        GeneratorConfig::default()
    });

    // ── 2. Resolve ticker and day count ──────────────────────────────────
    let mut args = std::env::args().skip(1);
    let ticker_arg = args.next().unwrap_or_else(|| universe::DEFAULT_TICKER.to_string());
    let ticker = universe::ticker_from_label(&ticker_arg)
        .unwrap_or(ticker_arg.as_str())
        .to_uppercase();
    let days: usize = match args.next() {
        Some(d) => d.parse()?,
        None => DEFAULT_DAYS,
    };

    info!(ticker = %ticker, days, "Generating series");

    // ── 3. Generate and analyse ──────────────────────────────────────────
    let source = SyntheticDataSource::new(config);
    let series = source.series(&ticker, days)?;

    if series.is_empty() {
        warn!(ticker = %ticker, "No data available — nothing to analyse");
        return Ok(());
    }

    info!(
        bars = series.len(),
        first = %series.bars[0].date,
        last = %series.bars[series.len() - 1].date,
        last_close = format!("{:.2}", series.last_close().unwrap_or(0.0)),
        "Series ready"
    );

    let indicator_set = [
        IndicatorKind::Sma { period: 20 },
        IndicatorKind::Ema { period: 12 },
        IndicatorKind::Rsi { period: 14 },
        IndicatorKind::Bollinger {
            period: 20,
            num_std: 2.0,
        },
        IndicatorKind::Macd {
            fast: 12,
            slow: 26,
            signal: 9,
        },
        IndicatorKind::Atr { period: 14 },
    ];

    for kind in indicator_set {
        for line in kind.compute(&series)? {
            match line.last_defined() {
                Some(value) => info!(
                    indicator = %kind.label(),
                    series = %line.name,
                    defined = line.defined_len(),
                    latest = format!("{value:.4}"),
                    "Indicator computed"
                ),
                None => warn!(
                    indicator = %kind.label(),
                    series = %line.name,
                    "Indicator has no defined values for this history length"
                ),
            }
        }
    }

    // ── 4. Recommendation ────────────────────────────────────────────────
    let rec = advisor::recommend(&series)?;
    info!(
        action = %rec.action,
        price = format!("{:.2}", rec.metrics.current_price),
        rsi = format!("{:.1}", rec.metrics.rsi_14),
        volatility = format!("{:.1}%", rec.metrics.volatility_annualized),
        volume_ratio = format!("{:.2}x", rec.metrics.volume_ratio),
        perf_30d = format!("{:.2}%", rec.metrics.perf_30d),
        perf_90d = format!("{:.2}%", rec.metrics.perf_90d),
        degraded = rec.degraded,
        "Recommendation"
    );
    for reason in &rec.narrative {
        info!(reason = %reason, "Reasoning");
    }

    Ok(())
}
