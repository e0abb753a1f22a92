//! Fetch → average → detect → report → render, in that order.

use std::io::Write;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::CrossoverConfig;
use crate::error::{CrossoverError, Result};
use crate::models::analysis::CrossoverAnalysis;
use crate::report::chart::ChartRenderer;
use crate::report::console::{format_banner, format_signals, NO_DATA_MESSAGE};
use crate::services::market_data::PriceSeriesProvider;
use crate::signals::engine::SignalEngine;

pub struct CrossoverPipeline {
    config: CrossoverConfig,
    provider: Arc<dyn PriceSeriesProvider>,
    renderer: Arc<dyn ChartRenderer>,
}

impl CrossoverPipeline {
    pub fn new(
        config: CrossoverConfig,
        provider: Arc<dyn PriceSeriesProvider>,
        renderer: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self {
            config,
            provider,
            renderer,
        }
    }

    /// Fetch prices and compute the analysis without writing anything.
    pub async fn analyze(&self) -> Result<CrossoverAnalysis> {
        let config = &self.config;
        config.validate()?;

        let prices = self
            .provider
            .fetch_closes(&config.ticker, config.start_date, config.end_date)
            .await?;

        if prices.is_empty() {
            return Err(CrossoverError::data_unavailable(
                &config.ticker,
                format!("{} provider returned an empty series", self.provider.name()),
            ));
        }

        Ok(SignalEngine::analyze(
            &config.ticker,
            prices,
            config.short_window,
            config.long_window,
        ))
    }

    /// Run the whole pipeline, writing the report and chart to `out`.
    ///
    /// When no data is available the notice is written before the error is
    /// returned; nothing after the fetch runs in that case.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<CrossoverAnalysis> {
        let config = &self.config;

        out.write_all(format_banner(config).as_bytes())?;
        writeln!(out, "Fetching data for {}...", config.ticker)?;

        let analysis = match self.analyze().await {
            Ok(analysis) => analysis,
            Err(err) if err.is_data_unavailable() => {
                warn!(symbol = %config.ticker, error = %err, "No price data");
                writeln!(out, "{NO_DATA_MESSAGE}")?;
                return Err(err);
            }
            Err(err) => {
                error!(symbol = %config.ticker, error = %err, "Pipeline failed");
                return Err(err);
            }
        };

        out.write_all(format_signals(&analysis.signals).as_bytes())?;

        info!(
            symbol = %analysis.symbol,
            provider = self.provider.name(),
            points = analysis.prices.len(),
            buys = analysis.buy_signals().count(),
            sells = analysis.sell_signals().count(),
            "Crossover analysis complete"
        );

        if config.show_chart {
            writeln!(out)?;
            writeln!(out, "Displaying chart for {}...", config.ticker)?;
            self.renderer.render(&analysis, out)?;
        }

        writeln!(out, "Analysis complete!")?;
        out.flush()?;

        Ok(analysis)
    }
}
