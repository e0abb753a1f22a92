//! Moving Average Crossover
//!
//! Downloads daily closes for one ticker, prints golden/death cross signals
//! and draws a terminal chart. Configuration comes from the environment
//! (or `.env`); see `CrossoverConfig::from_env`.

use std::sync::Arc;

use dotenvy::dotenv;
use ma_crossover::config::{get_environment, CrossoverConfig};
use ma_crossover::core::pipeline::CrossoverPipeline;
use ma_crossover::logging;
use ma_crossover::report::chart::TerminalChart;
use ma_crossover::services::yahoo::YahooFinanceProvider;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = CrossoverConfig::from_env()?;
    info!(
        environment = %get_environment(),
        ticker = %config.ticker,
        short_window = config.short_window,
        long_window = config.long_window,
        start = %config.start_date,
        end = %config.end_date,
        "Starting moving average crossover"
    );

    let provider = Arc::new(YahooFinanceProvider::from_config(&config)?);
    let pipeline = CrossoverPipeline::new(config, provider, Arc::new(TerminalChart::default()));

    let mut stdout = std::io::stdout().lock();
    match pipeline.run(&mut stdout).await {
        Ok(_) => Ok(()),
        Err(err) if err.is_data_unavailable() => {
            warn!(error = %err, "Run aborted");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
