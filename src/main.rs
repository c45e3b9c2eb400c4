mod config;
mod models;
mod scheduler;
mod station;
mod upload;
mod utils;

#[cfg(test)]
mod test_support;

use log::{error, info, LevelFilter};

use config::StationConfig;
use scheduler::main_loop;
use utils::build_client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first, its debug flag decides the log level
    let config = StationConfig::new();

    // Initialize logging
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Info);
    if config.as_ref().is_ok_and(|config| config.debug_enabled) {
        builder.filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Debug);
    }
    builder
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    let client = build_client()?;

    // Stop on Ctrl+C
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let cycles = main_loop(&config, &client, shutdown).await;
    info!(
        "Program terminated by user after {} cycles. Exiting gracefully.",
        cycles
    );

    Ok(())
}
