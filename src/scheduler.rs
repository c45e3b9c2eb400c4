/// Poll → extract → format → upload cycle and the loop driving it
use chrono::Local;
use log::{debug, error, info};
use std::future::Future;
use tokio::time::sleep;

use crate::config::StationConfig;
use crate::station::{extract_reading, fetch_livedata};
use crate::upload::{build_query, send_reading};
use crate::utils::format_datetime;

/// What happened during a single cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The station page could not be retrieved; nothing was sent.
    NoData,
    Uploaded,
    UploadFailed,
}

/// Run one fetch → extract → format → upload pass
pub async fn run_cycle(client: &reqwest::Client, config: &StationConfig) -> CycleOutcome {
    let Some(page) = fetch_livedata(client, config).await else {
        return CycleOutcome::NoData;
    };

    let reading = extract_reading(&page);
    debug!("{:#?}", reading);

    let now = Local::now();
    let query = build_query(&reading, &now, config);

    match send_reading(client, config, &query).await {
        Ok(()) => {
            info!(
                "Uploaded reading at {}: temp={:.1}°C, humidity={:.0}%, pressure={:.1} hPa, wind {:.1} m/s {} (gust {:.1}), rain today {:.2} mm",
                format_datetime(&now),
                reading.temperature,
                reading.humidity,
                reading.pressure_relative,
                reading.wind_speed,
                reading.wind_dir_cardinal(),
                reading.wind_gust,
                reading.precip_daily
            );
            CycleOutcome::Uploaded
        }
        Err(e) => {
            error!("Failed to upload reading: {}", e);
            CycleOutcome::UploadFailed
        }
    }
}

/// Repeat [`run_cycle`] every `fetch_interval` until `shutdown` resolves
///
/// Shutdown is observed while waiting between cycles, so a cycle that has
/// already started always runs to completion.
///
/// # Returns
/// Number of cycles run
pub async fn main_loop<F>(config: &StationConfig, client: &reqwest::Client, shutdown: F) -> u64
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    info!(
        "Starting PWS forwarding service: polling {} every {} seconds",
        config.livedata_url(),
        config.fetch_interval.as_secs()
    );

    let mut cycles = 0;
    loop {
        let outcome = run_cycle(client, config).await;
        cycles += 1;
        debug!(
            "Cycle {} finished with {:?}, next one in {} seconds",
            cycles,
            outcome,
            config.fetch_interval.as_secs()
        );

        tokio::select! {
            _ = sleep(config.fetch_interval) => {}
            _ = &mut shutdown => {
                info!("Shutdown requested after {} cycles", cycles);
                break;
            }
        }
    }

    cycles
}
