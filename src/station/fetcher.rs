/// Retrieval of the station's live data page
use log::{debug, warn};

use crate::config::StationConfig;

/// Fetch the raw live data page from the station
///
/// Failures are logged and reported as `None`; the scheduler simply tries
/// again on its next cycle.
///
/// # Arguments
/// * `client` - Shared HTTP client
/// * `config` - Configuration holding the station address
///
/// # Returns
/// Some(html) if the page was retrieved, None otherwise
pub async fn fetch_livedata(client: &reqwest::Client, config: &StationConfig) -> Option<String> {
    let url = config.livedata_url();

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Failed to connect to PWS at {}: {}", url, e);
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!("PWS answered {} for {}", status, url);
        return None;
    }

    // Reading the body to the end releases the connection back to the pool
    match response.text().await {
        Ok(body) => {
            debug!("Fetched {} bytes from PWS", body.len());
            Some(body)
        }
        Err(e) => {
            warn!("Failed to read data from PWS: {}", e);
            None
        }
    }
}
