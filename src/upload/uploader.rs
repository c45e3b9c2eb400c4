/// Delivery of formatted readings to the remote service
use log::debug;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::config::StationConfig;

/// Attach the query to the configured upload endpoint.
///
/// Any query already present on the endpoint is replaced.
pub fn upload_url(config: &StationConfig, query: &str) -> Url {
    let mut url = config.upload_url.clone();
    url.set_query(Some(query));
    url
}

/// Send a formatted reading to the remote service
///
/// The query travels in the URL of a POST without a body. Transport errors
/// and non-success statuses are returned to the caller, which logs them and
/// moves on to the next cycle.
///
/// # Arguments
/// * `client` - Shared HTTP client
/// * `config` - Configuration holding the upload endpoint
/// * `query` - Output of [`crate::upload::build_query`]
///
/// # Returns
/// Result indicating success or failure
pub async fn send_reading(
    client: &reqwest::Client,
    config: &StationConfig,
    query: &str,
) -> Result<(), String> {
    let url = upload_url(config, query);

    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
        .map_err(|e| format!("Error posting reading: {}", e))?;

    let status = response.status();
    debug!("Upload answered with status {}", status);

    // Drain the body so the connection can be reused
    if let Err(e) = response.bytes().await {
        debug!("Failed to drain upload response: {}", e);
    }

    if !status.is_success() {
        return Err(format!("Upload rejected with status {}", status));
    }

    Ok(())
}
