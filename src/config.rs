use std::env;
use std::time::Duration;
use url::Url;

/// Endpoint that accepts station readings.
pub const DEFAULT_UPLOAD_URL: &str = "https://pro.idokep.hu/sendws.php";
/// Device type reported in the `tipus` field.
pub const DEFAULT_DEVICE_TYPE: &str = "WH2600";

#[derive(Debug, Clone)]
pub struct StationConfig {
    pub pws_host: String,
    pub fetch_interval: Duration,
    pub username: String,
    pub password: String,
    pub debug_enabled: bool,
    pub upload_url: Url,
    pub device_type: String,
}

impl StationConfig {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Load environment variables
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let pws_host = var("PWS_IP").ok_or("PWS_IP environment variable not set")?;

        // The host ends up in a URL, reject anything that cannot be one
        Url::parse(&format!("http://{}/livedata.htm", pws_host))
            .map_err(|e| format!("Invalid PWS_IP value '{}': {}", pws_host, e))?;

        let interval_str =
            var("FETCH_INTERVAL").ok_or("FETCH_INTERVAL environment variable not set")?;
        let interval_secs = match interval_str.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => return Err(format!("Invalid FETCH_INTERVAL value: {}", interval_str).into()),
        };

        let username = var("USERNAME").ok_or("USERNAME environment variable not set")?;
        let password = var("PASSWORD").ok_or("PASSWORD environment variable not set")?;

        let debug_enabled = var("DEBUG_ENABLED").is_some();

        let upload_url = match var("UPLOAD_URL") {
            Some(raw) => {
                Url::parse(&raw).map_err(|e| format!("Invalid UPLOAD_URL value '{}': {}", raw, e))?
            }
            None => Url::parse(DEFAULT_UPLOAD_URL)?,
        };

        let device_type = var("DEVICE_TYPE").unwrap_or_else(|| DEFAULT_DEVICE_TYPE.to_string());

        Ok(StationConfig {
            pws_host,
            fetch_interval: Duration::from_secs(interval_secs),
            username,
            password,
            debug_enabled,
            upload_url,
            device_type,
        })
    }

    /// Address of the station's live data page.
    pub fn livedata_url(&self) -> String {
        format!("http://{}/livedata.htm", self.pws_host)
    }
}
