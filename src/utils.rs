/// Utility functions for logging and HTTP setup
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Format a timestamp for human-readable logging
///
/// Converts a timestamp to DD.MM.YYYY - HH:MM:SS format.
pub fn format_datetime<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format("%d.%m.%Y - %H:%M:%S").to_string()
}

/// Build the HTTP client shared by the fetcher and the uploader
///
/// Timeouts are left at the client defaults.
pub fn build_client() -> Result<reqwest::Client, Box<dyn std::error::Error>> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}
