/// Query string construction for the upload endpoint
use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::config::StationConfig;
use crate::models::Reading;

/// Build the upload query string for a reading taken at `now`
///
/// The receiving service matches on key names and expects exactly these
/// precisions. Date and time parts are plain integers without padding and
/// the month is numbered from 1.
///
/// # Arguments
/// * `reading` - Reading extracted from the station page
/// * `now` - Local wall-clock time of the upload
/// * `config` - Configuration holding credentials and the device type
///
/// # Returns
/// `key=value` pairs joined with `&`
pub fn build_query<Tz: TimeZone>(
    reading: &Reading,
    now: &DateTime<Tz>,
    config: &StationConfig,
) -> String {
    let pairs = [
        format!("user={}", config.username),
        format!("pass={}", config.password),
        format!("ev={}", now.year()),
        format!("ho={}", now.month()),
        format!("nap={}", now.day()),
        format!("ora={}", now.hour()),
        format!("perc={}", now.minute()),
        format!("mp={}", now.second()),
        format!("hom={:.1}", reading.temperature),
        format!("rh={:.0}", reading.humidity),
        format!("szelirany={:.0}", reading.wind_dir),
        format!("szelero={:.1}", reading.wind_speed),
        format!("szellokes={:.1}", reading.wind_gust),
        format!("p={:.1}", reading.pressure_relative),
        format!("csap={:.2}", reading.precip_daily),
        format!("csap1h={:.2}", reading.precip_hourly_rate),
        format!("tipus={}", config.device_type),
    ];

    pairs.join("&")
}
