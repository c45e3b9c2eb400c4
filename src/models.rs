/// Fields of a [`Reading`] that can be filled from the station page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ReceiverTime,
    TemperatureIndoor,
    HumidityIndoor,
    PressureAbsolute,
    PressureRelative,
    Temperature,
    Humidity,
    WindDir,
    WindSpeed,
    WindGust,
    SolarRadiation,
    Uv,
    Uvi,
    PrecipHourlyRate,
    PrecipDaily,
    PrecipWeekly,
    PrecipMonthly,
    PrecipYearly,
}

/// One snapshot of the station's live data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reading {
    pub receiver_time: String,
    pub temperature_indoor: f64,
    pub humidity_indoor: f64,
    pub pressure_absolute: f64,
    pub pressure_relative: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_dir: f64,
    pub wind_speed: f64,
    pub wind_gust: f64,
    pub solar_radiation: f64,
    pub uv: f64,
    pub uvi: f64,
    pub precip_hourly_rate: f64,
    pub precip_daily: f64,
    pub precip_weekly: f64,
    pub precip_monthly: f64,
    pub precip_yearly: f64,
}

const CARDINALS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Parse a numeric page value, falling back to zero.
///
/// The page gives no way to tell a missing sensor from a garbled value,
/// so both end up as 0.
pub fn parse_value(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

impl Reading {
    /// Store a raw page value into the given field.
    pub fn set(&mut self, field: Field, raw: &str) {
        let slot = match field {
            Field::ReceiverTime => {
                self.receiver_time = raw.to_string();
                return;
            }
            Field::TemperatureIndoor => &mut self.temperature_indoor,
            Field::HumidityIndoor => &mut self.humidity_indoor,
            Field::PressureAbsolute => &mut self.pressure_absolute,
            Field::PressureRelative => &mut self.pressure_relative,
            Field::Temperature => &mut self.temperature,
            Field::Humidity => &mut self.humidity,
            Field::WindDir => &mut self.wind_dir,
            Field::WindSpeed => &mut self.wind_speed,
            Field::WindGust => &mut self.wind_gust,
            Field::SolarRadiation => &mut self.solar_radiation,
            Field::Uv => &mut self.uv,
            Field::Uvi => &mut self.uvi,
            Field::PrecipHourlyRate => &mut self.precip_hourly_rate,
            Field::PrecipDaily => &mut self.precip_daily,
            Field::PrecipWeekly => &mut self.precip_weekly,
            Field::PrecipMonthly => &mut self.precip_monthly,
            Field::PrecipYearly => &mut self.precip_yearly,
        };
        *slot = parse_value(raw);
    }

    /// 16-point compass label for the wind direction.
    pub fn wind_dir_cardinal(&self) -> &'static str {
        let degrees = self.wind_dir.rem_euclid(360.0);
        let sector = ((degrees / 22.5).round() as usize) % CARDINALS.len();
        CARDINALS[sector]
    }
}
