use serde::{Deserialize, Serialize};

/// The subset of a WeatherAPI.com `forecast.json` payload the front end reads.
///
/// Every other field of the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherResponse {
    pub location: RawLocation,
    pub current: RawCurrent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLocation {
    pub name: String,
    pub region: String,
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrent {
    pub condition: RawCondition,
    pub temp_f: f64,
    pub temp_c: f64,
    pub feelslike_f: f64,
    pub feelslike_c: f64,
    pub wind_mph: f64,
    pub humidity: f64,
}

/// A temperature in both scales, rounded to whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    pub f: i64,
    pub c: i64,
}

/// Flattened record ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedWeather {
    pub condition: String,
    pub feels_like: Temperature,
    pub current_temp: Temperature,
    /// Wind speed in miles per hour.
    pub wind: i64,
    /// Relative humidity in percent, as reported.
    pub humidity: f64,
    /// Upper-cased place name.
    pub location: String,
    /// Upper-cased state for US locations, upper-cased country otherwise.
    pub region: String,
}
