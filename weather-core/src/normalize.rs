use crate::model::{NormalizedWeather, RawWeatherResponse, Temperature};

/// Country name the API reports for US locations, whose state is shown instead.
pub const US_COUNTRY: &str = "United States of America";

/// Flatten a raw forecast payload into the record the page displays.
pub fn normalize(raw: &RawWeatherResponse) -> NormalizedWeather {
    let current = &raw.current;
    let location = &raw.location;

    let region = if location.country == US_COUNTRY { &location.region } else { &location.country };

    NormalizedWeather {
        condition: current.condition.text.clone(),
        feels_like: Temperature {
            f: round_half_up(current.feelslike_f),
            c: round_half_up(current.feelslike_c),
        },
        current_temp: Temperature {
            f: round_half_up(current.temp_f),
            c: round_half_up(current.temp_c),
        },
        wind: round_half_up(current.wind_mph),
        humidity: current.humidity,
        location: location.name.to_uppercase(),
        region: region.to_uppercase(),
    }
}

/// Round to the nearest integer, with halves going towards positive infinity
/// (`-2.5` becomes `-2`, `2.5` becomes `3`).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
