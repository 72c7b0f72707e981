use pokeclima_core::NetworkError;
use serde::{Deserialize, Serialize};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Temperature readings, in the unit system the request asked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl Condition {
    /// URL of the condition icon image
    pub fn icon_url(&self) -> String {
        format!("{}/{}@2x.png", ICON_BASE_URL, self.icon)
    }
}

/// Current weather for a city
///
/// Unknown fields in the upstream payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub main: MainReadings,
    pub weather: Vec<Condition>,
}

impl WeatherReport {
    /// The first condition is treated as the primary one.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }

    /// `main.temp` rounded to the nearest integer, halves toward +∞.
    pub fn rounded_temperature(&self) -> f64 {
        round_half_up(self.main.temp)
    }
}

/// Round to the nearest integer, with `x.5` going up (`-2.5` → `-2`).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Weather lookup errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
    #[error("Empty response body")]
    EmptyBody,
    #[error("Parse error: {0}")]
    Parse(String),
}
