//! Current-weather lookup for PokeClima
//!
//! Talks to an OpenWeatherMap-compatible `/weather` endpoint and returns the
//! subset of the payload the forecast flow needs.

pub mod client;
pub mod types;

pub use client::WeatherClient;
pub use types::*;
