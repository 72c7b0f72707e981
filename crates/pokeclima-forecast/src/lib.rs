//! Weather-driven Pokémon picker.
//!
//! [`ForecastOrchestrator::submit`] looks up a city's weather, classifies it
//! into a Pokémon type, lists that type, picks one at random and fetches its
//! detail. Progress and results live in a [`SessionState`] that callers can
//! read or subscribe to.

pub mod category;
pub mod error;
pub mod orchestrator;
pub mod picker;
pub mod source;
pub mod state;

pub use category::Category;
pub use error::{ErrorKind, ForecastError};
pub use orchestrator::ForecastOrchestrator;
pub use picker::{IndexPicker, RandomPicker};
pub use source::{CandidateSource, WeatherSource};
pub use state::{ForecastOutcome, SessionState};

pub use pokeclima_pokeapi::{CandidateDetail, CandidateRef};
pub use pokeclima_weather::WeatherReport;
