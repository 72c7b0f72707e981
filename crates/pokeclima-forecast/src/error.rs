//! Forecast pipeline errors and the messages shown for them.

use pokeclima_pokeapi::PokeApiError;
use pokeclima_weather::WeatherError;
use thiserror::Error;

use crate::category::Category;

/// Coarse failure class; each maps to one fixed user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The weather lookup failed
    CityNotFound,
    /// The type listing failed
    ListingFailed,
    /// Anything else, including the detail fetch
    Unexpected,
}

impl ErrorKind {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::CityNotFound => "Cidade não encontrada",
            Self::ListingFailed => "Cidade não encontrada. Tente novamente!",
            Self::Unexpected => "Algo deu errado. Sry. Tente novamente!",
        }
    }
}

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Weather lookup failed: {0}")]
    Weather(#[source] WeatherError),

    #[error("Listing Pokémon of type {category} failed: {source}")]
    Listing {
        category: Category,
        #[source]
        source: PokeApiError,
    },

    #[error("Weather report has no conditions")]
    MissingCondition,

    #[error("No Pokémon listed for type {0}")]
    NoCandidates(Category),

    #[error("Picked index {index} but only {len} candidates")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Fetching detail for {name} failed: {source}")]
    Detail {
        name: String,
        #[source]
        source: PokeApiError,
    },
}

impl ForecastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Weather(_) => ErrorKind::CityNotFound,
            Self::Listing { .. } => ErrorKind::ListingFailed,
            Self::MissingCondition
            | Self::NoCandidates(_)
            | Self::IndexOutOfRange { .. }
            | Self::Detail { .. } => ErrorKind::Unexpected,
        }
    }

    /// Message published to the session state
    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokeclima_core::NetworkError;

    #[test]
    fn test_weather_failure_message() {
        let err = ForecastError::Weather(WeatherError::EmptyBody);
        assert_eq!(err.kind(), ErrorKind::CityNotFound);
        assert_eq!(err.user_message(), "Cidade não encontrada");
    }

    #[test]
    fn test_listing_failure_message() {
        let err = ForecastError::Listing {
            category: Category::Ice,
            source: PokeApiError::Network(NetworkError::Timeout),
        };
        assert_eq!(err.user_message(), "Cidade não encontrada. Tente novamente!");
        assert!(err.to_string().contains("ice"));
    }

    #[test]
    fn test_everything_else_is_unexpected() {
        let errors = [
            ForecastError::MissingCondition,
            ForecastError::NoCandidates(Category::Bug),
            ForecastError::IndexOutOfRange { index: 3, len: 3 },
            ForecastError::Detail {
                name: "caterpie".into(),
                source: PokeApiError::Parse("eof".into()),
            },
        ];
        for err in errors {
            assert_eq!(err.user_message(), "Algo deu errado. Sry. Tente novamente!", "{}", err);
        }
    }
}
