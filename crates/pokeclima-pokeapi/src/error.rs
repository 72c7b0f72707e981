//! PokéAPI error types.

use pokeclima_core::NetworkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokeApiError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Invalid detail URL: {0}")]
    InvalidUrl(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
