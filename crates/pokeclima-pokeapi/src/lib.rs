//! PokéAPI client for PokeClima.
//!
//! Lists the Pokémon of a type and fetches a single Pokémon's detail record.

pub mod client;
pub mod error;
pub mod types;

pub use client::PokeApiClient;
pub use error::PokeApiError;
pub use types::{CandidateDetail, CandidateRef, Stat, TypeSlot};
