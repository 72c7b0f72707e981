//! Seams between the orchestrator and the services it calls.

use async_trait::async_trait;
use pokeclima_pokeapi::{CandidateDetail, CandidateRef, PokeApiClient, PokeApiError};
use pokeclima_weather::{WeatherClient, WeatherError, WeatherReport};

use crate::category::Category;

#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn list_candidates(&self, category: Category) -> Result<Vec<CandidateRef>, PokeApiError>;

    async fn fetch_detail(&self, candidate: &CandidateRef) -> Result<CandidateDetail, PokeApiError>;
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        WeatherClient::current_weather(self, city).await
    }
}

#[async_trait]
impl CandidateSource for PokeApiClient {
    async fn list_candidates(&self, category: Category) -> Result<Vec<CandidateRef>, PokeApiError> {
        self.list_by_type(category.as_str()).await
    }

    async fn fetch_detail(&self, candidate: &CandidateRef) -> Result<CandidateDetail, PokeApiError> {
        PokeApiClient::fetch_detail(self, &candidate.url).await
    }
}
