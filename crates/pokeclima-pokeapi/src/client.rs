//! PokéAPI client.

use std::time::Duration;

use pokeclima_core::{NetworkError, PokeApiConfig, ReqwestErrorExt};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::error::PokeApiError;
use crate::types::*;

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &PokeApiConfig, timeout: Option<Duration>) -> Result<Self, NetworkError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(|e| e.into_network_error())?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List every Pokémon of `type_name`, in the order the API returns them.
    #[instrument(skip(self), level = "info")]
    pub async fn list_by_type(&self, type_name: &str) -> Result<Vec<CandidateRef>, PokeApiError> {
        let url = format!("{}/type/{}", self.base_url, type_name);

        let listing: TypeListingResponse = self.get_json(&url).await?;
        let refs: Vec<CandidateRef> = listing.pokemon.into_iter().map(CandidateRef::from).collect();

        tracing::debug!("Type {} has {} Pokémon", type_name, refs.len());
        Ok(refs)
    }

    /// Fetch the detail record at an absolute URL taken from a listing.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_detail(&self, url: &str) -> Result<CandidateDetail, PokeApiError> {
        let url = Url::parse(url).map_err(|e| PokeApiError::InvalidUrl(format!("{}: {}", url, e)))?;

        let api: ApiPokemon = self.get_json(url.as_str()).await?;
        Ok(CandidateDetail::from(api))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, PokeApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.into_network_error())?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NetworkError::ServerError {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body = response.text().await.map_err(|e| e.into_network_error())?;
        serde_json::from_str(&body).map_err(|e| PokeApiError::Parse(e.to_string()))
    }
}
