//! Weather lookup client.

use std::sync::Arc;
use std::time::Duration;

use pokeclima_core::{NetworkError, ReqwestErrorExt, WeatherApiConfig};
use reqwest::Client;
use tracing::instrument;

use crate::types::{WeatherError, WeatherReport};

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Arc<Client>,
    base_url: String,
    api_key: Option<String>,
    units: String,
    lang: String,
}

impl WeatherClient {
    /// Build a client from config. `timeout` of `None` keeps reqwest's default.
    pub fn new(config: &WeatherApiConfig, timeout: Option<Duration>) -> Result<Self, NetworkError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(|e| e.into_network_error())?;

        Ok(Self {
            client: Arc::new(client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.effective_api_key(),
            units: config.units.clone(),
            lang: config.lang.clone(),
        })
    }

    /// Fetch current weather for `city`.
    ///
    /// Fails on transport errors, non-2xx statuses, an empty body, or a body
    /// that doesn't decode as a [`WeatherReport`].
    #[instrument(skip(self), level = "info")]
    pub async fn current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let url = format!("{}/weather", self.base_url);

        let mut params: Vec<(&str, &str)> = vec![
            ("q", city),
            ("units", self.units.as_str()),
            ("lang", self.lang.as_str()),
        ];
        if let Some(key) = self.api_key.as_deref() {
            params.push(("appid", key));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| e.into_network_error())?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::debug!("Weather lookup returned status {}", status);
            return Err(NetworkError::ServerError {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body = response.text().await.map_err(|e| e.into_network_error())?;
        if body.trim().is_empty() {
            return Err(WeatherError::EmptyBody);
        }

        let report: WeatherReport =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        tracing::debug!(
            "Weather for {}: {}°, {} condition(s)",
            city,
            report.main.temp,
            report.weather.len()
        );
        Ok(report)
    }
}
