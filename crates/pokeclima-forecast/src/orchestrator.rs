//! Forecast orchestrator: weather → type → random Pokémon.

use std::sync::Arc;

use pokeclima_core::{AppError, Config, ConfigError};
use pokeclima_pokeapi::PokeApiClient;
use pokeclima_weather::WeatherClient;
use tokio::sync::watch;
use tracing::instrument;

use crate::category::Category;
use crate::error::ForecastError;
use crate::picker::{IndexPicker, RandomPicker};
use crate::source::{CandidateSource, WeatherSource};
use crate::state::{ForecastOutcome, SessionState};

/// Runs the three-stage lookup and owns the session state.
///
/// Overlapping `submit` calls are not coordinated; whichever finishes last
/// leaves its result in the state.
pub struct ForecastOrchestrator {
    weather: Arc<dyn WeatherSource>,
    candidates: Arc<dyn CandidateSource>,
    picker: Arc<dyn IndexPicker>,
    state: watch::Sender<SessionState>,
}

impl ForecastOrchestrator {
    pub fn new(
        weather: impl WeatherSource + 'static,
        candidates: impl CandidateSource + 'static,
        picker: impl IndexPicker + 'static,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            weather: Arc::new(weather),
            candidates: Arc::new(candidates),
            picker: Arc::new(picker),
            state,
        }
    }

    /// Wire the HTTP clients described by `config`, with a random picker.
    ///
    /// Validation errors fail; warnings are logged.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let validation = config.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }
        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        let timeout = config.http.timeout();
        let weather = WeatherClient::new(&config.weather, timeout)?;
        let pokeapi = PokeApiClient::new(&config.pokeapi, timeout)?;

        Ok(Self::new(weather, pokeapi, RandomPicker))
    }

    /// Current session state
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Look up `city` and publish the result to the session state.
    ///
    /// Never fails: errors end up as a fixed message in `error`. Returns
    /// the state as this call left it.
    #[instrument(skip(self), level = "info")]
    pub async fn submit(&self, city: &str) -> SessionState {
        self.transition(SessionState::started);

        match self.resolve(city).await {
            Ok(outcome) => {
                tracing::info!(
                    "{} → {} ({} of {})",
                    city,
                    outcome.chosen.name,
                    outcome.chosen_index + 1,
                    outcome.candidate_count
                );
                self.transition(move |s| s.succeeded(outcome).finished());
            }
            Err(err) => {
                tracing::warn!(kind = ?err.kind(), "Forecast for {} failed: {}", city, err);
                self.transition(|s| s.failed(&err).finished());
            }
        }

        self.snapshot()
    }

    /// The lookup pipeline, without touching session state.
    pub async fn resolve(&self, city: &str) -> Result<ForecastOutcome, ForecastError> {
        let report = self
            .weather
            .current_weather(city)
            .await
            .map_err(ForecastError::Weather)?;

        let temperature = report.rounded_temperature();
        let condition_text = report
            .primary_condition()
            .map(|c| c.description.clone())
            .ok_or(ForecastError::MissingCondition)?;

        let category = Category::classify(temperature, &condition_text);
        tracing::debug!("{}° / {:?} → {}", temperature, condition_text, category);

        let candidates = self
            .candidates
            .list_candidates(category)
            .await
            .map_err(|source| ForecastError::Listing { category, source })?;

        if candidates.is_empty() {
            return Err(ForecastError::NoCandidates(category));
        }

        let len = candidates.len();
        let index = self.picker.pick_index(0, len);
        let chosen = candidates
            .get(index)
            .cloned()
            .ok_or(ForecastError::IndexOutOfRange { index, len })?;

        let detail = self
            .candidates
            .fetch_detail(&chosen)
            .await
            .map_err(|source| ForecastError::Detail {
                name: chosen.name.clone(),
                source,
            })?;

        Ok(ForecastOutcome {
            category,
            report,
            detail,
            chosen,
            chosen_index: index,
            candidate_count: len,
        })
    }

    fn transition(&self, f: impl FnOnce(SessionState) -> SessionState) {
        self.state.send_modify(|state| {
            let prev = std::mem::take(state);
            *state = f(prev);
        });
    }
}
