//! Session state exposed to the presentation layer.
//!
//! Transitions are pure: each takes the previous state by value and returns
//! the next one. The orchestrator is the only caller.

use pokeclima_pokeapi::{CandidateDetail, CandidateRef};
use pokeclima_weather::WeatherReport;
use serde::Serialize;

use crate::category::Category;
use crate::error::ForecastError;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    /// User-facing message of the last failure
    pub error: Option<String>,
    pub loading: bool,
    pub report: Option<WeatherReport>,
    pub detail: Option<CandidateDetail>,
    /// Kept from the last success until the next one replaces it
    pub category: Option<Category>,
}

/// Everything a successful run produces
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutcome {
    pub category: Category,
    pub report: WeatherReport,
    pub detail: CandidateDetail,
    pub chosen: CandidateRef,
    pub chosen_index: usize,
    pub candidate_count: usize,
}

impl SessionState {
    /// A new request: loading, with error and results cleared.
    #[must_use]
    pub fn started(self) -> Self {
        Self {
            error: None,
            loading: true,
            report: None,
            detail: None,
            ..self
        }
    }

    #[must_use]
    pub fn failed(self, err: &ForecastError) -> Self {
        Self {
            error: Some(err.user_message().to_string()),
            report: None,
            detail: None,
            ..self
        }
    }

    #[must_use]
    pub fn succeeded(self, outcome: ForecastOutcome) -> Self {
        Self {
            error: None,
            category: Some(outcome.category),
            detail: Some(outcome.detail),
            report: Some(outcome.report),
            ..self
        }
    }

    #[must_use]
    pub fn finished(self) -> Self {
        Self {
            loading: false,
            ..self
        }
    }

    /// A detail is only ever shown next to its report and without an error.
    pub fn is_consistent(&self) -> bool {
        self.detail.is_none() || (self.report.is_some() && self.error.is_none())
    }
}
