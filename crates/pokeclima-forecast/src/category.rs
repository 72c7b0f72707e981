//! Weather → Pokémon type classification.

use serde::{Deserialize, Serialize};

/// Pokémon type derived from the current weather
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electric,
    Ice,
    Water,
    Grass,
    Ground,
    Bug,
    Rock,
    Fire,
    Normal,
}

impl Category {
    /// PokéAPI type name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electric => "electric",
            Self::Ice => "ice",
            Self::Water => "water",
            Self::Grass => "grass",
            Self::Ground => "ground",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Fire => "fire",
            Self::Normal => "normal",
        }
    }

    /// Classify a rounded temperature (°C) and condition description.
    ///
    /// Rules are checked in order and the first match wins. Rain in the
    /// description overrides temperature. `[10, 12)` and `[21, 23)` have no
    /// band of their own and land on `Normal`, as does NaN.
    pub fn classify(temperature: f64, condition_text: &str) -> Self {
        if condition_text.to_lowercase().contains("chuva") {
            return Self::Electric;
        }

        let t = temperature;
        if t < 5.0 {
            Self::Ice
        } else if (5.0..10.0).contains(&t) {
            Self::Water
        } else if (12.0..15.0).contains(&t) {
            Self::Grass
        } else if (15.0..21.0).contains(&t) {
            Self::Ground
        } else if (23.0..27.0).contains(&t) {
            Self::Bug
        } else if (27.0..=33.0).contains(&t) {
            Self::Rock
        } else if t > 33.0 {
            Self::Fire
        } else {
            tracing::debug!("No band for {}° ({:?}), falling back to normal", t, condition_text);
            Self::Normal
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
