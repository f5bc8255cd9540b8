use anyhow::{Error, Result};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, EnumIter, EnumString, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskProfile {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskProfile {
    pub fn label(&self) -> &'static str {
        match self {
            RiskProfile::Low => "Conservative (Low Risk)",
            RiskProfile::Medium => "Balanced (Medium Risk)",
            RiskProfile::High => "Aggressive (High Risk)",
        }
    }

    /// Low, medium, high, then back to low.
    pub fn next(&self) -> Self {
        RiskProfile::iter()
            .cycle()
            .skip_while(|profile| profile != self)
            .nth(1)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl Recommendation {
    /// Case-insensitive keyword scan in declaration order, so BUY wins over SELL and SELL over HOLD.
    pub fn parse(text: &str) -> Option<Self> {
        let upper = text.to_uppercase();
        Recommendation::iter().find(|recommendation| upper.contains(&recommendation.to_string()))
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize)]
pub struct Prediction {
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    prediction: String,
    #[serde(default)]
    timestamp: String,
    #[serde(default)]
    error: Option<String>,
}

impl Prediction {
    pub fn recommendation(&self) -> Option<Recommendation> {
        if self.prediction.is_empty() {
            return None;
        }
        Recommendation::parse(&self.prediction)
    }

    /// An error body without any narrative counts as a failed prediction.
    pub fn into_checked(self) -> Result<Self> {
        match (&self.error, self.prediction.trim().is_empty()) {
            (Some(error), true) => Err(Error::msg(format!(
                "Prediction for {} unavailable: {}",
                self.symbol, error
            ))),
            _ => Ok(self),
        }
    }
}
