use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

use crate::models::RiskProfile;

#[derive(Debug, Getters, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequestDto {
    symbol: String,
    risk_profile: RiskProfile,
}
