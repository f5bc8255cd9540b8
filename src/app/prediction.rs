use anyhow::Result;

use super::remote::{Remote, RequestTicket};
use crate::models::{Prediction, RiskProfile};

/// Prediction results are keyed by symbol and risk tier and only fetched on demand.
#[derive(Debug, Default)]
pub struct PredictionPanel {
    risk_profile: RiskProfile,
    remote: Remote<Prediction>,
}

impl PredictionPanel {
    pub fn new(risk_profile: RiskProfile) -> Self {
        Self {
            risk_profile,
            remote: Remote::default(),
        }
    }

    pub fn risk_profile(&self) -> RiskProfile {
        self.risk_profile
    }

    pub fn remote(&self) -> &Remote<Prediction> {
        &self.remote
    }

    pub fn can_analyze(&self) -> bool {
        !self.remote.is_fetching()
    }

    pub fn set_risk_profile(&mut self, risk_profile: RiskProfile) {
        if self.risk_profile != risk_profile {
            self.risk_profile = risk_profile;
            self.remote.reset();
        }
    }

    pub fn cycle_risk_profile(&mut self) {
        self.set_risk_profile(self.risk_profile.next());
    }

    pub fn clear(&mut self) {
        self.remote.reset();
    }

    pub fn begin(&mut self, ticket: RequestTicket) {
        self.remote.refetch(ticket);
    }

    pub fn resolve(&mut self, ticket: &RequestTicket, result: Result<Prediction>) -> bool {
        self.remote
            .resolve(ticket, result.and_then(Prediction::into_checked))
    }
}
