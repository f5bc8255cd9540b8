use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;

/// Identifies one fetch and the symbol or query that triggered it.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct RequestTicket {
    id: u64,
    key: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

/// Widget-local fetch state. Only the response matching the in-flight ticket is applied.
#[derive(Clone, Debug)]
pub struct Remote<T> {
    state: Loadable<T>,
    in_flight: Option<RequestTicket>,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self {
            state: Loadable::Idle,
            in_flight: None,
        }
    }
}

impl<T> Remote<T> {
    pub fn state(&self) -> &Loadable<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            Loadable::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, Loadable::Failed(_))
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Fresh load for a new key: previous data is dropped.
    pub fn begin(&mut self, ticket: RequestTicket) {
        self.state = Loadable::Loading;
        self.in_flight = Some(ticket);
    }

    /// Background refetch: whatever is displayed stays until the response lands.
    pub fn refetch(&mut self, ticket: RequestTicket) {
        self.in_flight = Some(ticket);
    }

    pub fn reset(&mut self) {
        self.state = Loadable::Idle;
        self.in_flight = None;
    }

    pub fn resolve(&mut self, ticket: &RequestTicket, result: Result<T>) -> bool {
        if self.in_flight.as_ref() != Some(ticket) {
            tracing::debug!(
                id = *ticket.id(),
                key = ticket.key().as_str(),
                "discarding stale response"
            );
            return false;
        }

        self.in_flight = None;
        self.state = match result {
            Ok(data) => Loadable::Ready(data),
            Err(e) => {
                let message = format!("{:#}", e);
                tracing::warn!(key = ticket.key().as_str(), error = %message, "fetch failed");
                Loadable::Failed(message)
            }
        };
        true
    }
}
