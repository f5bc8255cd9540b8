use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};

use super::event::{AppEvent, Command, FetchOutcome};
use crate::api::MarketPulseApi;

/// Runs one command on its own task and reports the outcome back to the UI loop.
pub fn dispatch(
    api: &MarketPulseApi,
    events: &UnboundedSender<AppEvent>,
    command: Command,
) -> JoinHandle<()> {
    let api = api.clone();
    let events = events.clone();

    tokio::spawn(async move {
        let outcome = match command {
            Command::FetchStock(ticket) => {
                let result = api.get_stock(ticket.key()).await;
                FetchOutcome::Stock(ticket, result)
            }
            Command::FetchNews(ticket) => {
                let result = api.get_news(ticket.key()).await;
                FetchOutcome::News(ticket, result)
            }
            Command::FetchPrediction(ticket, risk_profile) => {
                let result = api.get_prediction(ticket.key(), risk_profile).await;
                FetchOutcome::Prediction(ticket, result)
            }
            Command::Search(ticket) => {
                let result = api.search_stocks(ticket.key()).await;
                FetchOutcome::Search(ticket, result)
            }
        };

        // The receiver is gone only while shutting down.
        let _ = events.send(AppEvent::Fetched(outcome));
    })
}
