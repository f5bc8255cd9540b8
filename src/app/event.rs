use anyhow::Result;

use super::remote::RequestTicket;
use crate::models::{NewsFeed, Prediction, RiskProfile, SearchResult, StockSnapshot};

/// A fetch the dashboard wants performed.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    FetchStock(RequestTicket),
    FetchNews(RequestTicket),
    FetchPrediction(RequestTicket, RiskProfile),
    Search(RequestTicket),
}

#[derive(Debug)]
pub enum FetchOutcome {
    Stock(RequestTicket, Result<StockSnapshot>),
    News(RequestTicket, Result<NewsFeed>),
    Prediction(RequestTicket, Result<Prediction>),
    Search(RequestTicket, Result<Vec<SearchResult>>),
}

/// Everything that reaches the UI loop besides terminal input.
#[derive(Debug)]
pub enum AppEvent {
    Fetched(FetchOutcome),
    SearchDue(String),
    RefreshDue(String),
}
