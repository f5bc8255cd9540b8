use super::{
    event::{Command, FetchOutcome},
    prediction::PredictionPanel,
    remote::{Remote, RequestTicket},
    search::SearchState,
    store::SymbolStore,
};
use crate::models::{NewsFeed, RiskProfile, StockSnapshot};

/// Page shell state: the selected symbol plus every widget's fetch state.
#[derive(Debug)]
pub struct Dashboard {
    store: SymbolStore,
    snapshot: Remote<StockSnapshot>,
    news: Remote<NewsFeed>,
    prediction: PredictionPanel,
    search: SearchState,
    next_request: u64,
}

impl Dashboard {
    pub fn new(store: SymbolStore, risk_profile: RiskProfile) -> Self {
        Self {
            store,
            snapshot: Remote::default(),
            news: Remote::default(),
            prediction: PredictionPanel::new(risk_profile),
            search: SearchState::new(),
            next_request: 0,
        }
    }

    pub fn store(&self) -> &SymbolStore {
        &self.store
    }

    pub fn symbol(&self) -> String {
        self.store.current()
    }

    pub fn snapshot(&self) -> &Remote<StockSnapshot> {
        &self.snapshot
    }

    pub fn news(&self) -> &Remote<NewsFeed> {
        &self.news
    }

    pub fn prediction(&self) -> &PredictionPanel {
        &self.prediction
    }

    pub fn prediction_mut(&mut self) -> &mut PredictionPanel {
        &mut self.prediction
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    fn ticket(&mut self, key: &str) -> RequestTicket {
        self.next_request += 1;
        RequestTicket::new(self.next_request, key.to_string())
    }

    fn load_symbol(&mut self, symbol: &str) -> Vec<Command> {
        let stock = self.ticket(symbol);
        let news = self.ticket(symbol);
        self.snapshot.begin(stock.clone());
        self.news.begin(news.clone());
        self.prediction.clear();
        vec![Command::FetchStock(stock), Command::FetchNews(news)]
    }

    /// Initial load for the symbol the store starts with.
    pub fn start(&mut self) -> Vec<Command> {
        let symbol = self.symbol();
        if symbol.is_empty() {
            return Vec::new();
        }
        tracing::info!(symbol = symbol.as_str(), "loading dashboard");
        self.load_symbol(&symbol)
    }

    pub fn select_symbol(&mut self, symbol: &str) -> Vec<Command> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() || !self.store.set(&symbol) {
            return Vec::new();
        }
        tracing::info!(symbol = symbol.as_str(), "symbol selected");
        self.load_symbol(&symbol)
    }

    /// Periodic or manual snapshot refresh; keeps the current snapshot on screen meanwhile.
    pub fn refresh(&mut self, symbol: &str) -> Option<Command> {
        if symbol.is_empty() || !self.store.is_current(symbol) || self.snapshot.is_fetching() {
            return None;
        }
        tracing::info!(symbol, "refreshing snapshot");
        let ticket = self.ticket(symbol);
        self.snapshot.refetch(ticket.clone());
        Some(Command::FetchStock(ticket))
    }

    pub fn analyze(&mut self) -> Option<Command> {
        let symbol = self.symbol();
        if symbol.is_empty() || !self.prediction.can_analyze() {
            return None;
        }
        let risk_profile = self.prediction.risk_profile();
        tracing::info!(symbol = symbol.as_str(), %risk_profile, "requesting analysis");
        let ticket = self.ticket(&symbol);
        self.prediction.begin(ticket.clone());
        Some(Command::FetchPrediction(ticket, risk_profile))
    }

    pub fn begin_search(&mut self, query: &str) -> Option<Command> {
        let ticket = self.ticket(query);
        if self.search.begin(query, ticket.clone()) {
            Some(Command::Search(ticket))
        } else {
            None
        }
    }

    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::Stock(ticket, result) => self.snapshot.resolve(&ticket, result),
            FetchOutcome::News(ticket, result) => self
                .news
                .resolve(&ticket, result.and_then(NewsFeed::into_checked)),
            FetchOutcome::Prediction(ticket, result) => self.prediction.resolve(&ticket, result),
            FetchOutcome::Search(ticket, result) => self.search.resolve(&ticket, result),
        }
    }
}
