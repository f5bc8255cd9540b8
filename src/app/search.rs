use anyhow::Result;
use ratatui::widgets::ListState;

use super::remote::RequestTicket;
use crate::models::{SearchResult, popular_stocks};

/// What the event loop has to do after the query text changed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QueryChange {
    ShowPopular,
    Debounce(String),
}

#[derive(Debug)]
pub struct SearchState {
    query: String,
    popular: Vec<SearchResult>,
    results: Vec<SearchResult>,
    open: bool,
    in_flight: Option<RequestTicket>,
    list_state: ListState,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            popular: popular_stocks(),
            results: Vec::new(),
            open: false,
            in_flight: None,
            list_state: ListState::default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Popular tickers for an empty query, otherwise the latest search results.
    pub fn visible_results(&self) -> &[SearchResult] {
        if self.query.is_empty() {
            &self.popular
        } else {
            &self.results
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        if self.list_state.selected().is_none() && !self.visible_results().is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_query(&mut self, query: &str) -> QueryChange {
        self.query = query.to_uppercase();
        self.open = true;
        self.list_state = ListState::default();

        if self.query.is_empty() {
            self.in_flight = None;
            self.list_state.select(Some(0));
            return QueryChange::ShowPopular;
        }
        QueryChange::Debounce(self.query.clone())
    }

    pub fn push_char(&mut self, c: char) -> QueryChange {
        let query = format!("{}{}", self.query, c);
        self.set_query(&query)
    }

    pub fn pop_char(&mut self) -> QueryChange {
        let mut query = self.query.clone();
        query.pop();
        self.set_query(&query)
    }

    /// Called when the debounce timer fires; a query that changed since is ignored.
    pub fn begin(&mut self, query: &str, ticket: RequestTicket) -> bool {
        if query.is_empty() || query != self.query {
            return false;
        }
        self.in_flight = Some(ticket);
        true
    }

    pub fn resolve(&mut self, ticket: &RequestTicket, result: Result<Vec<SearchResult>>) -> bool {
        if self.in_flight.as_ref() != Some(ticket) {
            tracing::debug!(query = ticket.key().as_str(), "discarding stale search results");
            return false;
        }

        self.in_flight = None;
        self.results = match result {
            Ok(results) => results,
            Err(e) => {
                tracing::debug!(query = ticket.key().as_str(), error = %e, "search failed");
                Vec::new()
            }
        };
        self.list_state = ListState::default();
        if !self.results.is_empty() {
            self.list_state.select(Some(0));
        }
        true
    }

    /// Rows are hidden behind the searching indicator while a request is in flight.
    fn is_selectable(&self) -> bool {
        !self.is_loading() && !self.visible_results().is_empty()
    }

    pub fn highlight(&mut self, index: usize) {
        if self.is_selectable() && index < self.visible_results().len() {
            self.list_state.select(Some(index));
        }
    }

    pub fn next(&mut self) {
        if !self.is_selectable() {
            return;
        }
        let len = self.visible_results().len();
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if !self.is_selectable() {
            return;
        }
        let len = self.visible_results().len();
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Picks the highlighted row, clearing the query and closing the panel.
    pub fn take_selection(&mut self) -> Option<String> {
        if !self.is_selectable() {
            return None;
        }
        let symbol = self
            .list_state
            .selected()
            .and_then(|i| self.visible_results().get(i))
            .map(|result| result.symbol().to_string())?;

        self.query.clear();
        self.in_flight = None;
        self.open = false;
        self.list_state = ListState::default();
        Some(symbol)
    }
}
