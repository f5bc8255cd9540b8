use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

const POPULAR_STOCKS: [(&str, &str); 5] = [
    ("AAPL", "Apple Inc."),
    ("GOOGL", "Alphabet Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("TSLA", "Tesla Inc."),
    ("NVDA", "NVIDIA Corporation"),
];

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct SearchResult {
    symbol: String,
    #[serde(default)]
    name: String,
}

/// Shown whenever the search query is empty.
pub fn popular_stocks() -> Vec<SearchResult> {
    POPULAR_STOCKS
        .iter()
        .map(|(symbol, name)| SearchResult::new(symbol.to_string(), name.to_string()))
        .collect()
}
