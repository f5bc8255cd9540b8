use anyhow::{Context, Result};
use reqwest::{Client, Url};

use super::{dto::PredictRequestDto, utils::make_request};
use crate::models::{NewsFeed, Prediction, RiskProfile, SearchResult, StockSnapshot};

pub const DEFAULT_API_BASE_URL: &str = "https://marketpullse-ai.onrender.com";

#[derive(Clone, Debug)]
pub struct MarketPulseApi {
    client: Client,
    base_url: Url,
}

impl MarketPulseApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid API base URL '{}'", base_url))?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("API base URL cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get_stock(&self, symbol: &str) -> Result<StockSnapshot> {
        let url = self.endpoint(&["api", "stock", symbol])?;
        tracing::debug!(%url, "fetching stock snapshot");
        make_request(
            self.client.get(url),
            &format!("Failed to fetch stock data for {}", symbol),
        )
        .await
    }

    pub async fn search_stocks(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = self.endpoint(&["api", "stocks", "search"])?;
        tracing::debug!(%url, query, "searching stocks");
        make_request(
            self.client.get(url).query(&[("q", query)]),
            "Failed to search stocks",
        )
        .await
    }

    pub async fn get_news(&self, symbol: &str) -> Result<NewsFeed> {
        let url = self.endpoint(&["api", "news", symbol])?;
        tracing::debug!(%url, "fetching news");
        make_request(
            self.client.get(url),
            &format!("Failed to fetch news for {}", symbol),
        )
        .await
    }

    pub async fn get_prediction(
        &self,
        symbol: &str,
        risk_profile: RiskProfile,
    ) -> Result<Prediction> {
        let url = self.endpoint(&["api", "predict"])?;
        let body = PredictRequestDto::new(symbol.to_string(), risk_profile);
        tracing::debug!(%url, symbol, %risk_profile, "requesting prediction");
        make_request(
            self.client.post(url).json(&body),
            &format!("Failed to fetch prediction for {}", symbol),
        )
        .await
    }
}
