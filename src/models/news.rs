use anyhow::{Error, Result};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    url_to_image: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize)]
pub struct NewsFeed {
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    articles: Vec<NewsArticle>,
    #[serde(default)]
    error: Option<String>,
}

impl NewsFeed {
    /// The news endpoint reports some failures inside a 200 response.
    pub fn into_checked(self) -> Result<Self> {
        match self.error {
            Some(error) => Err(Error::msg(format!(
                "News for {} unavailable: {}",
                self.symbol, error
            ))),
            None => Ok(self),
        }
    }
}
