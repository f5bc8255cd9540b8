pub mod news;
pub mod prediction;
pub mod search;
pub mod stock;

pub use news::{NewsArticle, NewsFeed};
pub use prediction::{Prediction, Recommendation, RiskProfile};
pub use search::{SearchResult, popular_stocks};
pub use stock::{ChartPoint, StockSnapshot};
