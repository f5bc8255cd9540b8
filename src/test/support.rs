use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};

/// Request counters of the fake API, one per endpoint.
#[derive(Clone, Default)]
pub struct Hits {
    stock: Arc<AtomicUsize>,
    search: Arc<AtomicUsize>,
    news: Arc<AtomicUsize>,
    predict: Arc<AtomicUsize>,
}

impl Hits {
    pub fn stock(&self) -> usize {
        self.stock.load(Ordering::SeqCst)
    }

    pub fn search(&self) -> usize {
        self.search.load(Ordering::SeqCst)
    }

    pub fn news(&self) -> usize {
        self.news.load(Ordering::SeqCst)
    }

    pub fn predict(&self) -> usize {
        self.predict.load(Ordering::SeqCst)
    }
}

pub fn snapshot_json(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "name": format!("{} Corp.", symbol),
        "currentPrice": 182.52,
        "previousClose": 180.0,
        "change": 2.52,
        "changePercent": 1.4,
        "dayHigh": 183.1,
        "dayLow": 179.8,
        "volume": 52340000,
        "marketCap": 2850000000000u64,
        "fiftyTwoWeekHigh": 199.62,
        "fiftyTwoWeekLow": 164.08,
        "chartData": [
            { "time": "2024-05-01T14:30:00Z", "price": 180.1, "volume": 120000 },
            { "time": "2024-05-01T14:35:00Z", "price": 181.4, "volume": 98000 },
            { "time": "2024-05-01T14:40:00Z", "price": 182.52, "volume": 143000 }
        ],
        "timestamp": "2024-05-01T14:40:05Z"
    })
}

async fn stock(
    State(hits): State<Hits>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    hits.stock.fetch_add(1, Ordering::SeqCst);
    if symbol == "FAIL" {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(snapshot_json(&symbol)))
}

async fn search(
    State(hits): State<Hits>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    hits.search.fetch_add(1, Ordering::SeqCst);
    let query = params.get("q").cloned().unwrap_or_default();
    Json(json!([
        { "symbol": query, "name": format!("{} Holdings", query) },
        { "symbol": format!("{}X", query), "name": "Other Match" }
    ]))
}

async fn news(State(hits): State<Hits>, Path(symbol): Path<String>) -> Json<Value> {
    hits.news.fetch_add(1, Ordering::SeqCst);
    if symbol == "SOFT" {
        return Json(json!({ "symbol": symbol, "articles": [], "error": "rate limited" }));
    }
    Json(json!({
        "symbol": symbol,
        "articles": [
            {
                "title": format!("{} beats estimates", symbol),
                "description": "Quarterly results came in ahead of expectations.",
                "url": "https://news.example.com/a",
                "source": "Example Wire",
                "publishedAt": "2024-05-01T12:00:00Z",
                "urlToImage": null
            },
            {
                "title": "Sector roundup",
                "url": "https://news.example.com/b"
            }
        ]
    }))
}

async fn predict(State(hits): State<Hits>, Json(body): Json<Value>) -> Json<Value> {
    hits.predict.fetch_add(1, Ordering::SeqCst);
    let symbol = body["symbol"].as_str().unwrap_or_default().to_string();
    let risk = body["riskProfile"].as_str().unwrap_or_default().to_string();
    Json(json!({
        "symbol": symbol,
        "prediction": format!("Risk profile {}: momentum is fading, HOLD {} for now.", risk, symbol),
        "timestamp": "2024-05-01T14:41:00Z"
    }))
}

/// Serves a fake MarketPulse API on an ephemeral port and returns its base URL.
pub async fn spawn_fake_api() -> (String, Hits) {
    let hits = Hits::default();
    let router = Router::new()
        .route("/api/stock/:symbol", get(stock))
        .route("/api/stocks/search", get(search))
        .route("/api/news/:symbol", get(news))
        .route("/api/predict", post(predict))
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), hits)
}
