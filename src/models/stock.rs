use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSnapshot {
    symbol: String,
    #[serde(default)]
    name: String,
    current_price: Decimal,
    #[serde(default)]
    previous_close: Decimal,
    #[serde(default)]
    change: Decimal,
    #[serde(default)]
    change_percent: Decimal,
    #[serde(default)]
    day_high: Decimal,
    #[serde(default)]
    day_low: Decimal,
    #[serde(default)]
    volume: Decimal,
    #[serde(default)]
    market_cap: Option<Decimal>,
    #[serde(default)]
    fifty_two_week_high: Decimal,
    #[serde(default)]
    fifty_two_week_low: Decimal,
    #[serde(default)]
    chart_data: Vec<ChartPoint>,
    #[serde(default)]
    timestamp: String,
}

impl StockSnapshot {
    pub fn is_positive(&self) -> bool {
        self.change >= Decimal::ZERO
    }

    pub fn prices(&self) -> Vec<Decimal> {
        self.chart_data.iter().map(|point| point.price).collect()
    }
}

#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct ChartPoint {
    time: String,
    price: Decimal,
    #[serde(default)]
    volume: Decimal,
}
