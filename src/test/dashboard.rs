#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use tokio::sync::mpsc;

    use crate::{
        api::MarketPulseApi,
        app::{
            Dashboard, SymbolStore,
            dispatch::dispatch,
            event::{AppEvent, Command, FetchOutcome},
            remote::Loadable,
        },
        models::{RiskProfile, StockSnapshot},
        test::support::{snapshot_json, spawn_fake_api},
    };

    fn dashboard() -> Dashboard {
        Dashboard::new(SymbolStore::new("AAPL"), RiskProfile::Medium)
    }

    fn snapshot(symbol: &str) -> StockSnapshot {
        serde_json::from_value(snapshot_json(symbol)).unwrap()
    }

    #[test]
    fn start_loads_snapshot_and_news() {
        let mut dashboard = dashboard();
        let commands = dashboard.start();

        assert_eq!(commands.len(), 2);
        assert!(matches!(&commands[0], Command::FetchStock(t) if t.key() == "AAPL"));
        assert!(matches!(&commands[1], Command::FetchNews(t) if t.key() == "AAPL"));
        assert_eq!(dashboard.snapshot().state(), &Loadable::Loading);
    }

    #[test]
    fn selecting_popular_ticker_fetches_snapshot_and_news_only() {
        let mut dashboard = dashboard();
        dashboard.start();

        dashboard.search_mut().open();
        dashboard.search_mut().highlight(3);
        let symbol = dashboard.search_mut().take_selection().unwrap();
        let commands = dashboard.select_symbol(&symbol);

        assert_eq!(dashboard.symbol(), "TSLA");
        assert!(!dashboard.search().is_open());
        assert_eq!(dashboard.search().query(), "");
        assert_eq!(commands.len(), 2);
        assert!(matches!(&commands[0], Command::FetchStock(t) if t.key() == "TSLA"));
        assert!(matches!(&commands[1], Command::FetchNews(t) if t.key() == "TSLA"));
        assert!(
            !commands
                .iter()
                .any(|c| matches!(c, Command::FetchPrediction(..)))
        );
    }

    #[test]
    fn reselecting_current_symbol_is_a_no_op() {
        let mut dashboard = dashboard();
        dashboard.start();
        assert!(dashboard.select_symbol("aapl").is_empty());
    }

    #[test]
    fn stale_snapshot_is_discarded() {
        let mut dashboard = dashboard();
        let first = dashboard.start();
        let second = dashboard.select_symbol("MSFT");

        let (Command::FetchStock(old), Command::FetchStock(new)) = (&first[0], &second[0]) else {
            panic!("expected stock fetches");
        };

        assert!(dashboard.apply(FetchOutcome::Stock(new.clone(), Ok(snapshot("MSFT")))));
        assert!(!dashboard.apply(FetchOutcome::Stock(old.clone(), Ok(snapshot("AAPL")))));
        assert_eq!(dashboard.snapshot().data().unwrap().symbol(), "MSFT");
    }

    #[test]
    fn snapshot_failure_and_news_soft_error() {
        let mut dashboard = dashboard();
        let commands = dashboard.start();
        let (Command::FetchStock(stock), Command::FetchNews(news)) = (&commands[0], &commands[1])
        else {
            panic!("expected initial fetches");
        };

        dashboard.apply(FetchOutcome::Stock(stock.clone(), Err(anyhow!("boom"))));
        let feed = serde_json::from_value(serde_json::json!({
            "symbol": "AAPL", "articles": [], "error": "quota"
        }))
        .unwrap();
        dashboard.apply(FetchOutcome::News(news.clone(), Ok(feed)));

        assert!(dashboard.snapshot().is_failed());
        assert!(dashboard.news().is_failed());
    }

    #[test]
    fn refresh_keeps_snapshot_visible() {
        let mut dashboard = dashboard();
        let commands = dashboard.start();
        let Command::FetchStock(ticket) = &commands[0] else {
            panic!("expected stock fetch");
        };
        dashboard.apply(FetchOutcome::Stock(ticket.clone(), Ok(snapshot("AAPL"))));

        assert!(dashboard.refresh("MSFT").is_none());
        let refresh = dashboard.refresh("AAPL").unwrap();
        assert!(dashboard.snapshot().data().is_some());
        assert!(dashboard.refresh("AAPL").is_none());

        let Command::FetchStock(ticket) = refresh else {
            panic!("expected stock fetch");
        };
        dashboard.apply(FetchOutcome::Stock(ticket, Err(anyhow!("timeout"))));
        assert!(dashboard.snapshot().is_failed());
    }

    #[test]
    fn analyze_is_explicit_and_single_flight() {
        let mut dashboard = dashboard();
        dashboard.start();
        dashboard.prediction_mut().cycle_risk_profile();

        let command = dashboard.analyze().unwrap();
        assert!(matches!(
            &command,
            Command::FetchPrediction(t, RiskProfile::High) if t.key() == "AAPL"
        ));
        assert!(dashboard.analyze().is_none());

        // A new risk tier is a new key: the pending answer no longer applies.
        dashboard.prediction_mut().cycle_risk_profile();
        let Command::FetchPrediction(ticket, _) = command else {
            panic!("expected prediction fetch");
        };
        let prediction = serde_json::from_value(serde_json::json!({
            "symbol": "AAPL", "prediction": "BUY", "timestamp": ""
        }))
        .unwrap();
        assert!(!dashboard.apply(FetchOutcome::Prediction(ticket, Ok(prediction))));
        assert_eq!(dashboard.prediction().remote().state(), &Loadable::Idle);
        assert!(dashboard.analyze().is_some());
    }

    #[tokio::test]
    async fn selecting_symbol_hits_stock_and_news_endpoints_once() {
        let (base_url, hits) = spawn_fake_api().await;
        let api = MarketPulseApi::new(&base_url).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut dashboard = dashboard();

        for command in dashboard.select_symbol("TSLA") {
            dispatch(&api, &tx, command);
        }
        for _ in 0..2 {
            let Some(AppEvent::Fetched(outcome)) = rx.recv().await else {
                panic!("expected fetch outcome");
            };
            assert!(dashboard.apply(outcome));
        }

        assert_eq!(hits.stock(), 1);
        assert_eq!(hits.news(), 1);
        assert_eq!(hits.predict(), 0);
        assert_eq!(dashboard.snapshot().data().unwrap().symbol(), "TSLA");
        assert_eq!(dashboard.news().data().unwrap().articles().len(), 2);

        let command = dashboard.analyze().unwrap();
        dispatch(&api, &tx, command).await.unwrap();
        let Some(AppEvent::Fetched(outcome)) = rx.recv().await else {
            panic!("expected prediction outcome");
        };
        assert!(dashboard.apply(outcome));
        assert_eq!(hits.predict(), 1);
        assert!(dashboard.prediction().remote().data().is_some());
    }
}
