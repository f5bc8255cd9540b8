use clap::Parser;
use marketpulse_tui::{
    api::MarketPulseApi,
    app::{App, Dashboard, SymbolStore},
    config::Config,
    logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::parse().validate()?;
    logging::init(config.log_file.as_deref())?;

    let api = MarketPulseApi::new(&config.api_url)?;
    let dashboard = Dashboard::new(SymbolStore::new(&config.symbol), config.risk_profile);

    let mut app = App::new(
        dashboard,
        api,
        config.refresh_interval(),
        config.search_debounce(),
    );
    app.run().await?;

    Ok(())
}
