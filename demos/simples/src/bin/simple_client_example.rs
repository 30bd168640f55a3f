use oanda_client::application::client::Client;
use oanda_client::application::interfaces::account::AccountService;
use oanda_client::application::interfaces::market::MarketService;
use oanda_client::model::requests::CandlesRequest;
use oanda_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    // Credentials come from OANDA_API_KEY / OANDA_ACCOUNT_ID (or a .env file)
    info!("Creating client and downloading instruments...");
    let client = Client::from_env().await?;
    info!("✓ Client created with {} instruments", client.instruments().len());

    let summary = client.get_account_summary().await?;
    info!("Account summary: {}", summary);

    let request = CandlesRequest::new("EUR_USD")
        .with_granularity("M15")
        .with_count(20);
    let table = client.get_candles_table(&request).await?;
    info!("EUR_USD M15 candles:\n{}", table);

    let last = client.last_complete_candle("EUR_USD", "M15").await?;
    info!("Last complete candle: {}", last.to_rfc3339());

    if let Some(web) = client.web_api_candles("EUR_USD", "M15", 20).await? {
        info!("Chart payload: {}", serde_json::to_string(&web)?);
    }

    Ok(())
}
