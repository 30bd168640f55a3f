// Tests against the practice API; they need ./api/api_creds.json

use oanda_client::prelude::*;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_live_prices_and_candles() {
    setup_logger();
    let config = Config::from_default_credentials_file()
        .expect("Failed to load credentials")
        .without_persistence();
    let client = Client::new(config).await.expect("Failed to create client");
    info!("Account has {} instruments", client.instruments().len());

    let prices = client
        .get_prices(&["EUR_USD", "USD_JPY"])
        .await
        .expect("Failed to get prices");
    for price in &prices {
        info!("{}", price);
        assert!(price.ask >= price.bid);
    }

    let table = client
        .get_candles_table(&CandlesRequest::new("EUR_USD").with_granularity("M5").with_count(20))
        .await
        .expect("Failed to get candles");
    info!("\n{}", table);
    assert!(table.len() <= 20);
}

#[tokio::test]
#[ignore]
async fn test_live_account_summary() {
    setup_logger();
    let client = Client::new(
        Config::from_default_credentials_file()
            .expect("Failed to load credentials")
            .without_persistence(),
    )
    .await
    .expect("Failed to create client");

    let summary = client
        .get_account_summary()
        .await
        .expect("Failed to get summary");
    info!("{}", summary);

    let last_id = client
        .get_last_transaction_id()
        .await
        .expect("Failed to get last transaction id");
    let changes = client
        .get_state_changes(&last_id)
        .await
        .expect("Failed to get changes");
    info!("{}", changes);
}
