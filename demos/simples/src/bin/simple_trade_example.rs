use oanda_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::from_default_credentials_file()?;
    let client = Client::new(config).await?;

    let settings = client.get_instrument_settings(&["EUR_USD"])?;
    info!("EUR_USD settings: {}", settings["EUR_USD"]);

    let prices = client.get_prices(&["EUR_USD"]).await?;
    let Some(price) = prices.first() else {
        warn!("No price returned for EUR_USD");
        return Ok(());
    };
    info!("EUR_USD bid {} ask {} spread {:.5}", price.bid, price.ask, price.spread());

    let trade = TradeRequest::new("EUR_USD", 100.0, Direction::Buy)
        .with_stop_loss(price.bid - 0.0050)
        .with_take_profit(price.ask + 0.0100);
    let transaction_id = client.place_trade(&trade).await?;
    info!("Trade filled by transaction {}", transaction_id);

    let changes = client.get_state_changes(&transaction_id).await?;
    for opened in &changes.changes.trades_opened {
        info!("Opened trade {} at {}", opened.id, opened.price);
    }

    for open in client.get_open_trades().await? {
        if open.instrument == "EUR_USD" {
            client.close_trade(&open.id).await?;
            info!("Closed trade {}", open.id);
        }
    }

    Ok(())
}
