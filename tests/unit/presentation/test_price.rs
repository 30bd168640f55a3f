use oanda_client::error::AppError;
use oanda_client::presentation::price::{ApiPrice, ClientPrice, HomeConversion};
use serde_json::json;

fn conversions() -> Vec<HomeConversion> {
    serde_json::from_value(json!([
        {"currency": "USD", "accountGain": "1", "accountLoss": "1", "positionValue": "1"},
        {"currency": "JPY", "accountGain": "0.00661", "accountLoss": "0.00662", "positionValue": "0.006615"}
    ]))
    .unwrap()
}

fn price(instrument: &str, bid: &str, ask: &str) -> ClientPrice {
    serde_json::from_value(json!({
        "type": "PRICE",
        "instrument": instrument,
        "time": "2024-03-01T10:00:00.000000000Z",
        "tradeable": true,
        "bids": [{"price": bid, "liquidity": 1000000}, {"price": "0", "liquidity": 2000000}],
        "asks": [{"price": ask, "liquidity": 1000000}],
        "closeoutBid": bid,
        "closeoutAsk": ask
    }))
    .unwrap()
}

#[test]
fn test_api_price_uses_quote_currency_conversion() {
    let api_price = ApiPrice::new(&price("USD_JPY", "150.100", "150.112"), &conversions()).unwrap();
    assert_eq!(api_price.bid, 150.1);
    assert_eq!(api_price.ask, 150.112);
    assert_eq!(api_price.sell_conv, Some(0.006615));
    assert_eq!(api_price.buy_conv, Some(0.006615));
    assert!((api_price.spread() - 0.012).abs() < 1e-9);
}

#[test]
fn test_api_price_without_matching_conversion() {
    let api_price = ApiPrice::new(&price("EUR_GBP", "0.85", "0.86"), &conversions()).unwrap();
    assert_eq!(api_price.sell_conv, None);
    assert_eq!(api_price.buy_conv, None);
    assert!((api_price.mid() - 0.855).abs() < 1e-9);
}

#[test]
fn test_api_price_with_empty_book() {
    let mut raw = price("EUR_USD", "1.1", "1.2");
    raw.asks.clear();
    match ApiPrice::new(&raw, &conversions()) {
        Err(AppError::MissingKeys { missing, .. }) => assert_eq!(missing, vec!["asks"]),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_client_price_optional_fields() {
    let raw: ClientPrice = serde_json::from_value(json!({
        "instrument": "EUR_USD",
        "time": "2024-03-01T10:00:00Z"
    }))
    .unwrap();
    assert!(raw.bids.is_empty());
    assert!(!raw.tradeable);
    assert_eq!(raw.closeout_bid, None);
}
