use oanda_client::error::AppError;
use oanda_client::model::requests::{CandlesRequest, CreateOrderRequest, TradeRequest};
use oanda_client::presentation::instrument::Instrument;
use oanda_client::presentation::order::Direction;
use serde_json::json;

fn usd_jpy() -> Instrument {
    serde_json::from_value(json!({
        "name": "USD_JPY",
        "type": "CURRENCY",
        "displayName": "USD/JPY",
        "pipLocation": -2,
        "displayPrecision": 3,
        "tradeUnitsPrecision": 0,
        "minimumTradeSize": "1"
    }))
    .unwrap()
}

fn eur_usd_whole_units() -> Instrument {
    serde_json::from_value(json!({
        "name": "EUR_USD",
        "type": "CURRENCY",
        "displayName": "EUR/USD",
        "pipLocation": -4,
        "displayPrecision": 2,
        "tradeUnitsPrecision": 0,
        "minimumTradeSize": "1"
    }))
    .unwrap()
}

#[test]
fn test_candles_path() {
    assert_eq!(
        CandlesRequest::new("USD_JPY").path(),
        "instruments/USD_JPY/candles"
    );
}

#[test]
fn test_candles_query_with_custom_values() {
    let query = CandlesRequest::new("USD_JPY")
        .with_granularity("M15")
        .with_price("B")
        .with_count(250)
        .query()
        .unwrap();
    assert_eq!(
        query,
        vec![
            ("granularity", "M15".to_string()),
            ("price", "B".to_string()),
            ("count", "250".to_string()),
        ]
    );
}

#[test]
fn test_candles_query_empty_instrument() {
    let result = CandlesRequest::new("").query();
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_trade_for_other_instrument_is_rejected() {
    let result = TradeRequest::new("EUR_USD", 10.0, Direction::Buy).to_order(&usd_jpy());
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_trade_with_non_finite_units_is_rejected() {
    let result = TradeRequest::new("USD_JPY", f64::NAN, Direction::Buy).to_order(&usd_jpy());
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_trade_without_direction_keeps_units() {
    let order = TradeRequest::new("USD_JPY", 250.4, Direction::None)
        .to_order(&usd_jpy())
        .unwrap();
    assert_eq!(order.order.units, "250");
}

#[test]
fn test_trade_prices_use_display_precision() {
    let order = TradeRequest::new("USD_JPY", 1000.0, Direction::Sell)
        .with_stop_loss(151.23456)
        .with_take_profit(149.9)
        .to_order(&usd_jpy())
        .unwrap();
    let body = serde_json::to_value(&order).unwrap();
    assert_eq!(body["order"]["units"], "-1000");
    assert_eq!(body["order"]["stopLossOnFill"]["price"], "151.235");
    assert_eq!(body["order"]["takeProfitOnFill"]["price"], "149.900");
}

#[test]
fn test_trade_ties_round_to_even() {
    let order = TradeRequest::new("EUR_USD", 2.5, Direction::Buy)
        .with_stop_loss(0.125)
        .with_take_profit(0.375)
        .to_order(&eur_usd_whole_units())
        .unwrap();
    let body = serde_json::to_value(&order).unwrap();
    assert_eq!(body["order"]["units"], "2");
    assert_eq!(body["order"]["stopLossOnFill"]["price"], "0.12");
    assert_eq!(body["order"]["takeProfitOnFill"]["price"], "0.38");

    let sell = TradeRequest::new("EUR_USD", 3.5, Direction::Sell)
        .to_order(&eur_usd_whole_units())
        .unwrap();
    assert_eq!(sell.order.units, "-4");
}

#[test]
fn test_market_order_sends_units_unchanged() {
    let order = CreateOrderRequest::market("USD_JPY", 1234.5);
    assert_eq!(order.order.units, "1234.5");
    let body = serde_json::to_value(&order).unwrap();
    assert!(body["order"].get("stopLossOnFill").is_none());
}
