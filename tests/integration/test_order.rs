// Order and trade endpoints

use crate::common::{self, account_path};
use mockito::{Matcher, Server};
use oanda_client::prelude::*;
use serde_json::json;

fn fill_body(id: &str, units: &str) -> String {
    json!({
        "orderCreateTransaction": {"id": "6410", "type": "MARKET_ORDER"},
        "orderFillTransaction": {
            "id": id,
            "time": "2024-03-01T10:00:00.000000000Z",
            "type": "ORDER_FILL",
            "orderID": "6410",
            "instrument": "EUR_USD",
            "units": units,
            "price": "1.08112",
            "pl": "0.0000",
            "accountBalance": "100000.0000",
            "reason": "MARKET_ORDER",
            "tradeOpened": {"tradeID": id, "units": units, "price": "1.08112"}
        },
        "relatedTransactionIDs": ["6410", id],
        "lastTransactionID": id
    })
    .to_string()
}

#[tokio::test]
async fn test_place_market_order() {
    let mut server = Server::new_async().await;
    let (client, _dir) = common::create_test_client(&mut server).await;
    let mock = server
        .mock("POST", account_path("orders").as_str())
        .match_body(Matcher::Json(json!({
            "order": {"units": "-250", "instrument": "EUR_USD", "type": "MARKET"}
        })))
        .with_status(201)
        .with_body(fill_body("6411", "-250"))
        .create_async()
        .await;

    let fill = client.place_market_order("EUR_USD", -250.0).await.unwrap();

    mock.assert_async().await;
    assert_eq!(fill.id, "6411");
    assert_eq!(fill.units, Some(-250.0));
    assert_eq!(fill.trade_opened.unwrap().trade_id, "6411");
}

#[tokio::test]
async fn test_place_trade_sell_negates_units() {
    let mut server = Server::new_async().await;
    let (client, _dir) = common::create_test_client(&mut server).await;
    let mock = server
        .mock("POST", account_path("orders").as_str())
        .match_body(Matcher::PartialJson(json!({
            "order": {"units": "-100", "instrument": "EUR_USD", "type": "MARKET"}
        })))
        .with_status(201)
        .with_body(fill_body("6411", "-100"))
        .create_async()
        .await;

    let id = client
        .place_trade(&TradeRequest::new("EUR_USD", 100.0, Direction::Sell))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(id, "6411");
}

#[tokio::test]
async fn test_place_trade_buy_keeps_units() {
    let mut server = Server::new_async().await;
    let (client, _dir) = common::create_test_client(&mut server).await;
    let mock = server
        .mock("POST", account_path("orders").as_str())
        .match_body(Matcher::PartialJson(json!({"order": {"units": "100"}})))
        .with_status(201)
        .with_body(fill_body("6420", "100"))
        .create_async()
        .await;

    let id = client
        .place_trade(&TradeRequest::new("EUR_USD", 100.0, Direction::Buy))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(id, "6420");
}

#[tokio::test]
async fn test_place_trade_rounds_units_and_prices() {
    let mut server = Server::new_async().await;
    let (client, _dir) = common::create_test_client(&mut server).await;
    let mock = server
        .mock("POST", account_path("orders").as_str())
        .match_body(Matcher::Json(json!({
            "order": {
                "units": "13",
                "instrument": "XAU_USD",
                "type": "MARKET",
                "stopLossOnFill": {"price": "1.23"},
                "takeProfitOnFill": {"price": "2.35"}
            }
        })))
        .with_status(201)
        .with_body(fill_body("6430", "13"))
        .create_async()
        .await;

    let trade = TradeRequest::new("XAU_USD", 12.7, Direction::Buy)
        .with_stop_loss(1.23456)
        .with_take_profit(2.349);
    let id = client.place_trade(&trade).await.unwrap();

    mock.assert_async().await;
    assert_eq!(id, "6430");
}

#[tokio::test]
async fn test_place_trade_unknown_instrument_sends_nothing() {
    let mut server = Server::new_async().await;
    let (client, _dir) = common::create_test_client(&mut server).await;
    let mock = server
        .mock("POST", account_path("orders").as_str())
        .expect(0)
        .create_async()
        .await;

    let result = client
        .place_trade(&TradeRequest::new("GBP_NZD", 100.0, Direction::Buy))
        .await;

    mock.assert_async().await;
    match result {
        Err(AppError::UnknownInstrument(name)) => assert_eq!(name, "GBP_NZD"),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_place_trade_rejected_order() {
    let mut server = Server::new_async().await;
    let (client, _dir) = common::create_test_client(&mut server).await;
    let rejection = json!({
        "orderRejectTransaction": {"id": "6440", "rejectReason": "INSUFFICIENT_MARGIN"},
        "errorCode": "INSUFFICIENT_MARGIN",
        "errorMessage": "Insufficient margin"
    });
    let _mock = server
        .mock("POST", account_path("orders").as_str())
        .with_status(400)
        .with_body(rejection.to_string())
        .create_async()
        .await;

    let err = client
        .place_trade(&TradeRequest::new("EUR_USD", 1_000_000.0, Direction::Buy))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(err.body(), Some(&rejection));
}

#[tokio::test]
async fn test_place_trade_cancelled_order() {
    let mut server = Server::new_async().await;
    let (client, _dir) = common::create_test_client(&mut server).await;
    let _mock = server
        .mock("POST", account_path("orders").as_str())
        .with_status(201)
        .with_body(
            json!({
                "orderCreateTransaction": {"id": "6450"},
                "orderCancelTransaction": {"id": "6451", "reason": "MARKET_HALTED"},
                "lastTransactionID": "6451"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client
        .place_trade(&TradeRequest::new("EUR_USD", 10.0, Direction::Buy))
        .await
        .unwrap_err();
    assert!(err.is_schema_mismatch());
}

#[tokio::test]
async fn test_close_trade() {
    let mut server = Server::new_async().await;
    let (client, _dir) = common::create_test_client(&mut server).await;
    let mock = server
        .mock("PUT", account_path("trades/6411/close").as_str())
        .with_status(200)
        .with_body(r#"{"orderFillTransaction": {"id": "6460"}, "lastTransactionID": "6460"}"#)
        .create_async()
        .await;

    client.close_trade("6411").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_close_unknown_trade() {
    let mut server = Server::new_async().await;
    let (client, _dir) = common::create_test_client(&mut server).await;
    let _mock = server
        .mock("PUT", account_path("trades/1/close").as_str())
        .with_status(404)
        .with_body(r#"{"errorCode": "NO_SUCH_TRADE", "errorMessage": "The Trade specified does not exist"}"#)
        .create_async()
        .await;

    let err = client.close_trade("1").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.body().unwrap()["errorCode"], "NO_SUCH_TRADE");
}

#[tokio::test]
async fn test_place_market_order_non_finite_units_sends_nothing() {
    let mut server = Server::new_async().await;
    let (client, _dir) = common::create_test_client(&mut server).await;
    let mock = server
        .mock("POST", account_path("orders").as_str())
        .expect(0)
        .create_async()
        .await;

    let nan = client.place_market_order("EUR_USD", f64::NAN).await;
    let inf = client.place_market_order("EUR_USD", f64::INFINITY).await;

    mock.assert_async().await;
    assert!(matches!(nan, Err(AppError::InvalidInput(_))));
    assert!(matches!(inf, Err(AppError::InvalidInput(_))));
}
