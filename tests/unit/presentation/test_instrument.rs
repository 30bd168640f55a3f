use oanda_client::error::AppError;
use oanda_client::presentation::instrument::{Instrument, InstrumentCollection};
use serde_json::json;

fn instrument(name: &str, display_precision: u32) -> Instrument {
    serde_json::from_value(json!({
        "name": name,
        "type": "CURRENCY",
        "displayName": name.replace('_', "/"),
        "pipLocation": -4,
        "displayPrecision": display_precision,
        "tradeUnitsPrecision": 0,
        "marginRate": "0.05"
    }))
    .unwrap()
}

fn collection() -> InstrumentCollection {
    vec![
        instrument("GBP_USD", 5),
        instrument("EUR_USD", 5),
        instrument("USD_JPY", 3),
    ]
    .into()
}

#[test]
fn test_collection_is_keyed_by_name() {
    let instruments = collection();
    assert_eq!(instruments.len(), 3);
    assert_eq!(
        instruments.names().collect::<Vec<_>>(),
        vec!["EUR_USD", "GBP_USD", "USD_JPY"]
    );
    assert_eq!(instruments.get("USD_JPY").unwrap().display_precision, 3);
    assert!(instruments.get("AUD_USD").is_none());
}

#[test]
fn test_settings_for_known_names() {
    let settings = collection().settings(&["EUR_USD", "USD_JPY"]).unwrap();
    assert_eq!(settings.len(), 2);
    assert_eq!(settings["EUR_USD"].display_name, "EUR/USD");
}

#[test]
fn test_settings_for_unknown_name() {
    match collection().settings(&["EUR_USD", "XAU_EUR"]) {
        Err(AppError::UnknownInstrument(name)) => assert_eq!(name, "XAU_EUR"),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_collection_serializes_as_object() {
    let value = serde_json::to_value(collection()).unwrap();
    assert!(value.is_object());
    assert_eq!(value["EUR_USD"]["marginRate"], "0.05");
    let back: InstrumentCollection = serde_json::from_value(value).unwrap();
    assert_eq!(back, collection());
}

#[test]
fn test_instrument_formatting() {
    let jpy = instrument("USD_JPY", 3);
    assert_eq!(jpy.format_price(151.0), "151.000");
    assert_eq!(jpy.format_units(99.5), "100");
    assert_eq!(jpy.round_price(151.23456), 151.235);
}
