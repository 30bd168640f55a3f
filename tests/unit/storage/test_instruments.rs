use oanda_client::application::config::StorageConfig;
use oanda_client::error::AppError;
use oanda_client::presentation::instrument::{Instrument, InstrumentCollection};
use oanda_client::storage::InstrumentStore;
use serde_json::json;
use tempfile::tempdir;

fn instruments() -> InstrumentCollection {
    let eur_usd: Instrument = serde_json::from_value(json!({
        "name": "EUR_USD",
        "type": "CURRENCY",
        "displayName": "EUR/USD",
        "pipLocation": -4,
        "displayPrecision": 5,
        "tradeUnitsPrecision": 0,
        "maximumOrderUnits": "100000000"
    }))
    .unwrap();
    vec![eur_usd].into()
}

#[test]
fn test_save_creates_directories_and_loads_back() {
    let dir = tempdir().unwrap();
    let store = InstrumentStore::new(dir.path().join("nested").join("instruments.json"));
    assert!(!store.exists());

    store.save(&instruments()).unwrap();
    assert!(store.exists());
    assert_eq!(store.load().unwrap(), instruments());
}

#[test]
fn test_saved_file_is_keyed_by_name() {
    let dir = tempdir().unwrap();
    let store = InstrumentStore::new(dir.path().join("instruments.json"));
    store.save(&instruments()).unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["EUR_USD"]["displayPrecision"], 5);
    assert_eq!(value["EUR_USD"]["maximumOrderUnits"], "100000000");
}

#[test]
fn test_from_config() {
    let config = StorageConfig {
        data_path: "/tmp/oanda-data".to_string(),
        instruments_file: "list.json".to_string(),
        persist_instruments: true,
    };
    let store = InstrumentStore::from_config(&config);
    assert_eq!(store.path(), std::path::Path::new("/tmp/oanda-data/list.json"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let store = InstrumentStore::new(dir.path().join("missing.json"));
    assert!(matches!(store.load(), Err(AppError::Io(_))));
}
