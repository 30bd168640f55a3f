use assert_json_diff::assert_json_eq;
use oanda_client::error::AppError;
use oanda_client::model::responses::{extract_key, extract_keys, from_key};
use oanda_client::presentation::account::AccountSummary;
use serde_json::json;

#[test]
fn test_extract_keys_all_present() {
    let data = json!({"prices": [], "homeConversions": [], "time": "x"});
    let fields = extract_keys(&data, &["prices", "homeConversions"]).unwrap();
    assert_eq!(fields.len(), 2);
    assert!(!fields.contains_key("time"));
}

#[test]
fn test_extract_keys_reports_only_present_keys() {
    let data = json!({"balance": "100.0", "currency": "USD"});
    let err = extract_keys(&data, &["balance", "NAV", "currency"]).unwrap_err();
    match err {
        AppError::MissingKeys { missing, present } => {
            assert_eq!(missing, vec!["NAV".to_string()]);
            assert_json_eq!(
                serde_json::Value::Object(present),
                json!({"balance": "100.0", "currency": "USD"})
            );
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_extract_key_on_non_object() {
    let err = extract_key(&json!([1, 2, 3]), "candles").unwrap_err();
    assert!(err.is_schema_mismatch());
}

#[test]
fn test_from_key_deserializes_account() {
    let data = json!({
        "account": {
            "id": "101-004-1-001",
            "currency": "USD",
            "balance": "99998.5",
            "NAV": "100001.2",
            "openTradeCount": 2,
            "openPositionCount": 1,
            "pendingOrderCount": 3,
            "hedgingEnabled": false,
            "lastTransactionID": "6420"
        },
        "lastTransactionID": "6420"
    });
    let account: AccountSummary = from_key(&data, "account").unwrap();
    assert_eq!(account.balance, Some(99998.5));
    assert_eq!(account.nav, Some(100001.2));
    assert_eq!(account.pending_order_count, 3);
}

#[test]
fn test_from_key_wrong_shape() {
    let data = json!({"account": "not an object"});
    let result: Result<AccountSummary, _> = from_key(&data, "account");
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[test]
fn test_from_key_account_without_last_transaction_id() {
    let data = json!({
        "account": {
            "id": "101-004-1-001",
            "currency": "USD",
            "balance": "99998.5"
        }
    });
    let result: Result<AccountSummary, _> = from_key(&data, "account");
    assert!(matches!(result, Err(AppError::Json(_))));
}
