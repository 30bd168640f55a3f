use crate::presentation::serialization::{float_as_string_opt, string_as_float_opt};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// The `account` object returned by `accounts/{id}/summary`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSummary {
    /// Account identifier
    pub id: String,
    /// User defined alias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Home currency
    pub currency: String,
    /// Balance
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub balance: Option<f64>,
    /// Net asset value
    #[serde(
        rename = "NAV",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub nav: Option<f64>,
    /// Lifetime profit/loss
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub pl: Option<f64>,
    /// Unrealized profit/loss
    #[serde(
        rename = "unrealizedPL",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub unrealized_pl: Option<f64>,
    /// Margin rate of the account
    #[serde(
        rename = "marginRate",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub margin_rate: Option<f64>,
    /// Margin used
    #[serde(
        rename = "marginUsed",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub margin_used: Option<f64>,
    /// Margin available
    #[serde(
        rename = "marginAvailable",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub margin_available: Option<f64>,
    /// Number of open trades
    #[serde(rename = "openTradeCount", default)]
    pub open_trade_count: u32,
    /// Number of open positions
    #[serde(rename = "openPositionCount", default)]
    pub open_position_count: u32,
    /// Number of pending orders
    #[serde(rename = "pendingOrderCount", default)]
    pub pending_order_count: u32,
    /// Whether hedging is enabled
    #[serde(rename = "hedgingEnabled", default)]
    pub hedging_enabled: bool,
    /// Last transaction at the time of the snapshot
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}
