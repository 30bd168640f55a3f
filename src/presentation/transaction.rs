use crate::presentation::order::PendingOrder;
use crate::presentation::serialization::{float_as_string_opt, string_as_float_opt};
use crate::presentation::trade::OpenTrade;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Trade opened by a fill
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TradeOpen {
    /// Identifier of the new trade
    #[serde(rename = "tradeID")]
    pub trade_id: String,
    /// Units of the new trade (signed)
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub units: Option<f64>,
    /// Fill price of the new trade
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub price: Option<f64>,
}

/// The `orderFillTransaction` returned when an order executes
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderFillTransaction {
    /// Transaction identifier
    pub id: String,
    /// Time of the fill
    #[serde(default)]
    pub time: String,
    /// Order that was filled
    #[serde(rename = "orderID", default)]
    pub order_id: String,
    /// Instrument name
    #[serde(default)]
    pub instrument: String,
    /// Filled units (signed)
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub units: Option<f64>,
    /// Average fill price
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub price: Option<f64>,
    /// Realized profit/loss
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub pl: Option<f64>,
    /// Balance after the fill
    #[serde(
        rename = "accountBalance",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub account_balance: Option<f64>,
    /// Why the order was filled (`MARKET_ORDER`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Trade opened by the fill, if any
    #[serde(rename = "tradeOpened", default, skip_serializing_if = "Option::is_none")]
    pub trade_opened: Option<TradeOpen>,
}

/// What changed in the account since a transaction
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountChangeSet {
    /// Orders created
    #[serde(rename = "ordersCreated", default)]
    pub orders_created: Vec<PendingOrder>,
    /// Orders cancelled
    #[serde(rename = "ordersCancelled", default)]
    pub orders_cancelled: Vec<PendingOrder>,
    /// Orders filled
    #[serde(rename = "ordersFilled", default)]
    pub orders_filled: Vec<PendingOrder>,
    /// Orders triggered
    #[serde(rename = "ordersTriggered", default)]
    pub orders_triggered: Vec<PendingOrder>,
    /// Trades opened
    #[serde(rename = "tradesOpened", default)]
    pub trades_opened: Vec<OpenTrade>,
    /// Trades reduced
    #[serde(rename = "tradesReduced", default)]
    pub trades_reduced: Vec<OpenTrade>,
    /// Trades closed
    #[serde(rename = "tradesClosed", default)]
    pub trades_closed: Vec<OpenTrade>,
    /// Raw transactions, whose shape depends on their `type`
    #[serde(default)]
    pub transactions: Vec<Value>,
}

impl AccountChangeSet {
    /// True when nothing changed
    pub fn is_empty(&self) -> bool {
        self.orders_created.is_empty()
            && self.orders_cancelled.is_empty()
            && self.orders_filled.is_empty()
            && self.orders_triggered.is_empty()
            && self.trades_opened.is_empty()
            && self.trades_reduced.is_empty()
            && self.trades_closed.is_empty()
            && self.transactions.is_empty()
    }
}

/// Calculated state of one open trade
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculatedTradeState {
    /// Trade identifier
    pub id: String,
    /// Unrealized profit/loss
    #[serde(
        rename = "unrealizedPL",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub unrealized_pl: Option<f64>,
    /// Margin used
    #[serde(
        rename = "marginUsed",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub margin_used: Option<f64>,
}

/// Price-dependent account state reported alongside the changes
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountChangesState {
    /// Net asset value
    #[serde(
        rename = "NAV",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub nav: Option<f64>,
    /// Unrealized profit/loss
    #[serde(
        rename = "unrealizedPL",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub unrealized_pl: Option<f64>,
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
    /// Value of all open positions
    #[serde(
        rename = "positionValue",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub position_value: Option<f64>,
    /// Per-trade state
    #[serde(default)]
    pub trades: Vec<CalculatedTradeState>,
}

/// Result of `accounts/{id}/changes`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountChanges {
    /// What changed
    pub changes: AccountChangeSet,
    /// Current price-dependent state
    pub state: AccountChangesState,
    /// Identifier to pass on the next poll
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}
