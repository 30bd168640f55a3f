use crate::presentation::order::Direction;
use crate::presentation::serialization::{
    float_as_string, float_as_string_opt, string_as_float, string_as_float_opt,
};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Price level of an order attached to a trade (stop loss, take profit)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AttachedOrder {
    /// Order identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Trigger price
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub price: Option<f64>,
}

/// A trade as returned by `trades/{id}` and `openTrades`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenTrade {
    /// Trade identifier
    pub id: String,
    /// Instrument name
    pub instrument: String,
    /// Fill price
    #[serde(deserialize_with = "string_as_float", serialize_with = "float_as_string")]
    pub price: f64,
    /// Time the trade was opened
    #[serde(rename = "openTime", default, skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
    /// `OPEN`, `CLOSED` or `CLOSE_WHEN_TRADEABLE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Units when the trade was opened (signed)
    #[serde(
        rename = "initialUnits",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub initial_units: Option<f64>,
    /// Units still open (signed)
    #[serde(
        rename = "currentUnits",
        deserialize_with = "string_as_float",
        serialize_with = "float_as_string"
    )]
    pub current_units: f64,
    /// Realized profit/loss
    #[serde(
        rename = "realizedPL",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub realized_pl: Option<f64>,
    /// Unrealized profit/loss
    #[serde(
        rename = "unrealizedPL",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub unrealized_pl: Option<f64>,
    /// Margin used by the trade
    #[serde(
        rename = "marginUsed",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub margin_used: Option<f64>,
    /// Attached stop loss
    #[serde(rename = "stopLossOrder", default, skip_serializing_if = "Option::is_none")]
    pub stop_loss_order: Option<AttachedOrder>,
    /// Attached take profit
    #[serde(rename = "takeProfitOrder", default, skip_serializing_if = "Option::is_none")]
    pub take_profit_order: Option<AttachedOrder>,
}

impl OpenTrade {
    /// Direction implied by the sign of the open units
    pub fn direction(&self) -> Direction {
        Direction::from_units(self.current_units)
    }

    /// Stop loss price, if one is attached
    pub fn stop_loss(&self) -> Option<f64> {
        self.stop_loss_order.as_ref().and_then(|o| o.price)
    }

    /// Take profit price, if one is attached
    pub fn take_profit(&self) -> Option<f64> {
        self.take_profit_order.as_ref().and_then(|o| o.price)
    }
}
