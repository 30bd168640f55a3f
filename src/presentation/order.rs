/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::presentation::serialization::{float_as_string_opt, string_as_float_opt};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Trade direction
///
/// The API has no direction field: it is carried by the sign of the units,
/// positive for buy and negative for sell.
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Long
    Buy,
    /// Short
    Sell,
    /// No position
    #[default]
    None,
}

impl Direction {
    /// Sign applied to the units: `1`, `-1` or `0`
    pub fn sign(&self) -> i8 {
        match self {
            Direction::Buy => 1,
            Direction::Sell => -1,
            Direction::None => 0,
        }
    }

    /// Direction implied by a signed unit count
    pub fn from_units(units: f64) -> Self {
        if units > 0.0 {
            Direction::Buy
        } else if units < 0.0 {
            Direction::Sell
        } else {
            Direction::None
        }
    }

    /// Applies the direction to an unsigned unit count
    ///
    /// Only a sell flips the sign; buy and none leave the magnitude untouched.
    pub fn signed_units(&self, units: f64) -> f64 {
        match self {
            Direction::Sell => -units,
            Direction::Buy | Direction::None => units,
        }
    }
}

/// Order type
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Filled immediately at the current price
    #[default]
    Market,
    /// Filled at the given price or better
    Limit,
    /// Becomes a market order once the price is reached
    Stop,
    /// Market-if-touched
    MarketIfTouched,
    /// Take profit attached to a trade
    TakeProfit,
    /// Stop loss attached to a trade
    StopLoss,
    /// Guaranteed stop loss attached to a trade
    GuaranteedStopLoss,
    /// Trailing stop loss attached to a trade
    TrailingStopLoss,
    /// Fixed price order
    FixedPrice,
}

/// Lifecycle state of an order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderState {
    /// Waiting to be filled
    #[default]
    Pending,
    /// Filled
    Filled,
    /// Waiting for a linked order to fill
    Triggered,
    /// Cancelled
    Cancelled,
}

/// An order that has not been filled yet, as listed by `pendingOrders`
///
/// Dependent orders (stop loss, take profit) have a `trade_id` and no
/// instrument or units; entry orders have the opposite.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PendingOrder {
    /// Order identifier
    pub id: String,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Current state
    #[serde(default)]
    pub state: OrderState,
    /// Instrument for entry orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
    /// Signed units for entry orders
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub units: Option<f64>,
    /// Trigger price
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    /// Trade the order is attached to, for dependent orders
    #[serde(rename = "tradeID", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<String>,
    /// Creation time (RFC 3339)
    #[serde(rename = "createTime", default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    /// Time in force (`GTC`, `FOK`, ...)
    #[serde(rename = "timeInForce", default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
}

impl PendingOrder {
    /// Direction of an entry order, `None` for dependent orders
    pub fn direction(&self) -> Direction {
        self.units.map(Direction::from_units).unwrap_or_default()
    }

    /// True for stop loss / take profit style orders attached to a trade
    pub fn is_dependent(&self) -> bool {
        self.trade_id.is_some()
    }
}
