use crate::error::AppError;
use crate::model::utils::split_instrument;
use crate::presentation::serialization::{float_as_string, float_as_string_opt, string_as_float, string_as_float_opt};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// One level of the order book as sent in `bids`/`asks`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBucket {
    /// Price of the level
    #[serde(deserialize_with = "string_as_float", serialize_with = "float_as_string")]
    pub price: f64,
    /// Available liquidity
    #[serde(default)]
    pub liquidity: u64,
}

/// Raw entry of the `prices` array returned by `accounts/{id}/pricing`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientPrice {
    /// Instrument name
    pub instrument: String,
    /// Time of the snapshot
    pub time: String,
    /// Bid side, best price first
    #[serde(default)]
    pub bids: Vec<PriceBucket>,
    /// Ask side, best price first
    #[serde(default)]
    pub asks: Vec<PriceBucket>,
    /// Whether the instrument can be traded right now
    #[serde(default)]
    pub tradeable: bool,
    /// Bid used to close out positions
    #[serde(
        rename = "closeoutBid",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub closeout_bid: Option<f64>,
    /// Ask used to close out positions
    #[serde(
        rename = "closeoutAsk",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub closeout_ask: Option<f64>,
}

/// Conversion factors from one currency into the account's home currency
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct HomeConversion {
    /// Currency being converted
    pub currency: String,
    /// Factor applied to gains
    #[serde(
        rename = "accountGain",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub account_gain: Option<f64>,
    /// Factor applied to losses
    #[serde(
        rename = "accountLoss",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub account_loss: Option<f64>,
    /// Factor applied to position values
    #[serde(
        rename = "positionValue",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub position_value: Option<f64>,
}

/// Bid/ask snapshot of one instrument with its home currency conversion
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiPrice {
    /// Instrument name
    pub instrument: String,
    /// Time of the snapshot
    pub time: String,
    /// Best bid
    pub bid: f64,
    /// Best ask
    pub ask: f64,
    /// Home conversion factor for short positions
    pub sell_conv: Option<f64>,
    /// Home conversion factor for long positions
    pub buy_conv: Option<f64>,
}

impl ApiPrice {
    /// Builds the snapshot from a raw price and the response's home conversions
    ///
    /// The conversion used is the one for the instrument's quote currency.
    /// Fails when either side of the book is empty.
    pub fn new(price: &ClientPrice, home_conversions: &[HomeConversion]) -> Result<Self, AppError> {
        let bid = price
            .bids
            .first()
            .ok_or_else(|| AppError::missing_key("bids"))?
            .price;
        let ask = price
            .asks
            .first()
            .ok_or_else(|| AppError::missing_key("asks"))?
            .price;

        let conversion = split_instrument(&price.instrument).and_then(|(_, quote)| {
            home_conversions
                .iter()
                .find(|conversion| conversion.currency == quote)
        });

        Ok(ApiPrice {
            instrument: price.instrument.clone(),
            time: price.time.clone(),
            bid,
            ask,
            sell_conv: conversion.and_then(|c| c.position_value),
            buy_conv: conversion.and_then(|c| c.position_value),
        })
    }

    /// Ask minus bid
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    /// Average of bid and ask
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }
}
