/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{
    CANDLE_QUERY_TIME_FORMAT, DEFAULT_CANDLE_COUNT, DEFAULT_GRANULARITY, DEFAULT_PRICE_COMPONENTS,
};
use crate::error::AppError;
use crate::presentation::instrument::Instrument;
use crate::presentation::order::{Direction, OrderType};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Parameters for `instruments/{name}/candles`
///
/// Either a count or a `from`/`to` range is sent; when both ends of the range
/// are set the range wins and the count is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CandlesRequest<'a> {
    /// Instrument name
    pub instrument: &'a str,
    /// Optional granularity (default: H1)
    pub granularity: Option<&'a str>,
    /// Optional price components, any of `M`, `B`, `A` (default: MBA)
    pub price: Option<&'a str>,
    /// Optional number of candles (default: 10)
    pub count: Option<u32>,
    /// Optional start of the range
    pub from: Option<DateTime<Utc>>,
    /// Optional end of the range
    pub to: Option<DateTime<Utc>>,
}

impl<'a> CandlesRequest<'a> {
    /// Create new parameters with just the instrument (required field)
    pub fn new(instrument: &'a str) -> Self {
        Self {
            instrument,
            ..Default::default()
        }
    }

    /// Set the granularity (`S5`, `M1`, `H1`, `D`, ...)
    pub fn with_granularity(mut self, granularity: &'a str) -> Self {
        self.granularity = Some(granularity);
        self
    }

    /// Set the price components
    pub fn with_price(mut self, price: &'a str) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the number of candles
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the time range
    pub fn with_range(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Path of the endpoint, relative to the base URL
    pub fn path(&self) -> String {
        format!("instruments/{}/candles", self.instrument)
    }

    /// Query string pairs
    pub fn query(&self) -> Result<Vec<(&'static str, String)>, AppError> {
        if self.instrument.is_empty() {
            return Err(AppError::InvalidInput("instrument must not be empty".to_string()));
        }
        let mut query = vec![
            (
                "granularity",
                self.granularity.unwrap_or(DEFAULT_GRANULARITY).to_string(),
            ),
            (
                "price",
                self.price.unwrap_or(DEFAULT_PRICE_COMPONENTS).to_string(),
            ),
        ];
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                if from > to {
                    return Err(AppError::InvalidInput(format!(
                        "candle range starts after it ends: {from} > {to}"
                    )));
                }
                query.push(("from", from.format(CANDLE_QUERY_TIME_FORMAT).to_string()));
                query.push(("to", to.format(CANDLE_QUERY_TIME_FORMAT).to_string()));
            }
            _ => query.push((
                "count",
                self.count.unwrap_or(DEFAULT_CANDLE_COUNT).to_string(),
            )),
        }
        Ok(query)
    }
}

/// Price attached to a fill, as in `stopLossOnFill` / `takeProfitOnFill`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PriceOnFill {
    /// Price already rounded to the instrument's display precision
    pub price: String,
}

/// Body of a market order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarketOrder {
    /// Signed units as a decimal string
    pub units: String,
    /// Instrument name
    pub instrument: String,
    /// Always `MARKET`
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Stop loss created when the order fills
    #[serde(rename = "stopLossOnFill", skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<PriceOnFill>,
    /// Take profit created when the order fills
    #[serde(rename = "takeProfitOnFill", skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<PriceOnFill>,
}

/// Envelope posted to `accounts/{id}/orders`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CreateOrderRequest {
    /// The order
    pub order: MarketOrder,
}

impl CreateOrderRequest {
    /// Market order for a signed unit count, sent as given
    pub fn market(instrument: &str, units: f64) -> Self {
        Self {
            order: MarketOrder {
                units: units.to_string(),
                instrument: instrument.to_string(),
                order_type: OrderType::Market,
                stop_loss_on_fill: None,
                take_profit_on_fill: None,
            },
        }
    }
}

/// A directional trade to place through [`crate::application::interfaces::order::OrderService::place_trade`]
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TradeRequest {
    /// Instrument name, resolved against the cached instrument list
    pub instrument: String,
    /// Unit magnitude; the sign comes from `direction`
    pub units: f64,
    /// Buy, sell or none
    pub direction: Direction,
    /// Optional stop loss price
    pub stop_loss: Option<f64>,
    /// Optional take profit price
    pub take_profit: Option<f64>,
}

impl TradeRequest {
    /// Trade without stop loss or take profit
    pub fn new(instrument: &str, units: f64, direction: Direction) -> Self {
        Self {
            instrument: instrument.to_string(),
            units,
            direction,
            stop_loss: None,
            take_profit: None,
        }
    }

    /// Set the stop loss price
    pub fn with_stop_loss(mut self, price: f64) -> Self {
        self.stop_loss = Some(price);
        self
    }

    /// Set the take profit price
    pub fn with_take_profit(mut self, price: f64) -> Self {
        self.take_profit = Some(price);
        self
    }

    /// Builds the order body using the instrument's precisions
    ///
    /// Units are rounded to `tradeUnitsPrecision` and negated for a sell;
    /// stop loss and take profit are rounded to `displayPrecision`.
    pub fn to_order(&self, instrument: &Instrument) -> Result<CreateOrderRequest, AppError> {
        if instrument.name != self.instrument {
            return Err(AppError::InvalidInput(format!(
                "instrument {} does not match trade {}",
                instrument.name, self.instrument
            )));
        }
        if !self.units.is_finite() {
            return Err(AppError::InvalidInput(format!("invalid units: {}", self.units)));
        }
        let units = self.direction.signed_units(instrument.round_units(self.units));
        let price_on_fill = |price: Option<f64>| {
            price.map(|p| PriceOnFill {
                price: instrument.format_price(p),
            })
        };

        Ok(CreateOrderRequest {
            order: MarketOrder {
                units: instrument.format_units(units),
                instrument: instrument.name.clone(),
                order_type: OrderType::Market,
                stop_loss_on_fill: price_on_fill(self.stop_loss),
                take_profit_on_fill: price_on_fill(self.take_profit),
            },
        })
    }
}
