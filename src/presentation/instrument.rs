use crate::error::AppError;
use crate::model::utils::{format_decimal, round_to_precision, split_instrument};
use crate::presentation::serialization::{
    float_as_string_opt, string_as_float_opt,
};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Trading parameters of one instrument, as listed by `accounts/{id}/instruments`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instrument {
    /// Instrument name, e.g. `EUR_USD`
    pub name: String,
    /// `CURRENCY`, `CFD` or `METAL`
    #[serde(rename = "type")]
    pub instrument_type: String,
    /// Human readable name, e.g. `EUR/USD`
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Exponent of the pip: `-4` means one pip is 0.0001
    #[serde(rename = "pipLocation")]
    pub pip_location: i32,
    /// Number of decimals used to display (and send) prices
    #[serde(rename = "displayPrecision")]
    pub display_precision: u32,
    /// Number of decimals allowed in a unit count
    #[serde(rename = "tradeUnitsPrecision")]
    pub trade_units_precision: u32,
    /// Smallest accepted order size
    #[serde(
        rename = "minimumTradeSize",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub minimum_trade_size: Option<f64>,
    /// Largest trailing stop distance
    #[serde(
        rename = "maximumTrailingStopDistance",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub maximum_trailing_stop_distance: Option<f64>,
    /// Smallest trailing stop distance
    #[serde(
        rename = "minimumTrailingStopDistance",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub minimum_trailing_stop_distance: Option<f64>,
    /// Largest position allowed (0 means no limit)
    #[serde(
        rename = "maximumPositionSize",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub maximum_position_size: Option<f64>,
    /// Largest order allowed
    #[serde(
        rename = "maximumOrderUnits",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub maximum_order_units: Option<f64>,
    /// Margin rate, e.g. `0.0333` for 30:1
    #[serde(
        rename = "marginRate",
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub margin_rate: Option<f64>,
}

impl Instrument {
    /// Size of one pip, `10^pipLocation`
    pub fn pip_value(&self) -> f64 {
        10f64.powi(self.pip_location)
    }

    /// Rounds a unit count to the instrument's unit precision
    pub fn round_units(&self, units: f64) -> f64 {
        round_to_precision(units, self.trade_units_precision)
    }

    /// Rounds a price to the instrument's display precision
    pub fn round_price(&self, price: f64) -> f64 {
        round_to_precision(price, self.display_precision)
    }

    /// Unit count in the string form sent to the API
    pub fn format_units(&self, units: f64) -> String {
        format_decimal(units, self.trade_units_precision)
    }

    /// Price in the string form sent to the API
    pub fn format_price(&self, price: f64) -> String {
        format_decimal(price, self.display_precision)
    }

    /// Quote currency, i.e. the part after the underscore
    pub fn quote_currency(&self) -> Option<&str> {
        split_instrument(&self.name).map(|(_, quote)| quote)
    }
}

/// Instruments of the account keyed by name
///
/// Serializes as a plain `{ "EUR_USD": {...}, ... }` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct InstrumentCollection {
    instruments: BTreeMap<String, Instrument>,
}

impl InstrumentCollection {
    /// Number of instruments
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// True when no instrument is known
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Looks an instrument up by name
    pub fn get(&self, name: &str) -> Option<&Instrument> {
        self.instruments.get(name)
    }

    /// Looks an instrument up by name, failing with [`AppError::UnknownInstrument`]
    pub fn require(&self, name: &str) -> Result<&Instrument, AppError> {
        self.get(name)
            .ok_or_else(|| AppError::UnknownInstrument(name.to_string()))
    }

    /// Settings of the requested instruments; fails on the first unknown name
    pub fn settings<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<BTreeMap<String, Instrument>, AppError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.require(name)
                    .map(|instrument| (name.to_string(), instrument.clone()))
            })
            .collect()
    }

    /// Instrument names in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.instruments.keys().map(String::as_str)
    }

    /// Iterates over the instruments in name order
    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.values()
    }
}

impl FromIterator<Instrument> for InstrumentCollection {
    fn from_iter<I: IntoIterator<Item = Instrument>>(iter: I) -> Self {
        Self {
            instruments: iter
                .into_iter()
                .map(|instrument| (instrument.name.clone(), instrument))
                .collect(),
        }
    }
}

impl From<Vec<Instrument>> for InstrumentCollection {
    fn from(instruments: Vec<Instrument>) -> Self {
        instruments.into_iter().collect()
    }
}
