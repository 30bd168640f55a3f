/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Candle payloads and their flattened, tabular form.

use crate::constants::WEB_CANDLE_TIME_FORMAT;
use crate::error::AppError;
use crate::presentation::serialization::{float_as_string, string_as_float};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Open/high/low/close of one price stream
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Ohlc {
    /// Open
    #[serde(rename = "o", deserialize_with = "string_as_float", serialize_with = "float_as_string")]
    pub open: f64,
    /// High
    #[serde(rename = "h", deserialize_with = "string_as_float", serialize_with = "float_as_string")]
    pub high: f64,
    /// Low
    #[serde(rename = "l", deserialize_with = "string_as_float", serialize_with = "float_as_string")]
    pub low: f64,
    /// Close
    #[serde(rename = "c", deserialize_with = "string_as_float", serialize_with = "float_as_string")]
    pub close: f64,
}

/// A candle as returned by `instruments/{name}/candles`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Candle {
    /// False while the candle's period is still running
    pub complete: bool,
    /// Number of price updates in the period
    pub volume: u64,
    /// Start of the period (RFC 3339 or UNIX seconds)
    pub time: String,
    /// Mid prices, present when `M` was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<Ohlc>,
    /// Bid prices, present when `B` was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid: Option<Ohlc>,
    /// Ask prices, present when `A` was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<Ohlc>,
}

impl Candle {
    /// Parses the candle time into UTC
    pub fn parsed_time(&self) -> Result<DateTime<Utc>, AppError> {
        parse_candle_time(&self.time)
    }
}

/// Parses a candle timestamp in either of the two formats the API can emit
pub fn parse_candle_time(value: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Ok(time.with_timezone(&Utc));
    }
    // UNIX format: "1700000000.000000000"
    let (secs, nanos) = match value.split_once('.') {
        Some((secs, frac)) => {
            let digits: String = frac.chars().chain(std::iter::repeat('0')).take(9).collect();
            (secs, digits.parse::<u32>().ok())
        }
        None => (value, Some(0)),
    };
    secs.parse::<i64>()
        .ok()
        .zip(nanos)
        .and_then(|(secs, nanos)| DateTime::from_timestamp(secs, nanos))
        .ok_or_else(|| AppError::Deserialization(format!("invalid candle time: {value}")))
}

/// One of the three price streams a candle may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceStream {
    /// Mid point
    Mid,
    /// Bid side
    Bid,
    /// Ask side
    Ask,
}

impl PriceStream {
    /// All streams in column order
    pub const ALL: [PriceStream; 3] = [PriceStream::Mid, PriceStream::Bid, PriceStream::Ask];

    /// Column prefix: `mid`, `bid` or `ask`
    pub fn prefix(&self) -> &'static str {
        match self {
            PriceStream::Mid => "mid",
            PriceStream::Bid => "bid",
            PriceStream::Ask => "ask",
        }
    }
}

/// A complete candle flattened into one row
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandleRow {
    /// Start of the period
    pub time: DateTime<Utc>,
    /// Number of price updates
    pub volume: u64,
    /// Mid OHLC, if the stream was present
    pub mid: Option<Ohlc>,
    /// Bid OHLC, if the stream was present
    pub bid: Option<Ohlc>,
    /// Ask OHLC, if the stream was present
    pub ask: Option<Ohlc>,
}

impl CandleRow {
    /// OHLC of a stream, if present in this row
    pub fn stream(&self, stream: PriceStream) -> Option<&Ohlc> {
        match stream {
            PriceStream::Mid => self.mid.as_ref(),
            PriceStream::Bid => self.bid.as_ref(),
            PriceStream::Ask => self.ask.as_ref(),
        }
    }
}

impl TryFrom<&Candle> for CandleRow {
    type Error = AppError;

    fn try_from(candle: &Candle) -> Result<Self, Self::Error> {
        Ok(CandleRow {
            time: candle.parsed_time()?,
            volume: candle.volume,
            mid: candle.mid,
            bid: candle.bid,
            ask: candle.ask,
        })
    }
}

/// Complete candles of one request, in the order the API returned them
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CandleTable {
    rows: Vec<CandleRow>,
}

impl CandleTable {
    /// Flattens candles into rows, dropping every incomplete candle
    pub fn from_candles(candles: &[Candle]) -> Result<Self, AppError> {
        let rows = candles
            .iter()
            .filter(|candle| candle.complete)
            .map(CandleRow::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no complete candles
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows
    pub fn rows(&self) -> &[CandleRow] {
        &self.rows
    }

    /// Most recent row
    pub fn last(&self) -> Option<&CandleRow> {
        self.rows.last()
    }

    /// Streams present in at least one row
    pub fn streams(&self) -> Vec<PriceStream> {
        PriceStream::ALL
            .into_iter()
            .filter(|&stream| self.rows.iter().any(|row| row.stream(stream).is_some()))
            .collect()
    }

    /// Column names: `time`, `volume`, then `<stream>_o/h/l/c` per present stream
    pub fn columns(&self) -> Vec<String> {
        let mut columns = vec!["time".to_string(), "volume".to_string()];
        for stream in self.streams() {
            for field in ["o", "h", "l", "c"] {
                columns.push(format!("{}_{}", stream.prefix(), field));
            }
        }
        columns
    }

    /// Close prices of a stream; rows without that stream are skipped
    pub fn closes(&self, stream: PriceStream) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.stream(stream).map(|ohlc| ohlc.close))
            .collect()
    }

    /// Column-oriented mid prices for charting, `None` when the table is empty
    pub fn to_web_candles(&self) -> Option<WebCandles> {
        if self.is_empty() {
            return None;
        }
        let mut web = WebCandles::default();
        for row in &self.rows {
            let Some(mid) = row.mid else { continue };
            web.time
                .push(row.time.format(WEB_CANDLE_TIME_FORMAT).to_string());
            web.mid_o.push(mid.open);
            web.mid_h.push(mid.high);
            web.mid_l.push(mid.low);
            web.mid_c.push(mid.close);
        }
        Some(web)
    }
}

impl fmt::Display for CandleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let streams = self.streams();
        table.add_row(Row::new(
            self.columns()
                .iter()
                .map(|name| Cell::new(&name.to_uppercase()))
                .collect(),
        ));

        for row in &self.rows {
            let mut cells = vec![
                Cell::new(&row.time.format("%Y-%m-%d %H:%M:%S").to_string()),
                Cell::new(&row.volume.to_string()),
            ];
            for &stream in &streams {
                match row.stream(stream) {
                    Some(ohlc) => {
                        for value in [ohlc.open, ohlc.high, ohlc.low, ohlc.close] {
                            cells.push(Cell::new(&value.to_string()));
                        }
                    }
                    None => cells.extend((0..4).map(|_| Cell::new("-"))),
                }
            }
            table.add_row(Row::new(cells));
        }

        write!(f, "{table}")
    }
}

/// Column-oriented mid prices, ready to be serialized for a chart front-end
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WebCandles {
    /// Times formatted as `yy-mm-dd HH:MM`
    pub time: Vec<String>,
    /// Mid open
    pub mid_o: Vec<f64>,
    /// Mid high
    pub mid_h: Vec<f64>,
    /// Mid low
    pub mid_l: Vec<f64>,
    /// Mid close
    pub mid_c: Vec<f64>,
}

impl WebCandles {
    /// Number of points
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when there are no points
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
