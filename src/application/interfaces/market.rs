use crate::error::AppError;
use crate::model::requests::CandlesRequest;
use crate::presentation::candle::{Candle, CandleTable, WebCandles};
use crate::presentation::price::ApiPrice;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Interface for the market service
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Gets raw candles, complete or not
    async fn fetch_candles(&self, params: &CandlesRequest<'_>) -> Result<Vec<Candle>, AppError>;

    /// Gets candles flattened into a table
    ///
    /// Incomplete candles are dropped and only the price streams present in
    /// the response become columns. An empty table is a valid result.
    async fn get_candles_table(&self, params: &CandlesRequest<'_>)
    -> Result<CandleTable, AppError>;

    /// Gets the start time of the most recent complete candle
    ///
    /// # Arguments
    /// * `instrument` - Instrument name
    /// * `granularity` - Candle granularity (`M5`, `H1`, ...)
    ///
    /// # Returns
    /// * `Err(AppError::NotFound)` when none of the last candles is complete
    async fn last_complete_candle(
        &self,
        instrument: &str,
        granularity: &str,
    ) -> Result<DateTime<Utc>, AppError>;

    /// Gets mid prices in column form for charting; `None` when there is no complete candle
    async fn web_api_candles(
        &self,
        instrument: &str,
        granularity: &str,
        count: u32,
    ) -> Result<Option<WebCandles>, AppError>;

    /// Gets live prices with home currency conversions
    async fn get_prices(&self, instruments: &[&str]) -> Result<Vec<ApiPrice>, AppError>;
}
