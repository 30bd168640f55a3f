/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the OANDA v20 REST API
//!
//! The client downloads the account's instrument list when it is built and
//! refuses to exist without it: every later instrument lookup is served from
//! that in-memory copy.
//!
//! # Example
//! ```ignore
//! use oanda_client::prelude::*;
//!
//! let config = Config::from_credentials_file("./api/api_creds.json")?;
//! let client = Client::new(config).await?;
//!
//! let table = client
//!     .get_candles_table(&CandlesRequest::new("EUR_USD").with_granularity("M5").with_count(50))
//!     .await?;
//! println!("{table}");
//! ```

use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market::MarketService;
use crate::application::interfaces::order::OrderService;
use crate::constants::DEFAULT_CANDLE_COUNT;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{CandlesRequest, CreateOrderRequest, TradeRequest};
use crate::model::responses::{extract_key, extract_keys, from_key};
use crate::model::retry::RetryConfig;
use crate::presentation::account::AccountSummary;
use crate::presentation::candle::{Candle, CandleTable, WebCandles};
use crate::presentation::instrument::{Instrument, InstrumentCollection};
use crate::presentation::order::PendingOrder;
use crate::presentation::price::{ApiPrice, ClientPrice, HomeConversion};
use crate::presentation::trade::OpenTrade;
use crate::presentation::transaction::{AccountChanges, OrderFillTransaction};
use crate::storage::instruments::InstrumentStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Client bound to one account, with the account's instruments cached
pub struct Client {
    http_client: HttpClient,
    config: Config,
    instruments: InstrumentCollection,
}

impl Client {
    /// Creates a client and downloads the account instruments
    ///
    /// The download is attempted up to three times without pause.
    ///
    /// # Returns
    /// * `Ok(Client)` - Client with a populated instrument cache
    /// * `Err(AppError::InstrumentsUnavailable)` - If every attempt failed or the list was empty
    pub async fn new(config: Config) -> Result<Self, AppError> {
        Self::with_retry(config, RetryConfig::bootstrap()).await
    }

    /// Creates a client from environment variables (see [`Config::new`])
    pub async fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new()).await
    }

    /// Creates a client using a custom retry policy for the instrument download
    pub async fn with_retry(config: Config, retry: RetryConfig) -> Result<Self, AppError> {
        let http_client = HttpClient::new(&config)?;
        let account_id = config.credentials.account_id.as_str();

        info!("Downloading instruments for account {}", account_id);
        let instruments = retry
            .run("instrument download", |_| {
                let http_client = &http_client;
                async move {
                    let instruments = fetch_instruments(http_client, account_id).await?;
                    if instruments.is_empty() {
                        return Err(AppError::InstrumentsUnavailable(
                            "the account has no instruments".to_string(),
                        ));
                    }
                    Ok(instruments)
                }
            })
            .await
            .map_err(|e| match e {
                AppError::InstrumentsUnavailable(_) => e,
                other => AppError::InstrumentsUnavailable(format!(
                    "download failed after {} attempts: {other}",
                    retry.attempts()
                )),
            })?;

        let instruments = InstrumentCollection::from(instruments);
        info!("Cached {} instruments", instruments.len());

        if config.storage.persist_instruments {
            let store = InstrumentStore::from_config(&config.storage);
            if let Err(e) = store.save(&instruments) {
                warn!(
                    "Could not write instruments to {}: {}",
                    store.path().display(),
                    e
                );
            }
        }

        Ok(Self {
            http_client,
            config,
            instruments,
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying HTTP wrapper, for endpoints without a dedicated method
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Instruments cached at construction
    pub fn instruments(&self) -> &InstrumentCollection {
        &self.instruments
    }

    /// Looks up a cached instrument
    pub fn instrument(&self, name: &str) -> Result<&Instrument, AppError> {
        self.instruments.require(name)
    }

    /// Settings of several cached instruments keyed by name
    pub fn get_instrument_settings<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<BTreeMap<String, Instrument>, AppError> {
        self.instruments.settings(names)
    }

    /// Gets one key of an account endpoint (`accounts/{id}/{ep}`)
    ///
    /// # Arguments
    /// * `ep` - Endpoint below the account, e.g. `summary`
    /// * `key` - Top-level key to return
    pub async fn get_account_endpoint(&self, ep: &str, key: &str) -> Result<Value, AppError> {
        let data = self.http_client.get(&self.account_path(ep), None).await?;
        extract_key(&data, key)
    }

    /// Gets several keys of an account endpoint
    ///
    /// When some keys are missing the error carries the ones that were present.
    pub async fn get_account_endpoint_keys<S: AsRef<str> + Sync>(
        &self,
        ep: &str,
        keys: &[S],
    ) -> Result<Map<String, Value>, AppError> {
        let data = self.http_client.get(&self.account_path(ep), None).await?;
        extract_keys(&data, keys)
    }

    fn account_path(&self, ep: &str) -> String {
        account_path(&self.config.credentials.account_id, ep)
    }
}

fn account_path(account_id: &str, ep: &str) -> String {
    format!("accounts/{}/{}", account_id, ep.trim_start_matches('/'))
}

async fn fetch_instruments(
    http_client: &HttpClient,
    account_id: &str,
) -> Result<Vec<Instrument>, AppError> {
    let data = http_client
        .get(&account_path(account_id, "instruments"), None)
        .await?;
    from_key(&data, "instruments")
}

#[async_trait]
impl AccountService for Client {
    async fn get_account_summary(&self) -> Result<AccountSummary, AppError> {
        info!("Getting account summary");
        let account = self.get_account_endpoint("summary", "account").await?;
        Ok(serde_json::from_value(account)?)
    }

    async fn get_account_instruments(&self) -> Result<Vec<Instrument>, AppError> {
        info!("Getting account instruments");
        let instruments =
            fetch_instruments(&self.http_client, &self.config.credentials.account_id).await?;
        debug!("Instruments obtained: {}", instruments.len());
        Ok(instruments)
    }

    async fn get_last_transaction_id(&self) -> Result<String, AppError> {
        let id = self
            .get_account_endpoint("summary", "lastTransactionID")
            .await?;
        id.as_str().map(str::to_string).ok_or_else(|| {
            AppError::Deserialization(format!("lastTransactionID is not a string: {id}"))
        })
    }

    async fn get_state_changes(
        &self,
        last_transaction_id: &str,
    ) -> Result<AccountChanges, AppError> {
        info!("Getting account changes since {}", last_transaction_id);
        let query = [("sinceTransactionID", last_transaction_id.to_string())];
        let data = self
            .http_client
            .get(&self.account_path("changes"), Some(query.as_slice()))
            .await?;
        let fields = extract_keys(&data, &["changes", "state", "lastTransactionID"])?;
        let changes: AccountChanges = serde_json::from_value(Value::Object(fields))?;
        debug!(
            "Account changes obtained, last transaction {}",
            changes.last_transaction_id
        );
        Ok(changes)
    }

    async fn get_open_trade(&self, trade_id: &str) -> Result<OpenTrade, AppError> {
        info!("Getting trade {}", trade_id);
        let data = self
            .http_client
            .get(&self.account_path(&format!("trades/{trade_id}")), None)
            .await?;
        from_key(&data, "trade")
    }

    async fn get_open_trades(&self) -> Result<Vec<OpenTrade>, AppError> {
        info!("Getting open trades");
        let data = self
            .http_client
            .get(&self.account_path("openTrades"), None)
            .await?;
        let trades: Vec<OpenTrade> = from_key(&data, "trades")?;
        debug!("Open trades obtained: {}", trades.len());
        Ok(trades)
    }

    async fn get_pending_orders(&self) -> Result<Vec<PendingOrder>, AppError> {
        info!("Getting pending orders");
        let data = self
            .http_client
            .get(&self.account_path("pendingOrders"), None)
            .await?;
        let orders: Vec<PendingOrder> = from_key(&data, "orders")?;
        debug!("Pending orders obtained: {}", orders.len());
        Ok(orders)
    }
}

#[async_trait]
impl MarketService for Client {
    async fn fetch_candles(&self, params: &CandlesRequest<'_>) -> Result<Vec<Candle>, AppError> {
        let query = params.query()?;
        info!("Getting candles for {}", params.instrument);
        let data = self
            .http_client
            .get(&params.path(), Some(query.as_slice()))
            .await?;
        let candles: Vec<Candle> = from_key(&data, "candles")?;
        debug!("Candles obtained: {}", candles.len());
        Ok(candles)
    }

    async fn get_candles_table(
        &self,
        params: &CandlesRequest<'_>,
    ) -> Result<CandleTable, AppError> {
        let candles = self.fetch_candles(params).await?;
        CandleTable::from_candles(&candles)
    }

    async fn last_complete_candle(
        &self,
        instrument: &str,
        granularity: &str,
    ) -> Result<DateTime<Utc>, AppError> {
        let params = CandlesRequest::new(instrument)
            .with_granularity(granularity)
            .with_count(DEFAULT_CANDLE_COUNT);
        let table = self.get_candles_table(&params).await?;
        table.last().map(|row| row.time).ok_or(AppError::NotFound)
    }

    async fn web_api_candles(
        &self,
        instrument: &str,
        granularity: &str,
        count: u32,
    ) -> Result<Option<WebCandles>, AppError> {
        let params = CandlesRequest::new(instrument)
            .with_granularity(granularity)
            .with_count(count);
        Ok(self.get_candles_table(&params).await?.to_web_candles())
    }

    async fn get_prices(&self, instruments: &[&str]) -> Result<Vec<ApiPrice>, AppError> {
        if instruments.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one instrument is required".to_string(),
            ));
        }
        info!("Getting prices for {}", instruments.join(","));
        let query = [
            ("instruments", instruments.join(",")),
            ("includeHomeConversions", "true".to_string()),
        ];
        let data = self
            .http_client
            .get(&self.account_path("pricing"), Some(query.as_slice()))
            .await?;
        let fields = extract_keys(&data, &["prices", "homeConversions"])?;
        let prices: Vec<ClientPrice> = from_key(&Value::Object(fields.clone()), "prices")?;
        let conversions: Vec<HomeConversion> =
            from_key(&Value::Object(fields), "homeConversions")?;

        prices
            .iter()
            .map(|price| ApiPrice::new(price, &conversions))
            .collect()
    }
}

#[async_trait]
impl OrderService for Client {
    async fn place_market_order(
        &self,
        instrument: &str,
        units: f64,
    ) -> Result<OrderFillTransaction, AppError> {
        if !units.is_finite() {
            return Err(AppError::InvalidInput(format!("invalid units: {units}")));
        }
        info!("Placing market order: {} {}", units, instrument);
        let body = CreateOrderRequest::market(instrument, units);
        let data = self
            .http_client
            .post(&self.account_path("orders"), &body, StatusCode::CREATED)
            .await?;
        from_key(&data, "orderFillTransaction")
    }

    async fn place_trade(&self, trade: &TradeRequest) -> Result<String, AppError> {
        let instrument = self.instrument(&trade.instrument)?;
        let body = trade.to_order(instrument)?;
        info!(
            "Placing trade: {} {} (SL {:?}, TP {:?})",
            body.order.units, body.order.instrument, trade.stop_loss, trade.take_profit
        );
        let data = self
            .http_client
            .post(&self.account_path("orders"), &body, StatusCode::CREATED)
            .await?;
        let fill = extract_key(&data, "orderFillTransaction")?;
        let id = extract_key(&fill, "id")?;
        let id = match id {
            Value::String(s) => s,
            other => other.to_string(),
        };
        debug!("Trade filled by transaction {}", id);
        Ok(id)
    }

    async fn close_trade(&self, trade_id: &str) -> Result<(), AppError> {
        info!("Closing trade {}", trade_id);
        self.http_client
            .put(
                &self.account_path(&format!("trades/{trade_id}/close")),
                None::<&()>,
                StatusCode::OK,
            )
            .await?;
        Ok(())
    }
}
