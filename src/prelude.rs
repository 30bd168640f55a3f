/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # OANDA Client Prelude
//!
//! Imports the types and traits needed for most interactions with the API.
//!
//! ## Usage
//!
//! ```rust
//! use oanda_client::prelude::*;
//!
//! let request = CandlesRequest::new("EUR_USD").with_granularity("M5").with_count(20);
//! assert_eq!(request.path(), "instruments/EUR_USD/candles");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the client
pub use crate::application::config::{Config, Credentials, RestApiConfig, StorageConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Account-bound client
pub use crate::application::client::Client;

/// Service traits implemented by the client
pub use crate::application::interfaces::{
    account::AccountService, market::MarketService, order::OrderService,
};

// ============================================================================
// TRANSPORT AND REQUESTS
// ============================================================================

/// HTTP wrapper
pub use crate::model::http::{HttpClient, Query, build_url};

/// Request models
pub use crate::model::requests::{
    CandlesRequest, CreateOrderRequest, MarketOrder, PriceOnFill, TradeRequest,
};

/// Response key extraction
pub use crate::model::responses::{extract_key, extract_keys, from_key};

/// Retry policy
pub use crate::model::retry::RetryConfig;

/// Rounding helpers
pub use crate::model::utils::{format_decimal, round_to_precision, split_instrument};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Account models
pub use crate::presentation::account::AccountSummary;

/// Candle models
pub use crate::presentation::candle::{
    Candle, CandleRow, CandleTable, Ohlc, PriceStream, WebCandles,
};

/// Instrument models
pub use crate::presentation::instrument::{Instrument, InstrumentCollection};

/// Order models
pub use crate::presentation::order::{Direction, OrderState, OrderType, PendingOrder};

/// Price models
pub use crate::presentation::price::{ApiPrice, ClientPrice, HomeConversion, PriceBucket};

/// Trade models
pub use crate::presentation::trade::{AttachedOrder, OpenTrade};

/// Transaction models
pub use crate::presentation::transaction::{
    AccountChangeSet, AccountChanges, AccountChangesState, OrderFillTransaction,
};

// ============================================================================
// STORAGE AND UTILITIES
// ============================================================================

/// Instrument snapshot store
pub use crate::storage::InstrumentStore;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest types used in the HTTP wrapper signatures
pub use reqwest::{Method, StatusCode};
