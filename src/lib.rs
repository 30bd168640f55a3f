/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # OANDA Client
//!
//! Asynchronous client for the OANDA v20 REST API.
//!
//! The crate wraps the account, instrument, pricing, order and trade endpoints
//! behind a single [`Client`](application::client::Client). Building the client
//! downloads the account's instruments (up to three attempts) and keeps them in
//! memory, so unit and price rounding never need another request.
//!
//! ## Layout
//!
//! - [`application`]: the client, its configuration and the service traits
//! - [`model`]: the HTTP wrapper, request bodies, key extraction and retries
//! - [`presentation`]: typed views of the API payloads (candles, prices, trades)
//! - [`storage`]: the JSON snapshot of the instrument list
//! - [`utils`]: logging and environment helpers
//!
//! ## Example
//!
//! ```rust,no_run
//! use oanda_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::from_default_credentials_file()?).await?;
//!
//!     let prices = client.get_prices(&["EUR_USD", "USD_JPY"]).await?;
//!     for price in prices {
//!         info!("{} bid {} ask {}", price.instrument, price.bid, price.ask);
//!     }
//!
//!     let trade = TradeRequest::new("EUR_USD", 100.0, Direction::Buy).with_stop_loss(1.05);
//!     let transaction_id = client.place_trade(&trade).await?;
//!     info!("Filled by {}", transaction_id);
//!     Ok(())
//! }
//! ```

/// Client, configuration and service traits
pub mod application;

/// Library-wide constants
pub mod constants;

/// Error type shared by every operation
pub mod error;

/// HTTP wrapper, request models and response helpers
pub mod model;

/// Commonly used types and traits
pub mod prelude;

/// Typed API payloads
pub mod presentation;

/// Local persistence of downloaded data
pub mod storage;

/// Logging and environment helpers
pub mod utils;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
