/// Account summary models
pub mod account;
/// Candle and candle table models
pub mod candle;
/// Instrument metadata models
pub mod instrument;
/// Order models
pub mod order;
/// Price and home conversion models
pub mod price;
/// Serialization utilities for API responses
pub mod serialization;
/// Trade models
pub mod trade;
/// Transaction and account change models
pub mod transaction;
