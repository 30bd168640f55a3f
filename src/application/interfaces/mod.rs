/// Account, trade and pending order queries
pub mod account;
/// Instrument, candle and pricing queries
pub mod market;
/// Order placement and trade closing
pub mod order;
