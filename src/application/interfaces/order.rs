use crate::error::AppError;
use crate::model::requests::TradeRequest;
use crate::presentation::transaction::OrderFillTransaction;

use async_trait::async_trait;

#[async_trait]
/// Service for placing market orders and closing trades
///
/// Orders are always market orders; stop loss and take profit can only be
/// attached at fill time through [`TradeRequest`].
pub trait OrderService: Send + Sync {
    /// Places a market order for a signed unit count, sent as given
    async fn place_market_order(
        &self,
        instrument: &str,
        units: f64,
    ) -> Result<OrderFillTransaction, AppError>;

    /// Places a directional trade and returns the fill transaction id
    ///
    /// Units and prices are rounded using the cached instrument settings.
    async fn place_trade(&self, trade: &TradeRequest) -> Result<String, AppError>;

    /// Closes a trade completely
    async fn close_trade(&self, trade_id: &str) -> Result<(), AppError>;
}
