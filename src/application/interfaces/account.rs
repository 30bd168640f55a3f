use crate::error::AppError;
use crate::presentation::account::AccountSummary;
use crate::presentation::instrument::Instrument;
use crate::presentation::order::PendingOrder;
use crate::presentation::trade::OpenTrade;
use crate::presentation::transaction::AccountChanges;
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the account summary (`accounts/{id}/summary`)
    async fn get_account_summary(&self) -> Result<AccountSummary, AppError>;

    /// Gets the instruments tradable on the account
    async fn get_account_instruments(&self) -> Result<Vec<Instrument>, AppError>;

    /// Gets the identifier of the last transaction on the account
    async fn get_last_transaction_id(&self) -> Result<String, AppError>;

    /// Gets everything that changed since a transaction
    ///
    /// # Arguments
    /// * `last_transaction_id` - Last transaction the caller has already seen
    ///
    /// # Returns
    /// * The changes, the current account state and the new last transaction id
    async fn get_state_changes(&self, last_transaction_id: &str)
    -> Result<AccountChanges, AppError>;

    /// Gets one trade by identifier
    async fn get_open_trade(&self, trade_id: &str) -> Result<OpenTrade, AppError>;

    /// Gets all open trades
    async fn get_open_trades(&self) -> Result<Vec<OpenTrade>, AppError>;

    /// Gets all pending orders
    async fn get_pending_orders(&self) -> Result<Vec<PendingOrder>, AppError>;
}
