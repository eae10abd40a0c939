use rust_decimal::Decimal;

use crate::account::{Account, AccountError};

pub mod in_memory_store;

/// Keyed account storage with atomic per-account mutation.
///
/// Implementations must serialize concurrent `update_balance` calls on the same
/// account and must never hold more than one account locked at a time.
pub trait AccountStore: Send + Sync {
    /// Inserts `account` unless its id is already taken.
    fn create_account(&self, account: Account) -> Result<(), AccountError>;

    fn get_account(&self, id: &str) -> Option<Account>;

    /// Adds `delta` to the balance of `id` and returns the updated record.
    ///
    /// A negative `delta` larger than the current balance fails with
    /// [`AccountError::InsufficientFunds`] and leaves the balance unchanged.
    fn update_balance(&self, id: &str, delta: Decimal) -> Result<Account, AccountError>;

    /// Snapshot of every stored account, in no particular order.
    fn accounts(&self) -> Vec<Account>;

    fn clear_accounts(&self);
}
