use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::{
    account::{Account, AccountError},
    notification::NotificationPort,
    store::AccountStore,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("Transfer amount must be greater than zero, got {amount}")]
    NonPositiveAmount { amount: Decimal },
}

/// Moves funds between accounts of an [`AccountStore`] and notifies both
/// holders once the money has moved.
///
/// A transfer is two independent balance updates, debit first. Between them
/// the funds are visible in neither account.
pub struct TransferCoordinator<S, N> {
    store: S,
    notifier: N,
}

impl<S, N> TransferCoordinator<S, N>
where
    S: AccountStore,
    N: NotificationPort,
{
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn create_account(&self, account: Account) -> Result<(), AccountError> {
        self.store.create_account(account)
    }

    pub fn get_account(&self, id: &str) -> Option<Account> {
        self.store.get_account(id)
    }

    /// Transfers `amount` from `from_id` to `to_id` and returns the updated
    /// source account.
    ///
    /// Missing accounts are reported before anything is touched, source first.
    /// If the debit fails the destination is left alone. A credit that would
    /// overflow the destination puts the debited funds back on the source; any
    /// other credit failure leaves the debit in place.
    #[instrument(skip(self))]
    pub fn transfer_funds(
        &self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> Result<Account, TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::NonPositiveAmount { amount });
        }
        self.require_account_exists(from_id)?;
        self.require_account_exists(to_id)?;

        let account_from = self
            .store
            .update_balance(from_id, -amount)
            .inspect_err(|err| warn!(account = %from_id, %err, "Debit rejected"))?;
        let account_to = match self.store.update_balance(to_id, amount) {
            Ok(acc) => acc,
            Err(err @ AccountError::BalanceOverflow { .. }) => {
                warn!(account = %to_id, %err, "Credit rejected, returning funds to source");
                if let Err(refund_err) = self.store.update_balance(from_id, amount) {
                    warn!(account = %from_id, err = %refund_err, "Failed to return funds");
                }
                return Err(err.into());
            }
            Err(err) => {
                warn!(account = %to_id, %err, "Credit failed after debit");
                return Err(err.into());
            }
        };

        info!(
            from = %from_id,
            to = %to_id,
            amount = %amount,
            "Funds transferred"
        );

        self.notifier.notify_about_transfer(
            &account_from,
            &format!("The amount of {amount} was transferred to account {to_id}"),
        );
        self.notifier.notify_about_transfer(
            &account_to,
            &format!("The amount of {amount} was transferred from account {from_id}"),
        );

        Ok(account_from)
    }

    fn require_account_exists(&self, id: &str) -> Result<(), AccountError> {
        if self.store.get_account(id).is_none() {
            warn!(account = %id, "Account not found");
            return Err(AccountError::AccountNotFound { id: id.to_owned() });
        }
        Ok(())
    }
}
