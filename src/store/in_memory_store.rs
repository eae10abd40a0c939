use dashmap::{DashMap, mapref::entry::Entry};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::account::{Account, AccountError, AccountId};

use super::AccountStore;

/// [`AccountStore`] backed by a sharded concurrent map.
///
/// Every operation touches a single key, and holds that key's shard lock only
/// for the duration of the call.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: DashMap<AccountId, Account>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create_account(&self, account: Account) -> Result<(), AccountError> {
        match self.accounts.entry(account.id().to_owned()) {
            Entry::Occupied(entry) => {
                warn!(account = %entry.key(), "Account already exists");
                Err(AccountError::DuplicateAccount {
                    id: entry.key().clone(),
                })
            }
            Entry::Vacant(entry) => {
                debug!(
                    account = %entry.key(),
                    balance = %account.balance(),
                    "Account created"
                );
                entry.insert(account);
                Ok(())
            }
        }
    }

    fn get_account(&self, id: &str) -> Option<Account> {
        self.accounts.get(id).map(|acc| acc.clone())
    }

    fn update_balance(&self, id: &str, delta: Decimal) -> Result<Account, AccountError> {
        // the guard keeps the shard write-locked across check and apply
        let Some(mut acc) = self.accounts.get_mut(id) else {
            return Err(AccountError::AccountNotFound { id: id.to_owned() });
        };
        acc.apply_delta(delta)?;
        debug!(account = %id, delta = %delta, balance = %acc.balance(), "Balance updated");
        Ok(acc.clone())
    }

    fn accounts(&self) -> Vec<Account> {
        self.accounts.iter().map(|acc| acc.value().clone()).collect()
    }

    fn clear_accounts(&self) {
        self.accounts.clear();
    }
}
