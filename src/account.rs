use rust_decimal::Decimal;
use thiserror::Error;

pub type AccountId = String;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account id {id} already exists!")]
    DuplicateAccount { id: AccountId },
    #[error("The account id {id} doesn't exist!")]
    AccountNotFound { id: AccountId },
    #[error("Not enough funds in account id {id} to perform this operation!")]
    InsufficientFunds { id: AccountId },
    #[error("Account id {id} cannot be opened with a negative balance")]
    NegativeBalance { id: AccountId },
    #[error("Balance of account id {id} would exceed the supported maximum")]
    BalanceOverflow { id: AccountId },
}

/// Balance record of a single account.
///
/// The store hands out clones, so changing a returned value never affects
/// the ledger. Balance only moves through [`Account::apply_delta`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    balance: Decimal,
}

impl Account {
    pub fn new(id: impl Into<AccountId>) -> Self {
        Self {
            id: id.into(),
            balance: Decimal::ZERO,
        }
    }

    pub fn with_balance(id: impl Into<AccountId>, balance: Decimal) -> Result<Self, AccountError> {
        let id = id.into();
        if balance < Decimal::ZERO {
            return Err(AccountError::NegativeBalance { id });
        }
        Ok(Self { id, balance })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds `delta` to the balance, refusing any change that would overdraw or
    /// overflow. On error the balance is left as it was.
    pub fn apply_delta(&mut self, delta: Decimal) -> Result<(), AccountError> {
        if delta < Decimal::ZERO && self.balance < delta.abs() {
            return Err(AccountError::InsufficientFunds {
                id: self.id.clone(),
            });
        }
        self.balance = self
            .balance
            .checked_add(delta)
            .ok_or_else(|| AccountError::BalanceOverflow {
                id: self.id.clone(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_account_is_empty() {
        let acc = Account::new("Id-123");
        assert_eq!(acc.id(), "Id-123");
        assert_eq!(acc.balance(), Decimal::ZERO);
    }

    #[test]
    fn opening_balance() {
        let acc = Account::with_balance("Id-123", dec!(1000)).unwrap();
        assert_eq!(acc.balance(), dec!(1000));

        // negative zero is still zero
        let acc = Account::with_balance("Id-0", dec!(-0.00)).unwrap();
        assert!(acc.balance().is_zero());

        let err = Account::with_balance("Id-neg", dec!(-0.01)).unwrap_err();
        assert_eq!(
            err,
            AccountError::NegativeBalance {
                id: "Id-neg".to_string()
            }
        );
    }

    #[test]
    fn apply_delta() {
        let mut acc = Account::with_balance("A", dec!(10)).unwrap();
        acc.apply_delta(dec!(2.5)).unwrap();
        assert_eq!(acc.balance(), dec!(12.5));
        acc.apply_delta(dec!(-12.5)).unwrap();
        assert_eq!(acc.balance(), Decimal::ZERO);

        // zero delta on an empty account is fine
        acc.apply_delta(Decimal::ZERO).unwrap();
        assert_eq!(acc.balance(), Decimal::ZERO);
    }

    #[test]
    fn overdraft_leaves_balance_untouched() {
        let mut acc = Account::with_balance("A", dec!(123.45)).unwrap();
        let err = acc.apply_delta(dec!(-123.46)).unwrap_err();
        assert_eq!(err, AccountError::InsufficientFunds { id: "A".to_string() });
        assert_eq!(
            err.to_string(),
            "Not enough funds in account id A to perform this operation!"
        );
        assert_eq!(acc.balance(), dec!(123.45));
    }

    #[test]
    fn overflow_leaves_balance_untouched() {
        let mut acc = Account::with_balance("B", Decimal::MAX).unwrap();
        let err = acc.apply_delta(Decimal::ONE).unwrap_err();
        assert_eq!(err, AccountError::BalanceOverflow { id: "B".to_string() });
        assert_eq!(acc.balance(), Decimal::MAX);

        // withdrawing from the maximum still works
        acc.apply_delta(dec!(-1)).unwrap();
        assert_eq!(acc.balance(), Decimal::MAX - Decimal::ONE);
    }
}
