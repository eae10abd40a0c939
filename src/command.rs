use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::AccountId;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Open,
    Adjust,
    Transfer,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerCommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("Counterparty account is required for {kind:?}")]
    CounterpartyRequired { kind: OperationKind },
    #[error("Transfer amount must be greater than zero")]
    NonPositiveTransfer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    Open {
        account: AccountId,
        balance: Decimal,
    },
    Adjust {
        account: AccountId,
        delta: Decimal,
    },
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    },
}

impl LedgerCommand {
    /// Validates a raw operation the way the request layer would before it
    /// reaches the ledger.
    pub fn parse_command(
        kind: OperationKind,
        account: AccountId,
        counterparty: Option<AccountId>,
        amount: Option<Decimal>,
    ) -> Result<Self, LedgerCommandError> {
        match kind {
            OperationKind::Open => Ok(Self::Open {
                account,
                balance: amount.unwrap_or_default(),
            }),
            OperationKind::Adjust => Ok(Self::Adjust {
                account,
                delta: amount.ok_or(LedgerCommandError::AmountRequired { kind })?,
            }),
            OperationKind::Transfer => {
                let Some(to) = counterparty.filter(|to| !to.is_empty()) else {
                    return Err(LedgerCommandError::CounterpartyRequired { kind });
                };
                let amount = amount.ok_or(LedgerCommandError::AmountRequired { kind })?;
                if amount <= Decimal::ZERO {
                    return Err(LedgerCommandError::NonPositiveTransfer);
                }
                Ok(Self::Transfer {
                    from: account,
                    to,
                    amount,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_open() {
        let cmd =
            LedgerCommand::parse_command(OperationKind::Open, "A".into(), None, Some(dec!(5)))
                .unwrap();
        assert_eq!(
            cmd,
            LedgerCommand::Open {
                account: "A".into(),
                balance: dec!(5)
            }
        );

        // opening balance defaults to zero
        let cmd = LedgerCommand::parse_command(OperationKind::Open, "B".into(), None, None).unwrap();
        assert!(matches!(cmd, LedgerCommand::Open { balance, .. } if balance.is_zero()));
    }

    #[test]
    fn parse_adjust() {
        let cmd =
            LedgerCommand::parse_command(OperationKind::Adjust, "A".into(), None, Some(dec!(-3)))
                .unwrap();
        assert_eq!(
            cmd,
            LedgerCommand::Adjust {
                account: "A".into(),
                delta: dec!(-3)
            }
        );

        let err =
            LedgerCommand::parse_command(OperationKind::Adjust, "A".into(), None, None).unwrap_err();
        assert_eq!(
            err,
            LedgerCommandError::AmountRequired {
                kind: OperationKind::Adjust
            }
        );
        assert_eq!(err.to_string(), "Amount is required for Adjust");
    }

    #[test]
    fn parse_transfer() {
        let cmd = LedgerCommand::parse_command(
            OperationKind::Transfer,
            "A".into(),
            Some("B".into()),
            Some(dec!(0.01)),
        )
        .unwrap();
        assert_eq!(
            cmd,
            LedgerCommand::Transfer {
                from: "A".into(),
                to: "B".into(),
                amount: dec!(0.01)
            }
        );
    }

    #[test]
    fn parse_invalid_transfer() {
        for counterparty in [None, Some(String::new())] {
            let err = LedgerCommand::parse_command(
                OperationKind::Transfer,
                "A".into(),
                counterparty,
                Some(dec!(1)),
            )
            .unwrap_err();
            assert!(matches!(err, LedgerCommandError::CounterpartyRequired { .. }));
        }

        let err = LedgerCommand::parse_command(
            OperationKind::Transfer,
            "A".into(),
            Some("B".into()),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, LedgerCommandError::AmountRequired { .. }));

        for amount in [dec!(0), dec!(-1)] {
            let err = LedgerCommand::parse_command(
                OperationKind::Transfer,
                "A".into(),
                Some("B".into()),
                Some(amount),
            )
            .unwrap_err();
            assert_eq!(err, LedgerCommandError::NonPositiveTransfer);
        }
    }
}
