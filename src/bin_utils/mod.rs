//! Batch front end for [`crate::transfer`]: reads ledger operations as CSV,
//! applies them in order and prints the final balances.
//!
//! This plays the part of the request layer, so validation of raw input
//! happens here before anything reaches the coordinator.

use std::io::{Read, Write};

use crate::{
    account::{Account, AccountError},
    command::{LedgerCommand, LedgerCommandError},
    notification::NotificationPort,
    store::{AccountStore, in_memory_store::InMemoryAccountStore},
    transfer::{TransferCoordinator, TransferError},
};
use anyhow::{Context, Result};
use csv_parser::CsvOperationParser;
use csv_printer::{Balance, print_balances};
use thiserror::Error;
use tracing::debug;

pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    CommandErr(#[from] LedgerCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error(transparent)]
    TransferErr(#[from] TransferError),
}

pub struct Service<'w, R, W: 'w, N> {
    pub input: R,
    pub output: &'w mut W,
    pub notifier: N,
    pub error_printer: Box<dyn FnMut(u64, OperationError)>,
}

impl<'w, R, W, N> Service<'w, R, W, N>
where
    R: Read,
    W: Write + 'w,
    N: NotificationPort,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let coordinator = TransferCoordinator::new(InMemoryAccountStore::new(), self.notifier);

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed operation at line {line}"))?;
            debug!(line, kind = ?row.kind, account = %row.account, "Applying operation");
            if let Err(err) = apply_operation(&coordinator, row) {
                (self.error_printer)(line, err);
            }
        }

        let mut accounts = coordinator.store().accounts();
        accounts.sort_by(|a, b| a.id().cmp(b.id()));
        print_balances(
            self.output,
            accounts.iter().map(|acc| Balance {
                account: acc.id(),
                balance: acc.balance(),
            }),
        )
    }
}

fn apply_operation<S, N>(
    coordinator: &TransferCoordinator<S, N>,
    row: csv_parser::Operation,
) -> Result<(), OperationError>
where
    S: AccountStore,
    N: NotificationPort,
{
    match LedgerCommand::parse_command(row.kind, row.account, row.counterparty, row.amount)? {
        LedgerCommand::Open { account, balance } => {
            coordinator.create_account(Account::with_balance(account, balance)?)?;
        }
        LedgerCommand::Adjust { account, delta } => {
            coordinator.store().update_balance(&account, delta)?;
        }
        LedgerCommand::Transfer { from, to, amount } => {
            coordinator.transfer_funds(&from, &to, amount)?;
        }
    }
    Ok(())
}
