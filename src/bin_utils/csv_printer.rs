use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Balance<'a> {
    pub account: &'a str,
    pub balance: Decimal,
}

pub fn print_balances<'a, W>(
    output: &mut W,
    balances: impl Iterator<Item = Balance<'a>>,
) -> Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for balance in balances {
        writer
            .serialize(&balance)
            .with_context(|| format!("Failed to write balance of `{}`", balance.account))?;
    }
    writer.flush().context("Failed to flush balances")
}
