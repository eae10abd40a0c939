use std::fs::File;

use anyhow::{Context, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use transfer_ledger::{
    bin_utils::{OperationError, Service},
    notification::TracingNotifier,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        notifier: TracingNotifier,
        error_printer: Box::new(|line, err| match err {
            OperationError::CommandErr(err) => {
                eprintln!("Error at line {line}: {err}")
            }
            // business rejections, not input errors
            OperationError::AccountErr(_) | OperationError::TransferErr(_) => {
                warn!(line, %err, "Operation rejected")
            }
        }),
    };
    service.run()
}
