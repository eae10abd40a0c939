use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use crate::account::Account;

/// Delivers transfer notices to account holders.
///
/// Delivery is fire-and-forget: failures and retries are the implementor's
/// concern and never reach the caller.
pub trait NotificationPort: Send + Sync {
    fn notify_about_transfer(&self, account: &Account, message: &str);
}

impl<T> NotificationPort for Arc<T>
where
    T: NotificationPort + ?Sized,
{
    fn notify_about_transfer(&self, account: &Account, message: &str) {
        (**self).notify_about_transfer(account, message)
    }
}

/// Emits every notice as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify_about_transfer(&self, account: &Account, message: &str) {
        info!(account = %account.id(), message, "Sending notification");
    }
}

/// Keeps notices in memory, in delivery order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(Account, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices delivered so far.
    pub fn sent(&self) -> Vec<(Account, String)> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NotificationPort for RecordingNotifier {
    fn notify_about_transfer(&self, account: &Account, message: &str) {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((account.clone(), message.to_owned()));
    }
}
