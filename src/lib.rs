/// Account record and the overdraft rule every balance change goes through.
pub mod account;

/// Account storage interface, plus a concurrent "in memory" implementation.
///
/// Each operation is atomic for the single account it touches; nothing here
/// ever locks two accounts at once.
pub mod store;

/// Delivery of transfer notices to account holders.
pub mod notification;

/// Two-leg funds transfer on top of [`store`]. Debit and credit are separate
/// atomic steps, so a transfer as a whole is not atomic.
pub mod transfer;

/// Validation of raw ledger operations into commands for [`transfer`].
pub mod command;

/// CSV batch runner behind the `transfer-ledger` binary. Kept in the library
/// so the integration test can drive it with in-memory input and output.
pub mod bin_utils;
