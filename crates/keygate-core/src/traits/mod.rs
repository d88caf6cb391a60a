//! Shared traits implemented across Keygate crates.

pub mod ledger;

pub use ledger::RefreshTokenLedger;
