//! # keygate-auth
//!
//! Token signing, verification, and refresh token rotation for Keygate.
//!
//! ## Modules
//!
//! - `jwt` — claims model, token encoder, and token decoder
//! - `ledger` — in-memory refresh token ledger for single-node deployments
//! - `rotation` — refresh token issuance and rotation against a ledger

pub mod jwt;
pub mod ledger;
pub mod rotation;

pub use jwt::{Claims, ClaimsMap, TokenDecoder, TokenEncoder};
pub use ledger::MemoryLedger;
pub use rotation::RefreshManager;
