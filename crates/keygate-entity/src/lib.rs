//! # keygate-entity
//!
//! Domain entity models for Keygate. Database entities derive
//! `sqlx::FromRow` in addition to `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`.

pub mod token;

pub use token::{RefreshTokenRecord, SignedToken, TokenPair};
