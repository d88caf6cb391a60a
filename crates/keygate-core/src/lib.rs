//! # keygate-core
//!
//! Core crate for Keygate. Contains configuration schemas, shared traits,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Keygate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
