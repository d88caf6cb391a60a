//! # keygate-database
//!
//! PostgreSQL connection management and the concrete refresh token ledger
//! repository for Keygate.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
