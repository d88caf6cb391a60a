//! In-process refresh token ledger.

pub mod memory;

pub use memory::MemoryLedger;
