//! # keygate-api
//!
//! HTTP API layer for Keygate: routes, authentication and role-gate
//! middleware, handlers, DTOs, and error-to-response mapping.

pub mod directory;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use directory::{DirectoryUser, UserDirectory};
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
