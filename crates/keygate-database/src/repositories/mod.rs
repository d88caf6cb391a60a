//! Concrete repository implementations.

pub mod refresh_token;

pub use refresh_token::RefreshTokenRepository;
