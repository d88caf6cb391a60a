//! Request-gating middleware.

pub mod auth;
pub mod rbac;
