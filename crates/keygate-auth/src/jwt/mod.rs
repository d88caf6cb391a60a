//! JWT token encoding, decoding, and claims management.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, ClaimsMap};
pub use decoder::TokenDecoder;
pub use encoder::TokenEncoder;
