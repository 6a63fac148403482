//! Session token verification.

mod jwt;

pub use jwt::{JwtSessionVerifier, SessionKey, SessionTokenConfig};
