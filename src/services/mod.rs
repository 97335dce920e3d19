//! Business logic: token verification, user lookup, and the connection gatekeeper.

pub mod directory;
pub mod gatekeeper;
pub mod verifier;

pub use directory::{InMemoryUserDirectory, PgUserDirectory, UserDirectory};
pub use gatekeeper::Gatekeeper;
pub use verifier::{HttpTokenVerifier, TokenVerifier};
