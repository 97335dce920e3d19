//! Data models: connection context, designated channels, auth-service results, socket events.

pub mod channel;
pub mod context;
pub mod event;
pub mod verification;

pub use channel::*;
pub use context::*;
pub use event::*;
pub use verification::*;
