//! Middleware: connection gate for notification sockets.

pub mod gate;

pub use gate::{gate_connection, UserAuth};
