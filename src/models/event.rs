//! Messages exchanged on a notification socket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sent once after an authorized socket is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionEstablished {
    pub socket_id: String,
    pub channel: String,
    pub connected_at: DateTime<Utc>,
}

/// Event sent over WebSocket to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    ConnectionEstablished(ConnectionEstablished),
    Pong,
}

/// WebSocket client message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientMessage {
    Ping,
}
