//! WebSocket handler for per-user notification channels. Enforces the gate's decision.

use axum::{
    extract::{
        ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade},
        Extension, Path,
    },
    response::Response,
};
use chrono::Utc;
use futures::{SinkExt, StreamExt};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::middleware::UserAuth;
use crate::models::{designated_channel, ClientMessage, ConnectionEstablished, ServerEvent};

/// Close code sent to sockets the gate did not authorize.
pub const CLOSE_UNAUTHORIZED: u16 = 4003;

/// GET /ws/notification/:user_id/ — upgrade, then close immediately unless authorized.
pub async fn notification_ws(
    Path(user_id): Path<String>,
    Extension(UserAuth(authorized)): Extension<UserAuth>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| async move {
        if authorized {
            handle_socket(socket, user_id).await;
        } else {
            reject_socket(socket, &user_id).await;
        }
    })
}

async fn reject_socket(mut socket: WebSocket, user_id: &str) {
    info!(user_id = %user_id, "ws rejected: not authorized for channel");
    let frame = CloseFrame {
        code: CLOSE_UNAUTHORIZED,
        reason: "unauthorized".into(),
    };
    if let Err(e) = socket.send(Message::Close(Some(frame))).await {
        debug!(error = %e, "close frame not delivered");
    }
}

async fn handle_socket(socket: WebSocket, user_id: String) {
    let socket_id = generate_socket_id();
    let channel = designated_channel(&user_id);
    info!(socket_id = %socket_id, channel = %channel, "ws connected");

    let (mut sender, mut receiver) = socket.split();

    let established = ServerEvent::ConnectionEstablished(ConnectionEstablished {
        socket_id: socket_id.clone(),
        channel,
        connected_at: Utc::now(),
    });
    let Ok(established) = serde_json::to_string(&established) else {
        return;
    };
    if sender.send(Message::Text(established)).await.is_err() {
        return;
    }

    while let Some(Ok(msg)) = receiver.next().await {
        match msg {
            Message::Text(text) => {
                let Some(reply) = reply_to(&text) else {
                    debug!(socket_id = %socket_id, "ignoring unknown client message");
                    continue;
                };
                if sender.send(Message::Text(reply)).await.is_err() {
                    warn!(socket_id = %socket_id, "send failed, dropping socket");
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    info!(socket_id = %socket_id, "ws disconnected");
}

/// Reply for a client text frame, if it is one we understand.
pub(crate) fn reply_to(text: &str) -> Option<String> {
    match serde_json::from_str::<ClientMessage>(text).ok()? {
        ClientMessage::Ping => serde_json::to_string(&ServerEvent::Pong).ok(),
    }
}

/// Generate a unique socket/connection id.
pub fn generate_socket_id() -> String {
    format!("{}.{}", std::process::id(), Uuid::new_v4().as_simple())
}
