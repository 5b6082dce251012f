//! WebSocket Endpoint
//!
//! Upgrades `GET /ws/tasks` connections and forwards each client's outbound
//! queue onto its socket. Inbound frames are ignored; the channel is
//! push-only.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::AppState;
use crate::realtime::ClientRegistry;

/// Handler for GET /ws/tasks
pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.registry.clone()))
}

/// Runs one client connection: register, forward pushes, deregister.
async fn handle_socket(socket: WebSocket, registry: Arc<ClientRegistry>) {
    let (id, mut outbound) = registry.register().await;
    info!(client = id, "realtime client connected");

    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            push = outbound.recv() => {
                let Some(push) = push else { break };
                let frame = match serde_json::to_string(&push) {
                    Ok(text) => text,
                    Err(err) => {
                        debug!(client = id, %err, "skipping unserializable push");
                        continue;
                    }
                };
                if sink.send(Message::Text(frame)).await.is_err() {
                    break;
                }
            }
            incoming = stream.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // Push-only channel, inbound frames are dropped
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    registry.unregister(id).await;
    info!(client = id, "realtime client disconnected");
}
