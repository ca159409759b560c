//! WebSocket streaming of simulation snapshots.
//!
//! Every snapshot published by the simulation is forwarded to the client.
//! Clients drive the mesh with JSON commands; their effect arrives through
//! the same snapshot stream.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use quantagrid_sim::{ModelId, SimulationHandle, SimulationSnapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub(crate) async fn ws_handler(
    ws: WebSocketUpgrade,
    State(handle): State<SimulationHandle>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, handle))
}

/// Commands accepted from the client.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsCommand {
    GetSnapshot,
    ToggleEmergency,
    SetNodes { count: i64 },
    SelectModel { model: String },
}

/// Messages sent to the client.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsResponse {
    Snapshot(SimulationSnapshot),
    Error { message: String },
}

async fn handle_ws(mut socket: WebSocket, handle: SimulationHandle) {
    info!("WebSocket client connected");
    let mut snapshots = handle.subscribe();

    let initial = snapshots.borrow_and_update().clone();
    if let Err(e) = send(&mut socket, &WsResponse::Snapshot(initial)).await {
        warn!("Failed to send initial snapshot: {}", e);
        return;
    }

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        debug!("Received from client: {}", text.as_str());
                        if let Some(reply) = apply_command(&handle, text.as_str()).await {
                            if let Err(e) = send(&mut socket, &reply).await {
                                warn!("Failed to send reply: {}", e);
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(Message::Ping(data))) => {
                        if let Err(e) = socket.send(Message::Pong(data)).await {
                            warn!("Failed to send pong: {}", e);
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                if let Err(e) = send(&mut socket, &WsResponse::Snapshot(snapshot)).await {
                    warn!("Failed to send snapshot: {}", e);
                    break;
                }
            }
        }
    }

    info!("WebSocket client disconnected");
}

/// Apply a client command. Returns a direct reply when one is needed;
/// state changes are delivered through the snapshot stream instead.
async fn apply_command(handle: &SimulationHandle, text: &str) -> Option<WsResponse> {
    let command = match serde_json::from_str::<WsCommand>(text) {
        Ok(command) => command,
        Err(e) => {
            return Some(WsResponse::Error {
                message: format!("invalid command: {}", e),
            })
        }
    };

    match command {
        WsCommand::GetSnapshot => Some(WsResponse::Snapshot(handle.snapshot().await)),
        WsCommand::ToggleEmergency => {
            handle.toggle_emergency().await;
            None
        }
        WsCommand::SetNodes { count } => {
            handle.set_node_count(count).await;
            None
        }
        WsCommand::SelectModel { model } => match model.parse::<ModelId>() {
            Ok(model) => {
                handle.select_model(model).await;
                None
            }
            Err(e) => Some(WsResponse::Error {
                message: e.to_string(),
            }),
        },
    }
}

async fn send(socket: &mut WebSocket, response: &WsResponse) -> Result<(), axum::Error> {
    let json = serde_json::to_string(response).map_err(axum::Error::new)?;
    socket.send(Message::Text(json.into())).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantagrid_sim::{FixedTime, Mode, NodeCount, Simulation};
    use std::sync::Arc;

    fn handle() -> SimulationHandle {
        SimulationHandle::new(Simulation::default(), Arc::new(FixedTime(0.0)))
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            serde_json::from_str::<WsCommand>(r#"{"type":"toggle_emergency"}"#).unwrap(),
            WsCommand::ToggleEmergency
        );
        assert_eq!(
            serde_json::from_str::<WsCommand>(r#"{"type":"set_nodes","count":9}"#).unwrap(),
            WsCommand::SetNodes { count: 9 }
        );
        assert_eq!(
            serde_json::from_str::<WsCommand>(r#"{"type":"select_model","model":"Gemma-3n-Pro"}"#)
                .unwrap(),
            WsCommand::SelectModel { model: "Gemma-3n-Pro".into() }
        );
    }

    #[test]
    fn snapshot_response_is_tagged() {
        let snap = Simulation::default().snapshot(0.0);
        let json = serde_json::to_value(WsResponse::Snapshot(snap)).unwrap();
        assert_eq!(json["type"], "snapshot");
        assert_eq!(json["network_status"], "online");
    }

    #[tokio::test]
    async fn commands_update_simulation() {
        let h = handle();

        assert!(apply_command(&h, r#"{"type":"toggle_emergency"}"#).await.is_none());
        assert_eq!(h.mode().await, Mode::Emergency);

        assert!(apply_command(&h, r#"{"type":"set_nodes","count":0}"#).await.is_none());
        assert_eq!(h.node_count().await, NodeCount::MIN);

        match apply_command(&h, r#"{"type":"get_snapshot"}"#).await {
            Some(WsResponse::Snapshot(snap)) => assert_eq!(snap.layout.node_count(), 1),
            other => panic!("expected snapshot, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn bad_commands_reply_with_error() {
        let h = handle();

        let reply = apply_command(&h, "not json").await;
        assert!(matches!(reply, Some(WsResponse::Error { .. })));

        let reply = apply_command(&h, r#"{"type":"select_model","model":"Gemma-4"}"#).await;
        match reply {
            Some(WsResponse::Error { message }) => assert_eq!(message, "unknown model: Gemma-4"),
            other => panic!("expected error, got {:?}", other),
        }
    }
}
