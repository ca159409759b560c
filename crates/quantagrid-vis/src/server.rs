//! Axum web server exposing snapshots and mesh controls.

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use quantagrid_sim::{Mode, ModelId, ModelProfile, SimulationHandle, SimulationSnapshot};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::ws::ws_handler;
use crate::Result;

/// Visualisation server.
pub struct VisServer {
    handle: SimulationHandle,
}

impl VisServer {
    /// Serve the simulation behind `handle`.
    pub fn new(handle: SimulationHandle) -> Self {
        Self { handle }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index_handler))
            // API routes
            .route("/api/status", get(status_handler))
            .route("/api/snapshot", get(snapshot_handler))
            .route("/api/models", get(models_handler))
            .route("/api/nodes", post(nodes_handler))
            .route("/api/emergency/toggle", post(toggle_handler))
            .route("/api/model", post(model_handler))
            // WebSocket for live snapshots
            .route("/ws", get(ws_handler))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.handle.clone())
    }

    /// Run the server until `shutdown` resolves.
    pub async fn serve(
        self,
        addr: SocketAddr,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(%addr, "Visualization server running on http://{}", listener.local_addr()?);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

/// Serve the SVG frontend.
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// Server status response.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub tick: u64,
    pub node_count: usize,
    pub mode: Mode,
    pub network_status: String,
}

async fn status_handler(State(handle): State<SimulationHandle>) -> Json<StatusResponse> {
    let snap = handle.latest();
    Json(StatusResponse {
        status: "ok".to_string(),
        tick: snap.tick,
        node_count: snap.node_count.get(),
        mode: snap.mode,
        network_status: snap.network_status.label().to_string(),
    })
}

async fn snapshot_handler(State(handle): State<SimulationHandle>) -> Json<SimulationSnapshot> {
    Json(handle.snapshot().await)
}

/// One row of the model catalogue.
#[derive(Debug, Serialize)]
pub struct ModelEntry {
    pub model: ModelId,
    pub profile: ModelProfile,
}

async fn models_handler() -> Json<Vec<ModelEntry>> {
    Json(
        ModelId::ALL
            .into_iter()
            .map(|model| ModelEntry {
                model,
                profile: model.profile(),
            })
            .collect(),
    )
}

#[derive(Deserialize)]
struct NodesRequest {
    count: i64,
}

async fn nodes_handler(
    State(handle): State<SimulationHandle>,
    Json(req): Json<NodesRequest>,
) -> Json<SimulationSnapshot> {
    Json(handle.set_node_count(req.count).await)
}

async fn toggle_handler(State(handle): State<SimulationHandle>) -> Json<SimulationSnapshot> {
    Json(handle.toggle_emergency().await)
}

#[derive(Deserialize)]
struct ModelRequest {
    model: String,
}

async fn model_handler(
    State(handle): State<SimulationHandle>,
    Json(req): Json<ModelRequest>,
) -> Result<Json<SimulationSnapshot>> {
    let model: ModelId = req.model.parse()?;
    Ok(Json(handle.select_model(model).await))
}
