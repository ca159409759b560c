//! QuantaGrid Mesh Visualization Server
//!
//! Run the mesh simulation and serve the visualization frontend.

use std::env;
use std::sync::Arc;

use quantagrid_sim::{Simulation, SimulationHandle, SystemTime, Ticker};
use quantagrid_vis::{ServerConfig, VisServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "quantagrid_vis=info,quantagrid_sim=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Environment first, then positional `[nodes] [port]`
    let args: Vec<String> = env::args().skip(1).collect();
    let config = ServerConfig::from_env()?.with_args(&args)?;

    tracing::info!(
        nodes = %config.simulation.node_count,
        model = %config.simulation.model,
        tick_ms = config.simulation.tick_interval.as_millis() as u64,
        "Starting QuantaGrid mesh visualizer"
    );

    let sim = Simulation::new(config.simulation);
    let period = sim.tick_interval();
    let handle = SimulationHandle::new(sim, Arc::new(SystemTime));
    let ticker = Ticker::spawn(handle.clone(), period)?;

    let server = VisServer::new(handle);
    server.serve(config.addr, shutdown_signal()).await?;

    ticker.shutdown().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
