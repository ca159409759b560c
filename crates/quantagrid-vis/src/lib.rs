//! QuantaGrid Mesh Visualization
//!
//! Live view of the adaptive mesh: node layout, performance metrics, network
//! status and the emergency toggle, served over HTTP and WebSocket.
//!
//! # Architecture
//!
//! - **Config**: listen address and initial simulation settings
//! - **REST API**: read snapshots, drive node count / mode / model
//! - **WebSocket**: streams every snapshot to the SVG frontend
//!
//! # Usage
//!
//! ```ignore
//! let config = ServerConfig::from_env()?;
//! let sim = Simulation::new(config.simulation);
//! let period = sim.tick_interval();
//! let handle = SimulationHandle::new(sim, Arc::new(SystemTime));
//! let ticker = Ticker::spawn(handle.clone(), period)?;
//!
//! VisServer::new(handle).serve(config.addr, shutdown_signal()).await?;
//! ticker.shutdown().await;
//! ```

mod config;
mod error;
mod server;
mod ws;

pub use config::{ServerConfig, ENV_ADDR, ENV_MODEL, ENV_NODES, ENV_TICK_MS};
pub use error::{Error, Result};
pub use server::{ModelEntry, StatusResponse, VisServer};
pub use ws::{WsCommand, WsResponse};
