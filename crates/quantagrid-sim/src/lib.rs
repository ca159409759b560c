//! QuantaGrid Simulation Engine
//!
//! Drives the mesh visualisation: a fixed-period clock advances the
//! performance metrics toward their bounds while emergency mode is active,
//! and recomputes the mesh layout for the tick's timestamp.
//!
//! # Architecture
//!
//! - **Metrics**: eases latency, accuracy, uptime and adaptability
//! - **Mode**: normal / emergency toggle and the network status label
//! - **Models**: display constants for the selectable models
//! - **Simulation**: owns all state, produces immutable snapshots
//! - **Handle**: shared, lock-protected access plus snapshot subscription
//! - **Clock**: cancelable periodic tick scheduler
//!
//! # Usage
//!
//! ```ignore
//! let handle = SimulationHandle::new(Simulation::default(), Arc::new(SystemTime));
//! let ticker = Ticker::spawn(handle.clone(), DEFAULT_TICK_INTERVAL)?;
//!
//! handle.toggle_emergency().await;
//! let mut snapshots = handle.subscribe();
//! snapshots.changed().await?;
//!
//! ticker.shutdown().await;
//! ```

mod error;
mod metrics;
mod mode;
mod models;
mod simulation;
mod handle;
mod clock;

pub use error::{Error, Result};
pub use metrics::{MetricBars, MetricBounds, MetricsSimulator, PerformanceMetrics};
pub use mode::{Mode, ModeController, NetworkStatus};
pub use models::{ModelId, ModelProfile};
pub use simulation::{Simulation, SimulationConfig, SimulationSnapshot, DEFAULT_TICK_INTERVAL};
pub use handle::SimulationHandle;
pub use clock::{FixedTime, SystemTime, Ticker, TimeSource};

pub use quantagrid_topology::{MeshEdge, MeshLayout, MeshNode, NodeCount, Palette, Point};
