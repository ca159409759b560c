//! Simulation controller.
//!
//! [`Simulation`] owns every piece of mutable state: node count, mode,
//! metrics, selected model and the tick counter. Consumers never see the
//! state directly; they receive immutable [`SimulationSnapshot`] values.

use std::time::Duration;

use quantagrid_topology::{generate, MeshLayout, NodeCount, Palette};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::metrics::{MetricBars, MetricsSimulator, PerformanceMetrics};
use crate::mode::{Mode, ModeController, NetworkStatus};
use crate::models::{ModelId, ModelProfile};
use crate::{Error, Result};

/// Default period between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Period of the tick scheduler
    pub tick_interval: Duration,
    /// Initial number of mesh nodes
    pub node_count: NodeCount,
    /// Initially selected model
    pub model: ModelId,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            node_count: NodeCount::DEFAULT,
            model: ModelId::default(),
        }
    }
}

impl SimulationConfig {
    /// Check the configuration is usable by the scheduler.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval.is_zero() {
            return Err(Error::ZeroTickInterval);
        }
        Ok(())
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSnapshot {
    /// Ticks applied so far
    pub tick: u64,
    /// Timestamp (seconds) the layout was computed for
    pub timestamp: f64,
    pub node_count: NodeCount,
    pub mode: Mode,
    pub network_status: NetworkStatus,
    /// Indicator text for `network_status`
    pub status_text: &'static str,
    pub response_banner: &'static str,
    pub metrics: PerformanceMetrics,
    pub bars: MetricBars,
    pub palette: Palette,
    pub model: ModelId,
    pub model_profile: ModelProfile,
    pub layout: MeshLayout,
}

/// Owns the simulation state and applies ticks and control inputs.
#[derive(Debug, Clone)]
pub struct Simulation {
    tick_interval: Duration,
    node_count: NodeCount,
    mode: ModeController,
    metrics: MetricsSimulator,
    model: ModelId,
    tick: u64,
}

impl Simulation {
    /// Create a simulation at baseline metrics in normal mode.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            node_count: config.node_count,
            model: config.model,
            mode: ModeController::new(),
            metrics: MetricsSimulator::new(),
            tick: 0,
            tick_interval: config.tick_interval,
        }
    }

    /// Advance one tick and lay out the mesh at `timestamp_secs`.
    ///
    /// Order within a tick: read mode, step metrics, recompute layout.
    pub fn tick(&mut self, timestamp_secs: f64) -> SimulationSnapshot {
        let mode = self.mode.mode();
        let was_converged = self.metrics.is_converged();
        let metrics = self.metrics.tick(mode);
        self.tick += 1;

        debug!(
            tick = self.tick,
            %mode,
            latency = metrics.latency,
            accuracy = metrics.accuracy,
            "Tick"
        );
        if !was_converged && self.metrics.is_converged() {
            info!(tick = self.tick, "Metrics converged");
        }

        self.snapshot(timestamp_secs)
    }

    /// Current state with the layout at `timestamp_secs`, without ticking.
    pub fn snapshot(&self, timestamp_secs: f64) -> SimulationSnapshot {
        let mode = self.mode.mode();
        let status = self.mode.network_status();
        let metrics = self.metrics.metrics();

        SimulationSnapshot {
            tick: self.tick,
            timestamp: timestamp_secs,
            node_count: self.node_count,
            mode,
            network_status: status,
            status_text: status.display_text(),
            response_banner: mode.response_banner(),
            metrics,
            bars: MetricBars::from(&metrics),
            palette: mode.palette(),
            model: self.model,
            model_profile: self.model.profile(),
            layout: generate(self.node_count, timestamp_secs),
        }
    }

    /// Set the node count, clamping into `[1, 12]` like a bounded slider.
    pub fn set_node_count(&mut self, requested: i64) -> NodeCount {
        let count = NodeCount::clamped(requested);
        if count.get() as i64 != requested {
            warn!(requested, clamped = %count, "Node count clamped");
        }
        if count != self.node_count {
            info!(from = %self.node_count, to = %count, "Node count changed");
        }
        self.node_count = count;
        count
    }

    /// Flip between normal and emergency mode.
    pub fn toggle_emergency(&mut self) -> Mode {
        self.mode.toggle()
    }

    pub fn select_model(&mut self, model: ModelId) {
        if model != self.model {
            info!(from = %self.model, to = %model, "Model selected");
        }
        self.model = model;
    }

    /// Period the scheduler should tick this simulation at.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn node_count(&self) -> NodeCount {
        self.node_count
    }

    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn network_status(&self) -> NetworkStatus {
        self.mode.network_status()
    }

    pub fn metrics(&self) -> PerformanceMetrics {
        self.metrics.metrics()
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    /// Number of ticks applied since start.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
