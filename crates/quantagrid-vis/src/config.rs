//! Server configuration from the environment and command line.

use std::net::SocketAddr;
use std::time::Duration;

use quantagrid_sim::{ModelId, NodeCount, SimulationConfig};

use crate::{Error, Result};

pub const ENV_ADDR: &str = "QUANTAGRID_ADDR";
pub const ENV_TICK_MS: &str = "QUANTAGRID_TICK_MS";
pub const ENV_NODES: &str = "QUANTAGRID_NODES";
pub const ENV_MODEL: &str = "QUANTAGRID_MODEL";

/// Configuration for the visualisation server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// HTTP listen address
    pub addr: SocketAddr,
    /// Initial simulation settings
    pub simulation: SimulationConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            simulation: SimulationConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read `QUANTAGRID_*` variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ADDR) {
            config.addr = value
                .parse()
                .map_err(|e| Error::config(ENV_ADDR, &value, e))?;
        }

        if let Some(value) = lookup(ENV_TICK_MS) {
            let ms: u64 = value
                .parse()
                .map_err(|e| Error::config(ENV_TICK_MS, &value, e))?;
            config.simulation.tick_interval = Duration::from_millis(ms);
        }

        if let Some(value) = lookup(ENV_NODES) {
            config.simulation.node_count = parse_nodes(ENV_NODES, &value)?;
        }

        if let Some(value) = lookup(ENV_MODEL) {
            config.simulation.model = value.parse::<ModelId>()?;
        }

        config.simulation.validate()?;
        Ok(config)
    }

    /// Apply positional overrides: `[nodes] [port]`.
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        if let Some(nodes) = args.first() {
            self.simulation.node_count = parse_nodes("nodes", nodes)?;
        }
        if let Some(port) = args.get(1) {
            let port: u16 = port.parse().map_err(|e| Error::config("port", port, e))?;
            self.addr.set_port(port);
        }
        Ok(self)
    }
}

fn parse_nodes(key: &str, value: &str) -> Result<NodeCount> {
    let n: usize = value.parse().map_err(|e| Error::config(key, value, e))?;
    NodeCount::new(n).map_err(|e| Error::config(key, value, e))
}
