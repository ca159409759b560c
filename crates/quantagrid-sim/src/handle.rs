//! Shared access to a running simulation.
//!
//! A [`SimulationHandle`] wraps the simulation in a tokio `RwLock` and
//! publishes a fresh [`SimulationSnapshot`] through a `watch` channel after
//! every change. Snapshots are published while the write lock is held, so
//! subscribers observe them in the order the changes were applied.

use std::sync::Arc;

use tokio::sync::{watch, RwLock};
use tokio_util::sync::CancellationToken;

use crate::clock::TimeSource;
use crate::models::ModelId;
use crate::mode::Mode;
use crate::simulation::{Simulation, SimulationSnapshot};
use quantagrid_topology::NodeCount;

/// Cloneable handle to a shared simulation.
#[derive(Clone)]
pub struct SimulationHandle {
    sim: Arc<RwLock<Simulation>>,
    time: Arc<dyn TimeSource>,
    snapshots: Arc<watch::Sender<SimulationSnapshot>>,
}

impl SimulationHandle {
    /// Take ownership of `sim`; layouts are computed at `time`'s timestamps.
    pub fn new(sim: Simulation, time: Arc<dyn TimeSource>) -> Self {
        let initial = sim.snapshot(time.now_secs());
        let (tx, _rx) = watch::channel(initial);
        Self {
            sim: Arc::new(RwLock::new(sim)),
            time,
            snapshots: Arc::new(tx),
        }
    }

    /// Receive every published snapshot (latest value semantics).
    pub fn subscribe(&self) -> watch::Receiver<SimulationSnapshot> {
        self.snapshots.subscribe()
    }

    /// The most recently published snapshot.
    pub fn latest(&self) -> SimulationSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Current state with the layout at the present timestamp.
    pub async fn snapshot(&self) -> SimulationSnapshot {
        let sim = self.sim.read().await;
        sim.snapshot(self.time.now_secs())
    }

    /// Apply one tick and publish the result.
    pub async fn tick(&self) -> SimulationSnapshot {
        let mut sim = self.sim.write().await;
        let snapshot = sim.tick(self.time.now_secs());
        self.snapshots.send_replace(snapshot.clone());
        snapshot
    }

    /// Apply one tick unless `cancel` fired before the lock was acquired.
    pub(crate) async fn tick_unless_cancelled(
        &self,
        cancel: &CancellationToken,
    ) -> Option<SimulationSnapshot> {
        let mut sim = self.sim.write().await;
        if cancel.is_cancelled() {
            return None;
        }
        let snapshot = sim.tick(self.time.now_secs());
        self.snapshots.send_replace(snapshot.clone());
        Some(snapshot)
    }

    /// Flip emergency mode and publish the result.
    pub async fn toggle_emergency(&self) -> SimulationSnapshot {
        self.update(|sim| {
            sim.toggle_emergency();
        })
        .await
    }

    /// Set the node count (clamped) and publish the result.
    pub async fn set_node_count(&self, requested: i64) -> SimulationSnapshot {
        self.update(|sim| {
            sim.set_node_count(requested);
        })
        .await
    }

    /// Select a model and publish the result.
    pub async fn select_model(&self, model: ModelId) -> SimulationSnapshot {
        self.update(|sim| sim.select_model(model)).await
    }

    pub async fn mode(&self) -> Mode {
        self.sim.read().await.mode()
    }

    pub async fn node_count(&self) -> NodeCount {
        self.sim.read().await.node_count()
    }

    pub async fn tick_count(&self) -> u64 {
        self.sim.read().await.tick_count()
    }

    async fn update(&self, f: impl FnOnce(&mut Simulation)) -> SimulationSnapshot {
        let mut sim = self.sim.write().await;
        f(&mut sim);
        let snapshot = sim.snapshot(self.time.now_secs());
        self.snapshots.send_replace(snapshot.clone());
        snapshot
    }
}
