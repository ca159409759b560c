//! Time sources and the periodic tick scheduler.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::handle::SimulationHandle;
use crate::{Error, Result};

/// Supplies the timestamp (seconds) layouts are computed for.
pub trait TimeSource: Send + Sync + 'static {
    fn now_secs(&self) -> f64;
}

/// Wall-clock seconds since the UNIX epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now_secs(&self) -> f64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTime(pub f64);

impl TimeSource for FixedTime {
    fn now_secs(&self) -> f64 {
        self.0
    }
}

/// Periodic task that ticks a [`SimulationHandle`].
///
/// Ticks run one at a time in period order; a late tick is delayed rather
/// than bursted. No tick begins after [`Ticker::cancel`] returns, and
/// [`Ticker::shutdown`] additionally waits for any tick already running.
/// Dropping the ticker cancels it.
pub struct Ticker {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
    period: Duration,
}

impl Ticker {
    /// Start ticking `handle` every `period`.
    ///
    /// The first tick fires one full period after the call.
    pub fn spawn(handle: SimulationHandle, period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(Error::ZeroTickInterval);
        }

        let cancel = CancellationToken::new();
        let task = tokio::spawn(run(handle, period, cancel.clone()));

        Ok(Self {
            cancel,
            task: Some(task),
            period,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stop scheduling ticks. Safe to call any number of times.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel and wait for the scheduler task to finish.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("Tick scheduler task failed: {}", e);
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run(handle: SimulationHandle, period: Duration, cancel: CancellationToken) {
    let start = tokio::time::Instant::now() + period;
    let mut interval = tokio::time::interval_at(start, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(period_ms = period.as_millis() as u64, "Tick scheduler started");

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                if handle.tick_unless_cancelled(&cancel).await.is_none() {
                    break;
                }
            }
        }
    }

    info!("Tick scheduler stopped");
}
