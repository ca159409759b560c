//! Performance metrics easing.
//!
//! While the mesh is in emergency mode every tick moves each metric one
//! fixed step toward its bound:
//!
//! | metric       | direction | step | bound |
//! |--------------|-----------|------|-------|
//! | latency      | down      | 2    | 15    |
//! | accuracy     | up        | 0.1  | 99.9  |
//! | uptime       | up        | 0.01 | 100   |
//! | adaptability | up        | 0.2  | 99.9  |
//!
//! A metric that reaches its bound holds there. In normal mode the metrics
//! are frozen at whatever value they last reached; nothing decays back
//! toward the baseline.

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Floors, ceilings and per-tick steps for the metrics.
pub struct MetricBounds;

impl MetricBounds {
    pub const LATENCY_FLOOR: f64 = 15.0;
    pub const LATENCY_STEP: f64 = 2.0;
    pub const ACCURACY_CEILING: f64 = 99.9;
    pub const ACCURACY_STEP: f64 = 0.1;
    pub const UPTIME_CEILING: f64 = 100.0;
    pub const UPTIME_STEP: f64 = 0.01;
    pub const ADAPTABILITY_CEILING: f64 = 99.9;
    pub const ADAPTABILITY_STEP: f64 = 0.2;
}

/// Snapshot of the simulated performance figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Average latency in milliseconds, never below the floor
    pub latency: f64,
    /// Accuracy rate in percent
    pub accuracy: f64,
    /// System uptime in percent
    pub uptime: f64,
    /// Adaptability index in percent
    pub adaptability: f64,
}

impl PerformanceMetrics {
    /// Values at process start.
    pub const BASELINE: Self = Self {
        latency: 45.0,
        accuracy: 96.8,
        uptime: 99.9,
        adaptability: 94.2,
    };

    /// Values every metric converges to under emergency mode.
    pub const CONVERGED: Self = Self {
        latency: MetricBounds::LATENCY_FLOOR,
        accuracy: MetricBounds::ACCURACY_CEILING,
        uptime: MetricBounds::UPTIME_CEILING,
        adaptability: MetricBounds::ADAPTABILITY_CEILING,
    };

    /// Pull every field inside its bound.
    pub fn clamped(self) -> Self {
        Self {
            latency: self.latency.max(MetricBounds::LATENCY_FLOOR),
            accuracy: self.accuracy.min(MetricBounds::ACCURACY_CEILING),
            uptime: self.uptime.min(MetricBounds::UPTIME_CEILING),
            adaptability: self.adaptability.min(MetricBounds::ADAPTABILITY_CEILING),
        }
    }

    /// Whether every field has reached its bound.
    pub fn is_converged(&self) -> bool {
        *self == Self::CONVERGED
    }

    /// One emergency step. Each result is clamped before it is stored.
    fn stepped(&self) -> Self {
        let latency =
            (self.latency - MetricBounds::LATENCY_STEP).max(MetricBounds::LATENCY_FLOOR);
        let accuracy =
            (self.accuracy + MetricBounds::ACCURACY_STEP).min(MetricBounds::ACCURACY_CEILING);
        let uptime = (self.uptime + MetricBounds::UPTIME_STEP).min(MetricBounds::UPTIME_CEILING);
        let adaptability = (self.adaptability + MetricBounds::ADAPTABILITY_STEP)
            .min(MetricBounds::ADAPTABILITY_CEILING);

        Self {
            latency,
            accuracy,
            uptime,
            adaptability,
        }
    }
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Bar widths (percent of full width) for the metric displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricBars {
    pub latency: f64,
    pub accuracy: f64,
    pub uptime: f64,
    pub adaptability: f64,
}

impl From<&PerformanceMetrics> for MetricBars {
    fn from(m: &PerformanceMetrics) -> Self {
        let pct = |v: f64| v.clamp(0.0, 100.0);
        Self {
            // Lower latency fills more of the bar
            latency: pct(100.0 - m.latency),
            accuracy: pct(m.accuracy),
            uptime: pct(m.uptime),
            adaptability: pct(m.adaptability),
        }
    }
}

/// Owns the metrics state and advances it once per tick.
#[derive(Debug, Clone, Default)]
pub struct MetricsSimulator {
    metrics: PerformanceMetrics,
}

impl MetricsSimulator {
    /// Start from [`PerformanceMetrics::BASELINE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the given values, pulled inside their bounds.
    pub fn with_metrics(metrics: PerformanceMetrics) -> Self {
        Self {
            metrics: metrics.clamped(),
        }
    }

    /// Current metrics.
    pub fn metrics(&self) -> PerformanceMetrics {
        self.metrics
    }

    /// Advance one tick under `mode` and return the new state.
    ///
    /// Normal mode leaves the state untouched.
    pub fn tick(&mut self, mode: Mode) -> PerformanceMetrics {
        if mode.is_emergency() {
            self.metrics = self.metrics.stepped();
        }
        self.metrics
    }

    pub fn is_converged(&self) -> bool {
        self.metrics.is_converged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn starts_at_baseline() {
        let sim = MetricsSimulator::new();
        assert_eq!(sim.metrics(), PerformanceMetrics::BASELINE);
        assert!(!sim.is_converged());
    }

    #[test]
    fn normal_mode_freezes_metrics() {
        let mut sim = MetricsSimulator::new();
        for _ in 0..1000 {
            sim.tick(Mode::Normal);
        }
        assert_eq!(sim.metrics(), PerformanceMetrics::BASELINE);
    }

    #[test]
    fn one_emergency_tick() {
        let mut sim = MetricsSimulator::new();
        let m = sim.tick(Mode::Emergency);

        assert!(close(m.latency, 43.0));
        assert!(close(m.accuracy, 96.9));
        assert!(close(m.uptime, 99.91));
        assert!(close(m.adaptability, 94.4));
        assert_eq!(m, sim.metrics());
    }

    #[test]
    fn emergency_converges_and_holds() {
        let mut sim = MetricsSimulator::new();
        for _ in 0..100 {
            sim.tick(Mode::Emergency);
        }
        assert!(sim.is_converged());
        assert_eq!(sim.metrics(), PerformanceMetrics::CONVERGED);

        let before = sim.metrics();
        for _ in 0..50 {
            sim.tick(Mode::Emergency);
        }
        assert_eq!(sim.metrics(), before);
    }

    #[test]
    fn latency_reaches_floor_after_fifteen_ticks() {
        let mut sim = MetricsSimulator::new();
        for _ in 0..14 {
            sim.tick(Mode::Emergency);
        }
        assert_eq!(sim.metrics().latency, 17.0);
        sim.tick(Mode::Emergency);
        assert_eq!(sim.metrics().latency, 15.0);
        sim.tick(Mode::Emergency);
        assert_eq!(sim.metrics().latency, 15.0);
    }

    #[test]
    fn returning_to_normal_keeps_progress() {
        let mut sim = MetricsSimulator::new();
        for _ in 0..5 {
            sim.tick(Mode::Emergency);
        }
        let reached = sim.metrics();
        for _ in 0..20 {
            sim.tick(Mode::Normal);
        }
        assert_eq!(sim.metrics(), reached);
        assert_eq!(reached.latency, 35.0);
    }

    #[test]
    fn with_metrics_clamps_out_of_bound_start() {
        let sim = MetricsSimulator::with_metrics(PerformanceMetrics {
            latency: 3.0,
            accuracy: 120.0,
            uptime: 100.5,
            adaptability: 50.0,
        });
        let m = sim.metrics();
        assert_eq!(m.latency, 15.0);
        assert_eq!(m.accuracy, 99.9);
        assert_eq!(m.uptime, 100.0);
        assert_eq!(m.adaptability, 50.0);
    }

    #[test]
    fn bars_follow_metrics() {
        let bars = MetricBars::from(&PerformanceMetrics::BASELINE);
        assert!(close(bars.latency, 55.0));
        assert!(close(bars.accuracy, 96.8));
        assert!(close(bars.uptime, 99.9));
        assert!(close(bars.adaptability, 94.2));

        let slow = PerformanceMetrics {
            latency: 140.0,
            ..PerformanceMetrics::BASELINE
        };
        assert_eq!(MetricBars::from(&slow).latency, 0.0);
    }

    #[test]
    fn metrics_serialize_by_field_name() {
        let json = serde_json::to_value(PerformanceMetrics::BASELINE).unwrap();
        assert_eq!(json["latency"], 45.0);
        assert_eq!(json["adaptability"], 94.2);
    }

    proptest! {
        #[test]
        fn emergency_ticks_are_monotonic_and_bounded(ticks in 1usize..200) {
            let mut sim = MetricsSimulator::new();
            let mut prev = sim.metrics();
            for _ in 0..ticks {
                let next = sim.tick(Mode::Emergency);

                prop_assert!(next.latency <= prev.latency);
                prop_assert!(next.accuracy >= prev.accuracy);
                prop_assert!(next.uptime >= prev.uptime);
                prop_assert!(next.adaptability >= prev.adaptability);

                prop_assert!(next.latency >= MetricBounds::LATENCY_FLOOR);
                prop_assert!(next.accuracy <= MetricBounds::ACCURACY_CEILING);
                prop_assert!(next.uptime <= MetricBounds::UPTIME_CEILING);
                prop_assert!(next.adaptability <= MetricBounds::ADAPTABILITY_CEILING);

                // Strict progress until the bound is reached
                if prev.latency > MetricBounds::LATENCY_FLOOR {
                    prop_assert!(next.latency < prev.latency);
                }
                if prev.accuracy < MetricBounds::ACCURACY_CEILING {
                    prop_assert!(next.accuracy > prev.accuracy);
                }
                prev = next;
            }
        }

        #[test]
        fn mixed_modes_never_leave_bounds(
            modes in proptest::collection::vec(any::<bool>(), 0..300)
        ) {
            let mut sim = MetricsSimulator::new();
            for emergency in modes {
                let mode = if emergency { Mode::Emergency } else { Mode::Normal };
                let m = sim.tick(mode);
                prop_assert_eq!(m.clamped(), m);
            }
        }
    }
}
