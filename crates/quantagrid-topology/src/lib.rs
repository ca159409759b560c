//! QuantaGrid Mesh Topology
//!
//! Circular mesh layout with a per-node breathing oscillation and
//! complete-graph connections.
//!
//! # Geometry
//!
//! Node `i` of `n` sits at angle `2π·i/n` around a fixed canvas centre.
//! Its distance from the centre oscillates with wall-clock time:
//!
//! ```text
//! radius_i(t) = BASE_RADIUS + AMPLITUDE · sin(t + i)
//! ```
//!
//! The `+ i` phase shift keeps neighbouring nodes from pulsing in lockstep.
//! Every unordered pair of nodes is connected exactly once, so a layout of
//! `n` nodes always carries `n(n-1)/2` edges.
//!
//! # Determinism
//!
//! [`generate`] is a pure function of `(NodeCount, timestamp)`. Rendering the
//! same timestamp twice reproduces the same layout bit for bit.

mod error;
mod point;
mod count;
mod edges;
mod layout;
mod style;

pub use error::{Error, Result};
pub use point::Point;
pub use count::NodeCount;
pub use edges::{complete_edges, CompleteEdges};
pub use layout::{generate, try_generate, MeshEdge, MeshLayout, MeshNode};
pub use style::Palette;

/// Mean distance of a node from the canvas centre.
pub const BASE_RADIUS: f64 = 80.0;

/// Peak deviation of a node from [`BASE_RADIUS`].
pub const AMPLITUDE: f64 = 20.0;

/// Centre of the drawing canvas.
pub const CENTER: Point = Point::new(200.0, 150.0);

/// Canvas width in user units (SVG `viewBox`).
pub const CANVAS_WIDTH: f64 = 400.0;

/// Canvas height in user units (SVG `viewBox`).
pub const CANVAS_HEIGHT: f64 = 300.0;

// The outermost possible node must stay on the canvas.
const _: () = assert!(BASE_RADIUS + AMPLITUDE <= CANVAS_HEIGHT / 2.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_middle_of_canvas() {
        assert_eq!(CENTER.x, CANVAS_WIDTH / 2.0);
        assert_eq!(CENTER.y, CANVAS_HEIGHT / 2.0);
    }

    #[test]
    fn radius_band_fits_canvas() {
        assert!(BASE_RADIUS - AMPLITUDE > 0.0);
        assert!(CENTER.y - (BASE_RADIUS + AMPLITUDE) >= 0.0);
    }
}
