//! Mesh layout generation.

use std::f64::consts::TAU;

use crate::{
    complete_edges, NodeCount, Point, Result, AMPLITUDE, BASE_RADIUS, CANVAS_HEIGHT, CANVAS_WIDTH,
    CENTER,
};

/// A positioned node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshNode {
    /// Stable identity within a layout, in `[0, count)`
    pub index: usize,
    /// One-based display label (`N1`, `N2`, ...)
    pub label: String,
    /// Angle around the centre in radians, `2π · index / count`
    pub angle: f64,
    /// Distance from the centre at the layout timestamp
    pub radius: f64,
    /// Canvas position
    pub position: Point,
}

impl MeshNode {
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A connection between two nodes, with `from < to`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshEdge {
    pub from: usize,
    pub to: usize,
    /// Position of `from`
    pub start: Point,
    /// Position of `to`
    pub end: Point,
}

impl MeshEdge {
    /// Drawn length of the edge.
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

/// Node positions and connections for one instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshLayout {
    /// Timestamp (seconds) the layout was computed for
    pub timestamp: f64,
    /// Canvas size as `(width, height)`
    pub canvas: (f64, f64),
    pub nodes: Vec<MeshNode>,
    pub edges: Vec<MeshEdge>,
}

impl MeshLayout {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by index.
    pub fn node(&self, index: usize) -> Option<&MeshNode> {
        self.nodes.get(index)
    }
}

/// Radius of node `index` at time `t` (seconds).
fn radius_at(index: usize, t: f64) -> f64 {
    BASE_RADIUS + AMPLITUDE * (t + index as f64).sin()
}

/// Lay out `count` nodes at `timestamp_secs`.
///
/// Positions depend only on the arguments; no clock is read here.
pub fn generate(count: NodeCount, timestamp_secs: f64) -> MeshLayout {
    let n = count.get();

    let nodes: Vec<MeshNode> = (0..n)
        .map(|index| {
            let angle = TAU * index as f64 / n as f64;
            let radius = radius_at(index, timestamp_secs);
            MeshNode {
                index,
                label: format!("N{}", index + 1),
                angle,
                radius,
                position: Point::from_polar(CENTER, radius, angle),
            }
        })
        .collect();

    let edges = complete_edges(n)
        .map(|(from, to)| MeshEdge {
            from,
            to,
            start: nodes[from].position,
            end: nodes[to].position,
        })
        .collect();

    MeshLayout {
        timestamp: timestamp_secs,
        canvas: (CANVAS_WIDTH, CANVAS_HEIGHT),
        nodes,
        edges,
    }
}

/// Lay out a raw node count, rejecting values outside `[1, 12]`.
pub fn try_generate(count: usize, timestamp_secs: f64) -> Result<MeshLayout> {
    Ok(generate(NodeCount::new(count)?, timestamp_secs))
}
