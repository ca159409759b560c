//! Styling hints for renderers.
//!
//! A palette is advisory: it never changes node positions or edge count.

/// Colours and stroke parameters for drawing a mesh layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    /// Fill colour of node circles and stroke colour of edges
    pub color: &'static str,
    /// Radius of a node circle
    pub node_radius: f64,
    /// Edge stroke width
    pub edge_width: f64,
    /// Edge opacity in `[0, 1]`
    pub edge_opacity: f64,
    /// Distance of the node label above the node centre
    pub label_offset: f64,
    /// Label text colour
    pub label_color: &'static str,
    /// Label font size
    pub label_size: f64,
}

impl Palette {
    /// Regular operation.
    pub const NORMAL: Self = Self::with_color("#45b7d1");

    /// Emergency response; the mesh is running peer-to-peer.
    pub const EMERGENCY: Self = Self::with_color("#4ecdc4");

    const fn with_color(color: &'static str) -> Self {
        Self {
            color,
            node_radius: 8.0,
            edge_width: 1.0,
            edge_opacity: 0.3,
            label_offset: 15.0,
            label_color: "#333",
            label_size: 10.0,
        }
    }

    /// Pick the palette for the given emergency state.
    pub const fn for_emergency(active: bool) -> Self {
        if active {
            Self::EMERGENCY
        } else {
            Self::NORMAL
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_only_in_color() {
        let n = Palette::NORMAL;
        let e = Palette::EMERGENCY;
        assert_ne!(n.color, e.color);
        assert_eq!(n.node_radius, e.node_radius);
        assert_eq!(n.edge_width, e.edge_width);
        assert_eq!(n.edge_opacity, e.edge_opacity);
        assert_eq!(n.label_offset, e.label_offset);
    }

    #[test]
    fn selection() {
        assert_eq!(Palette::for_emergency(false), Palette::NORMAL);
        assert_eq!(Palette::for_emergency(true), Palette::EMERGENCY);
        assert_eq!(Palette::default().color, "#45b7d1");
    }
}
