//! Planar canvas coordinates.
//!
//! The canvas uses SVG conventions: `x` grows to the right and `y` grows
//! downward, so positive angles sweep clockwise on screen.

use std::ops::{Add, Sub};

/// A position on the drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Canvas origin (top-left corner).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from `center` in direction `angle` (radians).
    pub fn from_polar(center: Self, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn from_polar_cardinal_directions() {
        let c = Point::new(200.0, 150.0);

        let east = Point::from_polar(c, 80.0, 0.0);
        assert!((east.x - 280.0).abs() < EPS);
        assert!((east.y - 150.0).abs() < EPS);

        // +y is down on the canvas
        let south = Point::from_polar(c, 80.0, FRAC_PI_2);
        assert!((south.x - 200.0).abs() < EPS);
        assert!((south.y - 230.0).abs() < EPS);

        let west = Point::from_polar(c, 80.0, PI);
        assert!((west.x - 120.0).abs() < EPS);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn addition_subtraction() {
        let a = Point::new(1.5, 2.0);
        let b = Point::new(-0.5, 4.0);

        assert_eq!(a + b, Point::new(1.0, 6.0));
        assert_eq!(a - b, Point::new(2.0, -2.0));
        assert_eq!((a - b) + b, a);
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Point::new(1.0, 2.5).to_string(), "(1.00, 2.50)");
    }
}
