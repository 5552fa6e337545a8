//! 2D vector type for positions and offsets

use serde::{Deserialize, Serialize};

/// 2D vector for pixel positions and pointer offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp each component into `[min, max]`
    ///
    /// A `max` smaller than `min` collapses to `min` instead of panicking.
    #[inline]
    pub fn clamp(self, min: Vec2, max: Vec2) -> Self {
        Self::new(
            self.x.max(min.x).min(max.x.max(min.x)),
            self.y.max(min.y).min(max.y.max(min.y)),
        )
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        let sum = a + b;
        assert!((sum.x - 4.0).abs() < 0.001);
        assert!((sum.y - 6.0).abs() < 0.001);

        let diff = b - a;
        assert!((diff.x - 2.0).abs() < 0.001);
        assert!((diff.y - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_clamp() {
        let v = Vec2::new(-10.0, 500.0).clamp(Vec2::ZERO, Vec2::new(100.0, 200.0));
        assert!((v.x - 0.0).abs() < 0.001);
        assert!((v.y - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_clamp_inverted_range_collapses_to_min() {
        let v = Vec2::new(40.0, 40.0).clamp(Vec2::ZERO, Vec2::new(-5.0, -5.0));
        assert_eq!(v, Vec2::ZERO);
    }
}
