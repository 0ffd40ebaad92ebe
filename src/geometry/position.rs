#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_within(&self, other: &Position, radius: f32) -> bool {
        self.distance_to(other) < radius
    }

    /// Moves `distance` units along `angle` (radians, 0 = +x, y grows downward).
    pub fn advance(&self, angle: f32, distance: f32) -> Position {
        Position {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Position {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_is_within_is_strict() {
        let a = Position::new(0.0, 0.0);
        assert!(a.is_within(&Position::new(23.9, 0.0), 24.0));
        assert!(!a.is_within(&Position::new(24.0, 0.0), 24.0));
    }

    #[test]
    fn test_advance_follows_heading() {
        let p = Position::new(10.0, 10.0).advance(std::f32::consts::FRAC_PI_2, 2.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 12.0).abs() < 1e-5);
    }
}
