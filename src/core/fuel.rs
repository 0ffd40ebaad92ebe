use crate::constants::MAX_FUEL;

/// Fuel tank level, always within `[0, MAX_FUEL]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fuel(f32);

impl Fuel {
    pub fn full() -> Self {
        Fuel(MAX_FUEL)
    }

    pub fn new(level: f32) -> Self {
        Fuel(Self::clamp(level))
    }

    pub fn level(&self) -> f32 {
        self.0
    }

    pub fn fraction(&self) -> f32 {
        self.0 / MAX_FUEL
    }

    pub fn is_empty(&self) -> bool {
        self.0 <= 0.0
    }

    /// Burns up to `amount` and returns what was actually taken from the tank.
    pub fn consume(&mut self, amount: f32) -> f32 {
        let before = self.0;
        self.0 = Self::clamp(self.0 - amount.max(0.0));
        before - self.0
    }

    pub fn refill(&mut self, amount: f32) {
        self.0 = Self::clamp(self.0 + amount.max(0.0));
    }

    fn clamp(level: f32) -> f32 {
        if level.is_nan() {
            return 0.0;
        }
        level.clamp(0.0, MAX_FUEL)
    }
}

impl Default for Fuel {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_floors_at_zero() {
        let mut fuel = Fuel::new(0.5);
        let burned = fuel.consume(1.0);
        assert_eq!(fuel.level(), 0.0);
        assert!((burned - 0.5).abs() < 1e-6);
        assert!(fuel.is_empty());
    }

    #[test]
    fn test_refill_caps_at_max() {
        let mut fuel = Fuel::new(95.0);
        fuel.refill(8.0);
        assert_eq!(fuel.level(), 100.0);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(Fuel::new(-4.0).level(), 0.0);
        assert_eq!(Fuel::new(400.0).level(), 100.0);
        assert_eq!(Fuel::new(f32::NAN).level(), 0.0);
    }
}
