use std::time::{Duration, Instant};

use log::info;

use crate::core::MotionReport;

pub struct SessionStats {
    pub ticks: u64,
    pub pickups: u32,
    pub deliveries: u32,
    pub passengers_spawned: u32,
    pub off_road_bounces: u32,
    pub obstacle_hits: u32,
    pub distance_driven: f32,
    pub fuel_burned: f32,
    pub top_speed: f32,

    session_start: Instant,
}

impl SessionStats {
    pub fn new() -> Self {
        SessionStats {
            ticks: 0,
            pickups: 0,
            deliveries: 0,
            passengers_spawned: 0,
            off_road_bounces: 0,
            obstacle_hits: 0,
            distance_driven: 0.0,
            fuel_burned: 0.0,
            top_speed: 0.0,
            session_start: Instant::now(),
        }
    }

    pub fn record_motion(&mut self, report: &MotionReport, speed: f32) {
        self.ticks += 1;
        self.distance_driven += report.distance;
        self.fuel_burned += report.fuel_burned;
        self.top_speed = self.top_speed.max(speed.abs());
        if report.off_road {
            self.off_road_bounces += 1;
        }
        if report.hit_obstacle {
            self.obstacle_hits += 1;
        }
    }

    pub fn record_pickup(&mut self) {
        self.pickups += 1;
    }

    pub fn record_delivery(&mut self) {
        self.deliveries += 1;
    }

    pub fn record_spawned(&mut self, count: usize) {
        self.passengers_spawned += count as u32;
    }

    pub fn elapsed(&self) -> Duration {
        self.session_start.elapsed()
    }

    pub fn delivery_rate(&self) -> f32 {
        if self.pickups == 0 {
            return 0.0;
        }
        self.deliveries as f32 / self.pickups as f32 * 100.0
    }

    pub fn display(&self, score: u32) {
        info!("=== SESSION SUMMARY ===");
        info!("Duration:          {:.1}s ({} ticks)", self.elapsed().as_secs_f32(), self.ticks);
        info!("Final score:       {}", score);
        info!("Passengers spawned {}", self.passengers_spawned);
        info!("Pickups:           {}", self.pickups);
        info!("Deliveries:        {} ({:.0}% of pickups)", self.deliveries, self.delivery_rate());
        info!("Distance driven:   {:.0}px", self.distance_driven);
        info!("Top speed:         {:.2}px/tick", self.top_speed);
        info!("Fuel burned:       {:.1}", self.fuel_burned);
        info!("Off-road bounces:  {}", self.off_road_bounces);
        info!("Obstacle hits:     {}", self.obstacle_hits);
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_accumulates() {
        let mut stats = SessionStats::new();
        let report = MotionReport {
            off_road: true,
            hit_obstacle: false,
            distance: 2.5,
            fuel_burned: 1.2,
        };
        stats.record_motion(&report, -1.5);
        stats.record_motion(&MotionReport::default(), 0.5);
        assert_eq!(stats.ticks, 2);
        assert_eq!(stats.off_road_bounces, 1);
        assert_eq!(stats.obstacle_hits, 0);
        assert!((stats.distance_driven - 2.5).abs() < 1e-6);
        assert!((stats.top_speed - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_delivery_rate() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.delivery_rate(), 0.0);
        stats.record_pickup();
        stats.record_pickup();
        stats.record_delivery();
        assert!((stats.delivery_rate() - 50.0).abs() < 1e-4);
    }
}
