use crate::geometry::Position;

/// Top-left corner of the viewport in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    /// Centres the viewport on `target`, clamped so it never leaves the world.
    /// A world smaller than the viewport pins the camera at the origin.
    pub fn follow(target: &Position, world: (f32, f32), viewport: (f32, f32)) -> Camera {
        Camera {
            x: clamp_axis(target.x, world.0, viewport.0),
            y: clamp_axis(target.y, world.1, viewport.1),
        }
    }

    pub fn to_screen(&self, world_position: &Position) -> Position {
        Position::new(world_position.x - self.x, world_position.y - self.y)
    }
}

fn clamp_axis(target: f32, world_extent: f32, viewport_extent: f32) -> f32 {
    let max = (world_extent - viewport_extent).max(0.0);
    (target - viewport_extent / 2.0).clamp(0.0, max)
}
