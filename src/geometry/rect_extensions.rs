use sdl2::rect::Rect as ScreenRect;

use crate::camera::Camera;
use crate::geometry::{Position, Rect};

pub trait RectExtensions {
    fn to_screen(&self, camera: &Camera) -> ScreenRect;
    fn is_visible(&self, camera: &Camera, viewport: (f32, f32)) -> bool;
}

impl RectExtensions for Rect {
    fn to_screen(&self, camera: &Camera) -> ScreenRect {
        let origin = camera.to_screen(&Position::new(self.x, self.y));
        ScreenRect::new(
            origin.x.round() as i32,
            origin.y.round() as i32,
            self.w.round().max(1.0) as u32,
            self.h.round().max(1.0) as u32,
        )
    }

    fn is_visible(&self, camera: &Camera, viewport: (f32, f32)) -> bool {
        let view = Rect::new(camera.x, camera.y, viewport.0, viewport.1);
        self.intersects(&view)
    }
}
