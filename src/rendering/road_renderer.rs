use anyhow::{Error, Result};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect as ScreenRect};
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::camera::Camera;
use crate::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::geometry::rect_extensions::RectExtensions;
use crate::rendering::shapes::fill_circle;
use crate::world::World;

const GRID_SPACING: i32 = 40;
const DASH: i32 = 12;
const GAP: i32 = 10;

pub struct RoadRenderer;

impl RoadRenderer {
    pub fn render_background(canvas: &mut Canvas<Window>) -> Result<()> {
        canvas.set_draw_color(Color::RGB(15, 23, 42));
        canvas.clear();

        canvas.set_draw_color(Color::RGB(11, 18, 36));
        let (w, h) = (VIEWPORT_WIDTH as i32, VIEWPORT_HEIGHT as i32);
        for x in (0..w).step_by(GRID_SPACING as usize) {
            canvas.fill_rect(ScreenRect::new(x, 0, 1, h as u32)).map_err(Error::msg)?;
        }
        for y in (0..h).step_by(GRID_SPACING as usize) {
            canvas.fill_rect(ScreenRect::new(0, y, w as u32, 1)).map_err(Error::msg)?;
        }
        Ok(())
    }

    pub fn render_roads(canvas: &mut Canvas<Window>, world: &World, camera: &Camera) -> Result<()> {
        let viewport = (VIEWPORT_WIDTH, VIEWPORT_HEIGHT);

        canvas.set_draw_color(Color::RGB(43, 54, 77));
        for road in world.roads.iter().filter(|r| r.is_visible(camera, viewport)) {
            canvas.fill_rect(road.to_screen(camera)).map_err(Error::msg)?;
        }

        // dashed centre line along each road's long axis
        canvas.set_draw_color(Color::RGBA(188, 211, 255, 0x22));
        for road in world.roads.iter().filter(|r| r.is_visible(camera, viewport)) {
            let screen = road.to_screen(camera);
            if screen.width() >= screen.height() {
                let y = screen.y() + screen.height() as i32 / 2;
                let mut x = screen.x();
                while x < screen.right() {
                    let end = (x + DASH).min(screen.right());
                    canvas.draw_line(Point::new(x, y), Point::new(end, y)).map_err(Error::msg)?;
                    x += DASH + GAP;
                }
            } else {
                let x = screen.x() + screen.width() as i32 / 2;
                let mut y = screen.y();
                while y < screen.bottom() {
                    let end = (y + DASH).min(screen.bottom());
                    canvas.draw_line(Point::new(x, y), Point::new(x, end)).map_err(Error::msg)?;
                    y += DASH + GAP;
                }
            }
        }
        Ok(())
    }

    pub fn render_obstacles(canvas: &mut Canvas<Window>, world: &World, camera: &Camera) -> Result<()> {
        canvas.set_draw_color(Color::RGB(124, 58, 237));
        for obstacle in &world.obstacles {
            canvas.fill_rect(obstacle.to_screen(camera)).map_err(Error::msg)?;
        }
        Ok(())
    }

    pub fn render_stops(canvas: &mut Canvas<Window>, world: &World, camera: &Camera) -> Result<()> {
        canvas.set_draw_color(Color::RGB(22, 163, 74));
        for stop in &world.stops {
            fill_circle(canvas, camera.to_screen(&stop.position), stop.radius)?;
        }
        Ok(())
    }
}
