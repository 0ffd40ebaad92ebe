use anyhow::{Error, Result};
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::geometry::Position;

pub fn fill_circle(canvas: &mut Canvas<Window>, center: Position, radius: f32) -> Result<()> {
    let r = radius.round() as i32;
    let (cx, cy) = (center.x.round() as i32, center.y.round() as i32);
    for dy in -r..=r {
        let half = ((r * r - dy * dy) as f32).sqrt().round() as i32;
        canvas
            .draw_line(Point::new(cx - half, cy + dy), Point::new(cx + half, cy + dy))
            .map_err(Error::msg)?;
    }
    Ok(())
}

pub fn draw_circle(canvas: &mut Canvas<Window>, center: Position, radius: f32) -> Result<()> {
    const SEGMENTS: usize = 48;
    let points: Vec<Point> = (0..=SEGMENTS)
        .map(|i| {
            let a = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
            let p = center.advance(a, radius);
            Point::new(p.x.round() as i32, p.y.round() as i32)
        })
        .collect();
    canvas.draw_lines(points.as_slice()).map_err(Error::msg)
}

/// Fills a `w` x `h` box centred on `center` and rotated by `angle`,
/// with `offset` shifting the box along its own axes first.
pub fn fill_rotated_rect(
    canvas: &mut Canvas<Window>,
    center: Position,
    angle: f32,
    offset: (f32, f32),
    size: (f32, f32),
) -> Result<()> {
    let (sin, cos) = angle.sin_cos();
    let local = |lx: f32, ly: f32| {
        let x = lx + offset.0;
        let y = ly + offset.1;
        Point::new(
            (center.x + x * cos - y * sin).round() as i32,
            (center.y + x * sin + y * cos).round() as i32,
        )
    };

    let (w, h) = size;
    let steps = (h.ceil() as i32).max(1) * 2;
    for i in 0..=steps {
        let ly = -h / 2.0 + h * i as f32 / steps as f32;
        canvas
            .draw_line(local(-w / 2.0, ly), local(w / 2.0, ly))
            .map_err(Error::msg)?;
    }
    Ok(())
}
