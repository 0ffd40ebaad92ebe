use anyhow::{Error, Result};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::{DELIVERY_SCORE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::session::Snapshot;

const BAR_WIDTH: u32 = 200;
const MAX_PIPS: u32 = 24;

pub fn render_hud(canvas: &mut Canvas<Window>, snapshot: &Snapshot, time_limit: u32) -> Result<()> {
    let panel = Rect::new(10, 10, 220, 74);
    canvas.set_draw_color(Color::RGBA(2, 6, 23, 170));
    canvas.fill_rect(panel).map_err(Error::msg)?;
    canvas.set_draw_color(Color::RGB(226, 232, 240));
    canvas.draw_rect(panel).map_err(Error::msg)?;

    let fuel_fraction = snapshot.fuel / 100.0;
    let fuel_color = if fuel_fraction < 0.2 {
        Color::RGB(239, 68, 68)
    } else {
        Color::RGB(34, 197, 94)
    };
    render_bar(canvas, 20, fuel_fraction, fuel_color)?;

    let time_fraction = snapshot.time_left as f32 / time_limit.max(1) as f32;
    render_bar(canvas, 38, time_fraction, Color::RGB(56, 189, 248))?;

    // one pip per delivery
    canvas.set_draw_color(Color::RGB(250, 204, 21));
    let pips = (snapshot.score / DELIVERY_SCORE).min(MAX_PIPS);
    for i in 0..pips {
        canvas
            .fill_rect(Rect::new(20 + i as i32 * 8, 56, 6, 10))
            .map_err(Error::msg)?;
    }

    if snapshot.picked {
        canvas.set_draw_color(Color::RGB(245, 158, 11));
        canvas.fill_rect(Rect::new(20, 70, BAR_WIDTH, 4)).map_err(Error::msg)?;
    }
    Ok(())
}

fn render_bar(canvas: &mut Canvas<Window>, y: i32, fraction: f32, color: Color) -> Result<()> {
    canvas.set_draw_color(Color::RGB(51, 65, 85));
    canvas.fill_rect(Rect::new(20, y, BAR_WIDTH, 12)).map_err(Error::msg)?;

    let filled = (BAR_WIDTH as f32 * fraction.clamp(0.0, 1.0)).round() as u32;
    if filled > 0 {
        canvas.set_draw_color(color);
        canvas.fill_rect(Rect::new(20, y, filled, 12)).map_err(Error::msg)?;
    }
    Ok(())
}

pub fn render_game_over(canvas: &mut Canvas<Window>, snapshot: &Snapshot) -> Result<()> {
    let (w, h) = (VIEWPORT_WIDTH as u32, VIEWPORT_HEIGHT as u32);
    canvas.set_draw_color(Color::RGBA(2, 6, 23, 178));
    canvas.fill_rect(Rect::new(0, 0, w, h)).map_err(Error::msg)?;

    let modal = Rect::new(w as i32 / 2 - 150, h as i32 / 2 - 50, 300, 100);
    canvas.set_draw_color(Color::RGB(30, 41, 59));
    canvas.fill_rect(modal).map_err(Error::msg)?;
    canvas.set_draw_color(Color::RGB(255, 255, 255));
    canvas.draw_rect(modal).map_err(Error::msg)?;

    canvas.set_draw_color(Color::RGB(250, 204, 21));
    let pips = (snapshot.score / DELIVERY_SCORE).min(MAX_PIPS);
    for i in 0..pips {
        canvas
            .fill_rect(Rect::new(modal.x() + 54 + i as i32 * 8, modal.y() + 44, 6, 12))
            .map_err(Error::msg)?;
    }
    Ok(())
}

/// Text HUD, shown in the window title.
pub fn status_line(snapshot: &Snapshot) -> String {
    let hint = if snapshot.game_over {
        "Game Over - press R to restart"
    } else if snapshot.picked {
        "Passenger on board - drop at glowing stop (Space)"
    } else {
        "Find a passenger and press Space to pick up"
    };

    format!(
        "Pragia Taxi | Score: {} | Fuel: {:.0}% | Time: {}s | Level {} | {}",
        snapshot.score, snapshot.fuel, snapshot.time_left, snapshot.level, hint
    )
}
