use anyhow::{Error, Result};
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use crate::camera::Camera;
use crate::rendering::road_renderer::RoadRenderer;
use crate::rendering::shapes::{draw_circle, fill_circle, fill_rotated_rect};
use crate::rendering::stats_display::{render_game_over, render_hud, status_line};
use crate::session::Snapshot;
use crate::vehicle::Vehicle;
use crate::world::World;

const DESTINATION_RING: f32 = 22.0;
const HEADLIGHT_MIN_SPEED: f32 = 0.2;

pub struct Renderer {
    time_limit: u32,
    title: String,
}

impl Renderer {
    pub fn new(canvas: &mut Canvas<Window>, scale: f32, time_limit: u32) -> Result<Self> {
        canvas.set_scale(scale, scale).map_err(Error::msg)?;
        canvas.set_blend_mode(BlendMode::Blend);
        Ok(Renderer {
            time_limit,
            title: String::new(),
        })
    }

    pub fn render(&mut self, canvas: &mut Canvas<Window>, snapshot: &Snapshot) -> Result<()> {
        let camera = snapshot.camera;

        RoadRenderer::render_background(canvas)?;
        RoadRenderer::render_roads(canvas, snapshot.world, &camera)?;
        RoadRenderer::render_obstacles(canvas, snapshot.world, &camera)?;
        RoadRenderer::render_stops(canvas, snapshot.world, &camera)?;

        self.render_passengers(canvas, snapshot.world, &camera)?;
        if let Some(destination) = snapshot.carried_destination() {
            canvas.set_draw_color(Color::RGB(245, 158, 11));
            draw_circle(canvas, camera.to_screen(&destination), DESTINATION_RING)?;
        }
        self.render_taxi(canvas, snapshot.vehicle, &camera)?;

        render_hud(canvas, snapshot, self.time_limit)?;
        if snapshot.game_over {
            render_game_over(canvas, snapshot)?;
        }

        let title = status_line(snapshot);
        if title != self.title {
            canvas.window_mut().set_title(&title)?;
            self.title = title;
        }

        canvas.present();
        Ok(())
    }

    fn render_passengers(&self, canvas: &mut Canvas<Window>, world: &World, camera: &Camera) -> Result<()> {
        for passenger in world.passengers.iter().filter(|p| !p.done) {
            let color = if passenger.picked {
                Color::RGB(245, 158, 11)
            } else {
                Color::RGB(225, 29, 72)
            };
            canvas.set_draw_color(color);
            fill_circle(canvas, camera.to_screen(&passenger.position), passenger.radius)?;
        }
        Ok(())
    }

    fn render_taxi(&self, canvas: &mut Canvas<Window>, vehicle: &Vehicle, camera: &Camera) -> Result<()> {
        let center = camera.to_screen(&vehicle.position);
        let (w, h) = (vehicle.tuning.width, vehicle.tuning.height);
        let angle = vehicle.angle;

        if vehicle.speed.abs() > HEADLIGHT_MIN_SPEED {
            canvas.set_draw_color(Color::RGBA(250, 250, 210, 60));
            fill_circle(canvas, center.advance(angle, 18.0), 24.0)?;
        }

        // body, then cabin cover over the front half
        canvas.set_draw_color(Color::RGB(34, 211, 238));
        fill_rotated_rect(canvas, center, angle, (0.0, 0.0), (w, h))?;
        canvas.set_draw_color(Color::RGB(14, 165, 233));
        fill_rotated_rect(canvas, center, angle, (0.0, -h / 4.0), (w - 4.0, h / 2.0))?;

        canvas.set_draw_color(Color::RGB(15, 23, 42));
        fill_rotated_rect(canvas, center, angle, (-w / 2.0 - 4.0, -h / 2.0 + 5.0), (4.0, 6.0))?;
        fill_rotated_rect(canvas, center, angle, (w / 2.0 + 4.0, -h / 2.0 + 5.0), (4.0, 6.0))?;
        fill_rotated_rect(canvas, center, angle, (0.0, h / 2.0), (4.0, 6.0))?;
        Ok(())
    }
}
