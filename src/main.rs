use std::time::{Duration, Instant};

use anyhow::{Context, Error, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use pragia_taxi::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use pragia_taxi::input::{print_controls, InputState};
use pragia_taxi::rendering::Renderer;
use pragia_taxi::{GameConfig, GameLoop};

/// Pragia Taxi: pick passengers up, drop them at their stops, mind the fuel.
#[derive(Parser, Debug)]
#[command(name = "pragia_taxi", version, about, long_about = None)]
struct Cli {
    /// Logging verbosity: trace, debug, info, warn or error
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Seed for passenger placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Round length in seconds
    #[arg(long, default_value_t = 120)]
    time_limit: u32,

    /// Window scale factor
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

impl Cli {
    fn level_filter(&self) -> LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        }
    }

    fn game_config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            frames_per_second: self.fps,
            time_limit_secs: self.time_limit,
            ..GameConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_logger::SimpleLogger::new()
        .with_level(cli.level_filter())
        .init()
        .context("logger initialization failed")?;

    info!("Pragia Taxi v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.game_config();
    config.validate()?;
    let scale = cli.scale.clamp(0.5, 4.0);
    let frame_budget = Duration::from_secs(1) / config.frames_per_second;

    let sdl_context = sdl2::init().map_err(Error::msg)?;
    let video_subsystem = sdl_context.video().map_err(Error::msg)?;

    let window = video_subsystem
        .window(
            "Pragia Taxi",
            (VIEWPORT_WIDTH * scale) as u32,
            (VIEWPORT_HEIGHT * scale) as u32,
        )
        .position_centered()
        .build()
        .context("failed to create window")?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .context("failed to create canvas")?;

    let mut renderer = Renderer::new(&mut canvas, scale, config.time_limit_secs)?;
    let mut game = GameLoop::new(config)?;
    let mut input = InputState::new();
    let mut event_pump = sdl_context.event_pump().map_err(Error::msg)?;

    print_controls();

    let mut last_frame = Instant::now();
    while game.is_running() {
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        last_frame = now;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => game.teardown(),
                Event::KeyDown {
                    keycode: Some(keycode), ..
                } => {
                    input.press(&keycode.name());
                }
                Event::KeyUp {
                    keycode: Some(keycode), ..
                } => {
                    input.release(&keycode.name());
                }
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => input.clear(),
                _ => {}
            }
        }

        if game.frame(&input, elapsed).is_none() {
            break;
        }
        if let Err(e) = renderer.render(&mut canvas, &game.session().snapshot()) {
            warn!("Frame render failed: {:#}", e);
        }

        let frame_time = now.elapsed();
        if frame_time < frame_budget {
            std::thread::sleep(frame_budget - frame_time);
        }
    }

    if !game.session().is_game_over() {
        game.session().stats().display(game.session().score());
    }
    Ok(())
}
