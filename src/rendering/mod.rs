mod renderer;
mod road_renderer;
mod shapes;
mod stats_display;

pub use renderer::Renderer;
pub use stats_display::status_line;
