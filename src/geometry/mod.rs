pub mod position;
pub mod rect;
#[cfg(feature = "frontend")]
pub mod rect_extensions;
pub mod spawn;

pub use position::Position;
pub use rect::Rect;
