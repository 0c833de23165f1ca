/// CPU bitmap surface for headless rendering and tests.
pub mod bitmap;
/// The drawing-surface contract consumed by the painter.
pub mod surface;

pub use bitmap::{Bitmap, BitmapSurface};
pub use surface::{DrawSurface, RecordingSurface, TextStyle};
