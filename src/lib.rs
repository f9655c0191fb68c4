mod controllers;
mod core;
mod engine;
mod storage;

pub use crate::controllers::headless::{render_to_ppm, render_with};
pub use crate::core::data::colour::{BLACK, Colour};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::render_config::{
    DEFAULT_ITERATION_CAP, RenderConfig, RenderConfigError,
};
pub use crate::core::data::view_snapshot::{ParseViewSnapshotError, ViewSnapshot};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::escape_time::{EscapeResult, escape_time};
pub use crate::core::palette::{PROCEDURAL_PALETTE_LEN, Palette};
pub use crate::core::schedule::row_order::RowOrder;
pub use crate::core::util::map_range::map_range;
pub use crate::engine::frame_buffer::SharedFrameBuffer;
pub use crate::engine::pool::{PoolStartError, RenderPool};
pub use crate::engine::ports::frame_sink::FrameSink;
pub use crate::storage::write_ppm::write_ppm;
