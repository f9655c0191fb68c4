use crate::core::data::render_config::{DEFAULT_ITERATION_CAP, RenderConfig};
use crate::core::data::viewport::Viewport;
use crate::core::palette::Palette;
use crate::engine::frame_buffer::SharedFrameBuffer;
use crate::engine::pool::RenderPool;
use crate::engine::ports::frame_sink::FrameSink;
use crate::storage::write_ppm::write_ppm;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

const DEFAULT_WIDTH: u32 = 1200;
const DEFAULT_HEIGHT: u32 = 800;
const RENDER_TIMEOUT: Duration = Duration::from_secs(120);

/// Renders the whole-set view at the default size through the real worker
/// pool and saves it as a PPM. The demo entry point the binary calls.
pub fn render_to_ppm(filepath: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .min(DEFAULT_HEIGHT as usize);
    let config = RenderConfig::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_ITERATION_CAP, workers)?;

    render_with(config, Viewport::default(), filepath)
}

/// Renders one frame of `viewport` under `config` and saves it to
/// `filepath`.
pub fn render_with(
    config: RenderConfig,
    viewport: Viewport,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    println!("Rendering escape-time fractal...");
    println!("Image size: {}x{}", config.width(), config.height());
    println!("Iteration cap: {}", config.iteration_cap());
    println!("Workers: {}", config.workers());

    let buffer = Arc::new(SharedFrameBuffer::new(config.width(), config.height()));
    let mut pool = RenderPool::new(
        config,
        Palette::procedural(),
        Arc::clone(&buffer) as Arc<dyn FrameSink>,
    )?;

    let start = Instant::now();
    let generation = pool.request_frame(viewport);
    if !pool.wait_for_generation(generation, RENDER_TIMEOUT) {
        return Err("render timed out".into());
    }
    println!("Duration:   {:?}", start.elapsed());
    println!("View: {}", pool.snapshot());

    write_ppm(
        &buffer.snapshot(),
        config.width(),
        config.height(),
        &filepath,
    )?;
    println!("Saved to {}", filepath.as_ref().display());

    pool.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_small_frame_to_a_ppm_file() {
        let config = RenderConfig::new(16, 12, 32, 2).unwrap();
        let mut path = std::env::temp_dir();
        path.push(format!("mandelscope_headless_{}.ppm", std::process::id()));

        render_with(config, Viewport::default(), &path).unwrap();

        let contents = std::fs::read(&path).unwrap();
        assert!(contents.starts_with(b"P6\n16 12\n255\n"));
        assert_eq!(contents.len(), b"P6\n16 12\n255\n".len() + 16 * 12 * 3);

        std::fs::remove_file(&path).unwrap();
    }
}
