use crate::core::data::colour::Colour;
use crate::engine::ports::frame_sink::FrameSink;
use std::sync::atomic::{AtomicU32, Ordering};

/// A width x height pixel grid multiple workers write concurrently.
///
/// Pixels are packed-RGB atomics: within a frame each worker owns disjoint
/// rows, so relaxed stores are all the coordination pixel writes need.
/// Out-of-bounds writes are dropped silently.
#[derive(Debug)]
pub struct SharedFrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<AtomicU32>,
}

impl SharedFrameBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        let pixels = (0..size).map(|_| AtomicU32::new(0)).collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(Colour::from_packed(self.pixels[index].load(Ordering::Relaxed)))
    }

    /// Row-major RGB bytes of the current contents, 3 bytes per pixel;
    /// what a host presents or an exporter encodes.
    #[must_use]
    pub fn snapshot(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            let colour = Colour::from_packed(pixel.load(Ordering::Relaxed));
            bytes.push(colour.r);
            bytes.push(colour.g);
            bytes.push(colour.b);
        }
        bytes
    }
}

impl FrameSink for SharedFrameBuffer {
    fn set_pixel(&self, x: u32, y: u32, colour: Colour) {
        if x >= self.width || y >= self.height {
            return;
        }

        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index].store(colour.packed(), Ordering::Relaxed);
    }
}
