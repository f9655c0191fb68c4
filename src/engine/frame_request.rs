use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// One frame's worth of work: the viewport to render, the iteration cap
/// to render it at, and the kernel's initial seed.
///
/// `Copy`, and posted wholesale under the pool's wake mutex, so a worker's
/// per-frame snapshot can never see half of one request and half of the
/// next.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameRequest {
    pub viewport: Viewport,
    pub iteration_cap: u32,
    pub seed: Complex,
}
