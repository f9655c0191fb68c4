use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;
use crate::engine::frame_request::FrameRequest;
use crate::engine::pool::PoolShared;
use std::sync::atomic::Ordering;

/// Body of one persistent render thread.
///
/// Idle: blocks on the wake condvar until the shared generation counter
/// moves past this worker's last-seen token (a new frame) or shutdown is
/// flagged; shutdown wins when both are pending. Working: walks the row
/// permutation at stride = worker count from its own offset, re-checking
/// for supersession before every row. A frame rendered to the end
/// publishes this worker's completed token so the orchestrator can
/// observe full frames.
pub(crate) fn worker_loop(shared: &PoolShared, index: usize) {
    let mut last_seen = 0u64;

    loop {
        let (generation, request) = {
            let mut slot = shared.posted.lock().unwrap();
            loop {
                if shared.shutdown.load(Ordering::Acquire) {
                    return;
                }
                if let Some(request) = *slot {
                    let generation = shared.generation.load(Ordering::Acquire);
                    if generation != last_seen {
                        break (generation, request);
                    }
                }
                slot = shared.wake.wait(slot).unwrap();
            }
        };

        last_seen = generation;

        if render_frame(shared, index, generation, &request) {
            shared.completed[index].store(generation, Ordering::Release);
            // Touch the mutex so a waiter cannot check its condition and
            // then sleep through this signal.
            drop(shared.posted.lock().unwrap());
            shared.done.notify_all();
        }
    }
}

/// Renders this worker's share of one frame. Returns false if the frame
/// was abandoned because a newer request or shutdown superseded it.
fn render_frame(
    shared: &PoolShared,
    index: usize,
    generation: u64,
    request: &FrameRequest,
) -> bool {
    let width = shared.config.width();
    let height = shared.config.height();
    let order = shared.row_order.rows();

    let mut position = index;
    while position < order.len() {
        // Cancellation is cooperative and row-granular: a row in progress
        // always finishes, the rest of a stale frame never starts.
        if superseded(shared, generation) {
            return false;
        }
        render_row(shared, order[position], width, height, request);
        position += shared.config.workers();
    }

    true
}

fn superseded(shared: &PoolShared, generation: u64) -> bool {
    shared.shutdown.load(Ordering::Relaxed)
        || shared.generation.load(Ordering::Relaxed) != generation
}

fn render_row(
    shared: &PoolShared,
    row: u32,
    width: u32,
    height: u32,
    request: &FrameRequest,
) {
    let imag = request.viewport.imag_at(row, height);

    for x in 0..width {
        let c = Complex::new(request.viewport.real_at(x, width), imag);
        let result = escape_time(c, request.seed, request.iteration_cap);
        shared
            .sink
            .set_pixel(x, row, shared.palette.colour_for(result));
    }
}
