use crate::core::data::render_config::RenderConfig;
use crate::core::data::view_snapshot::ViewSnapshot;
use crate::core::data::viewport::Viewport;
use crate::core::palette::Palette;
use crate::core::schedule::row_order::RowOrder;
use crate::engine::frame_request::FrameRequest;
use crate::engine::ports::frame_sink::FrameSink;
use crate::engine::worker::worker_loop;
use std::error::Error;
use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub enum PoolStartError {
    Spawn(io::Error),
}

impl fmt::Display for PoolStartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(err) => write!(f, "failed to start render worker: {}", err),
        }
    }
}

impl Error for PoolStartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Spawn(err) => Some(err),
        }
    }
}

/// State every worker shares with the orchestrator.
///
/// The posted request and its generation stamp change together under the
/// wake mutex; the duplicate atomic counter exists so the per-row
/// supersession check stays off the lock.
pub(crate) struct PoolShared {
    pub(crate) generation: AtomicU64,
    pub(crate) shutdown: AtomicBool,
    pub(crate) posted: Mutex<Option<FrameRequest>>,
    pub(crate) wake: Condvar,
    pub(crate) done: Condvar,
    pub(crate) completed: Vec<AtomicU64>,
    pub(crate) config: RenderConfig,
    pub(crate) palette: Palette,
    pub(crate) row_order: RowOrder,
    pub(crate) sink: Arc<dyn FrameSink>,
}

/// The frame orchestrator: owns a fixed pool of persistent render threads
/// and the current viewport, and is the host's sole entry point.
///
/// `request_frame` is asynchronous (it returns a generation token
/// immediately and the workers repaint the sink in progressive row
/// order); `shutdown` blocks until every worker has exited. Requests made
/// while a frame is in flight supersede it: workers abandon stale frames
/// at row granularity rather than finish wasted work.
pub struct RenderPool {
    shared: Arc<PoolShared>,
    workers: Vec<JoinHandle<()>>,
    config: RenderConfig,
    viewport: Viewport,
}

impl RenderPool {
    /// Spawns one thread per configured worker. If any spawn fails the
    /// already-started workers are stopped and joined before the error is
    /// returned; a partial pool never survives.
    pub fn new(
        config: RenderConfig,
        palette: Palette,
        sink: Arc<dyn FrameSink>,
    ) -> Result<Self, PoolStartError> {
        let shared = Arc::new(PoolShared {
            generation: AtomicU64::new(0),
            shutdown: AtomicBool::new(false),
            posted: Mutex::new(None),
            wake: Condvar::new(),
            done: Condvar::new(),
            completed: (0..config.workers()).map(|_| AtomicU64::new(0)).collect(),
            config,
            palette,
            row_order: RowOrder::new(config.height()),
            sink,
        });

        let mut workers = Vec::with_capacity(config.workers());
        for index in 0..config.workers() {
            let worker_shared = Arc::clone(&shared);
            let spawned = thread::Builder::new()
                .name(format!("render-worker-{}", index))
                .spawn(move || worker_loop(&worker_shared, index));

            match spawned {
                Ok(handle) => workers.push(handle),
                Err(err) => {
                    signal_shutdown(&shared);
                    for handle in workers {
                        let _ = handle.join();
                    }
                    return Err(PoolStartError::Spawn(err));
                }
            }
        }

        Ok(Self {
            shared,
            workers,
            config,
            viewport: Viewport::default(),
        })
    }

    /// Installs `viewport` as the current view and wakes every worker on
    /// it. Returns the new frame's generation token immediately; the host
    /// presents the sink opportunistically while rows fill in.
    pub fn request_frame(&mut self, viewport: Viewport) -> u64 {
        self.viewport = viewport;
        self.submit()
    }

    /// Raises the iteration cap (never lowers it) and re-renders the
    /// current viewport at the new cap. Returns the new generation, or
    /// None when `cap` is not an increase.
    pub fn raise_iteration_cap(&mut self, cap: u32) -> Option<u64> {
        if self.config.raise_iteration_cap(cap) {
            Some(self.submit())
        } else {
            None
        }
    }

    fn submit(&self) -> u64 {
        let request = FrameRequest {
            viewport: self.viewport,
            iteration_cap: self.config.iteration_cap(),
            seed: self.config.seed(),
        };

        // Request first, generation stamp second, broadcast third, all
        // under the wake mutex: a woken worker always finds the request
        // its generation token describes. Broadcast, not single-wake --
        // every worker participates in every frame.
        let mut slot = self.shared.posted.lock().unwrap();
        *slot = Some(request);
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared.wake.notify_all();
        generation
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn iteration_cap(&self) -> u32 {
        self.config.iteration_cap()
    }

    /// The exportable record of the current view; what a screenshot
    /// collaborator embeds next to the pixels.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            viewport: self.viewport,
            iteration_cap: self.config.iteration_cap(),
            seed: self.config.seed(),
        }
    }

    /// Newest generation that every worker has rendered to completion.
    /// Abandoned frames never complete; their generation is covered by
    /// whichever newer frame superseded them.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .completed
            .iter()
            .map(|token| token.load(Ordering::Acquire))
            .min()
            .unwrap_or(0)
    }

    /// Blocks until a frame at least as new as `generation` has fully
    /// completed, or until `timeout` elapses. Returns whether the frame
    /// completed.
    pub fn wait_for_generation(&self, generation: u64, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut slot = self.shared.posted.lock().unwrap();

        loop {
            if self.last_completed_generation() >= generation {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _) = self
                .shared
                .done
                .wait_timeout(slot, deadline - now)
                .unwrap();
            slot = guard;
        }
    }

    /// Stops the pool: flags every worker to exit, wakes them, and joins
    /// each thread. Blocks until the teardown is complete; a worker mid-row
    /// finishes that row first, one mid-frame abandons the rest.
    pub fn shutdown(&mut self) {
        signal_shutdown(&self.shared);
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

fn signal_shutdown(shared: &PoolShared) {
    // The flag flips under the wake mutex so no worker can check it and
    // then sleep through the broadcast.
    let _slot = shared.posted.lock().unwrap();
    shared.shutdown.store(true, Ordering::Release);
    shared.wake.notify_all();
}

impl Drop for RenderPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
