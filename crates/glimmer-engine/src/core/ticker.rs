use std::cell::Cell;
use std::rc::Rc;

/// Cancellation handle for a tick loop.
///
/// The host keeps a clone and calls [`cancel`](CancelHandle::cancel) on view
/// teardown; the loop observes the flag before every tick, so no tick is ever
/// left in flight.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Rc<Cell<bool>>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Discrete tick counter for a continuous animation loop.
///
/// The host invokes the loop once per display refresh; each invocation is one
/// tick regardless of wall-clock spacing. There is deliberately no notion of
/// delta time here — the animators all use fixed per-tick steps.
#[derive(Debug)]
pub struct Ticker {
    ticks: u64,
    handle: CancelHandle,
}

impl Ticker {
    pub fn new() -> Self {
        Self {
            ticks: 0,
            handle: CancelHandle::new(),
        }
    }

    /// A handle the host can use to stop the loop.
    pub fn handle(&self) -> CancelHandle {
        self.handle.clone()
    }

    /// Advance by one tick. Returns false (without advancing) once cancelled.
    pub fn advance(&mut self) -> bool {
        if self.handle.is_cancelled() {
            return false;
        }
        self.ticks += 1;
        true
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}
