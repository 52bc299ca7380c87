use foundation::time::Time;

use crate::frame::{Frame, REFRESH_DT_S};

/// One issued animation step: the deterministic frame plus the host's
/// wall-clock reading for it.
///
/// Engine state advances off `frame`; anything that must pulse at a real-time
/// rate regardless of frame pacing reads `wall`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tick {
    pub frame: Frame,
    pub wall: Time,
}

/// Cooperative animation driver.
///
/// The host calls `tick` once per display refresh and runs the returned step
/// to completion on the calling thread; there is no mid-step cancellation.
/// `stop` cancels the pending step instead: every later `tick` yields `None`,
/// so a stopped loop can never fire again.
#[derive(Debug)]
pub struct Ticker {
    next: Frame,
    stopped: bool,
}

impl Ticker {
    pub fn new(dt_s: f64) -> Self {
        Self {
            next: Frame::new(0, dt_s),
            stopped: false,
        }
    }

    /// Issue the next step, or `None` once stopped.
    pub fn tick(&mut self, wall: Time) -> Option<Tick> {
        if self.stopped {
            return None;
        }
        let issued = Tick {
            frame: self.next,
            wall,
        };
        self.next = self.next.next();
        Some(issued)
    }

    /// Cancel the pending step. Idempotent.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Number of steps issued so far.
    pub fn frames_issued(&self) -> u64 {
        self.next.index
    }

    /// Index the renderer should stamp on out-of-band work (input handling,
    /// resizes) happening between steps: the most recently issued frame, or
    /// 0 before the first step.
    pub fn current_frame_index(&self) -> u64 {
        self.next.index.saturating_sub(1)
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(REFRESH_DT_S)
    }
}
