use foundation::time::Time;

/// Nominal display refresh delta (60 Hz).
pub const REFRESH_DT_S: f64 = 1.0 / 60.0;

/// Deterministic frame metadata.
///
/// The primary timebase for the render loop. Engine time is derived from the
/// frame index and the fixed delta, never from the wall clock, so a frame
/// sequence can be recorded and replayed exactly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Fixed delta time (seconds).
    pub dt_s: f64,
    /// Engine time at the start of the frame (seconds).
    pub time: Time,
}

impl Frame {
    pub fn new(index: u64, dt_s: f64) -> Self {
        Self {
            index,
            dt_s,
            time: Time(index as f64 * dt_s),
        }
    }

    /// Frame 0 at the nominal refresh rate.
    pub fn first() -> Self {
        Self::new(0, REFRESH_DT_S)
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_s)
    }
}
