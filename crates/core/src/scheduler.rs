//! Drop scheduler - gravity ticks and the difficulty curve
//!
//! One persistent counter (`elapsed_frames`, monotonic for the whole
//! session) and one countdown (`frames_until_drop`). The gravity
//! interval shrinks as `10 - floor(log5(elapsed_frames))`, floored at
//! one frame - a deliberately slow ramp, recomputed from *total*
//! elapsed frames rather than per piece, so a session only ever gets
//! harder.
//!
//! Fast-drop does not touch the interval arithmetic at all: it
//! multiplies the external frame pacing by 10 via
//! [`DropScheduler::frame_duration`], which keeps tick-counted
//! simulation tests reproducible.

use std::time::Duration;

use crate::types::{
    BASE_DROP_INTERVAL_FRAMES, FAST_DROP_MULTIPLIER, FRAME_RATE, MIN_DROP_INTERVAL_FRAMES,
};

/// Gravity interval in frames after `elapsed_frames` total frames.
///
/// The log-base-5 formula is preserved verbatim from the reference
/// tuning; elapsed counts below 1 are clamped so the logarithm is defined.
pub fn drop_interval_frames(elapsed_frames: u32) -> u32 {
    let ramp = (f64::from(elapsed_frames.max(1)).ln() / 5f64.ln()).floor() as u32;
    BASE_DROP_INTERVAL_FRAMES
        .saturating_sub(ramp)
        .max(MIN_DROP_INTERVAL_FRAMES)
}

/// Drives gravity events and fast-drop pacing.
#[derive(Debug, Clone)]
pub struct DropScheduler {
    elapsed_frames: u32,
    frames_until_drop: u32,
    fast_drop: bool,
}

impl DropScheduler {
    pub fn new() -> Self {
        Self {
            elapsed_frames: 0,
            frames_until_drop: BASE_DROP_INTERVAL_FRAMES,
            fast_drop: false,
        }
    }

    /// Total frames since session start. Never resets.
    pub fn elapsed_frames(&self) -> u32 {
        self.elapsed_frames
    }

    pub fn fast_drop(&self) -> bool {
        self.fast_drop
    }

    pub fn set_fast_drop(&mut self, fast_drop: bool) {
        self.fast_drop = fast_drop;
    }

    /// Advance one frame. Returns true when a gravity event is due.
    pub fn tick(&mut self) -> bool {
        self.elapsed_frames = self.elapsed_frames.saturating_add(1);
        self.frames_until_drop = self.frames_until_drop.saturating_sub(1);
        self.frames_until_drop == 0
    }

    /// Recompute the countdown from the difficulty curve. Called after
    /// each gravity event has been handled.
    pub fn rearm(&mut self) {
        self.frames_until_drop = drop_interval_frames(self.elapsed_frames);
    }

    /// Wall-clock duration of one frame: 1/10 s normally, 1/100 s while
    /// fast-drop is held.
    pub fn frame_duration(&self) -> Duration {
        let rate = if self.fast_drop {
            FRAME_RATE * FAST_DROP_MULTIPLIER
        } else {
            FRAME_RATE
        };
        Duration::from_millis(u64::from(1000 / rate))
    }
}

impl Default for DropScheduler {
    fn default() -> Self {
        Self::new()
    }
}
