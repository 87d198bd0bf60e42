/// Frame clocks: elapsed seconds since the first frame
use std::time::Instant;

/// Source of the elapsed time handed to each frame
pub trait FrameClock {
    /// Seconds since the first call; monotonically non-decreasing
    fn elapsed(&mut self) -> f32;
}

/// Wall clock that starts counting at its first reading
#[derive(Debug, Default)]
pub struct SystemClock {
    start: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for SystemClock {
    fn elapsed(&mut self) -> f32 {
        let start = *self.start.get_or_insert_with(Instant::now);
        start.elapsed().as_secs_f32()
    }
}

/// Clock fed with host timestamps in milliseconds, e.g. the argument of a
/// `requestAnimationFrame` callback
#[derive(Debug, Default)]
pub struct HostClock {
    first: Option<f64>,
    latest: f64,
}

impl HostClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the host's timestamp for the frame about to run
    pub fn observe(&mut self, timestamp_ms: f64) {
        let first = *self.first.get_or_insert(timestamp_ms);
        // Hosts can hand back a stale timestamp; never run time backwards
        self.latest = (timestamp_ms - first).max(self.latest);
    }
}

impl FrameClock for HostClock {
    fn elapsed(&mut self) -> f32 {
        (self.latest / 1000.0) as f32
    }
}

/// Clock set by hand, for tests and deterministic replays
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualClock {
    pub seconds: f32,
}

impl ManualClock {
    pub fn new(seconds: f32) -> Self {
        Self { seconds }
    }

    pub fn advance(&mut self, seconds: f32) {
        self.seconds += seconds;
    }
}

impl FrameClock for ManualClock {
    fn elapsed(&mut self) -> f32 {
        self.seconds
    }
}
