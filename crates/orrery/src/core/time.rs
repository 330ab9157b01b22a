/// Per-frame clock driven by the host's render loop.
/// Frames arrive at no fixed rate; the clock only accumulates what it is given.
///
/// Elapsed time is kept in f64 so long sessions keep sub-millisecond precision.
pub struct FrameClock {
    /// Seconds since the first tick.
    elapsed: f64,
    /// Delta of the most recent tick.
    delta: f32,
    /// Number of ticks seen.
    frames: u64,
}

/// Snapshot of the clock handed to `Game::update`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Seconds since the simulation started.
    pub elapsed: f64,
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Frame counter (1 for the first frame).
    pub frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            frames: 0,
        }
    }

    /// Advance by one frame. Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> FrameInfo {
        let dt = if frame_dt.is_finite() && frame_dt > 0.0 {
            frame_dt
        } else {
            0.0
        };
        self.delta = dt;
        self.elapsed += dt as f64;
        self.frames += 1;
        self.info()
    }

    pub fn info(&self) -> FrameInfo {
        FrameInfo {
            elapsed: self.elapsed,
            delta: self.delta,
            frame: self.frames,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_variable_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(0.016);
        clock.advance(0.034);
        let info = clock.advance(0.05);
        assert!((info.elapsed - 0.1).abs() < 1e-6, "elapsed was {}", info.elapsed);
        assert_eq!(info.delta, 0.05);
        assert_eq!(info.frame, 3);
    }

    #[test]
    fn ignores_bad_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(0.5);
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        let info = clock.advance(f32::INFINITY);
        assert_eq!(info.elapsed, 0.5);
        assert_eq!(info.delta, 0.0);
        assert_eq!(clock.frames(), 4);
    }

    #[test]
    fn long_pause_is_not_capped() {
        // A suspended tab resumes with one large delta; elapsed time jumps with it.
        let mut clock = FrameClock::new();
        clock.advance(120.0);
        assert_eq!(clock.elapsed(), 120.0);
    }
}
