use foundation::time::Time;

/// Deterministic frame metadata.
///
/// Everything animated is a function of `time`, so a recorded sequence of
/// frames replays to the same poses.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Seconds since the previous frame.
    pub dt_s: f64,
    /// Elapsed time since the scene started (seconds).
    pub time: Time,
}

impl Frame {
    /// Frame `index` of a fixed-rate clock.
    pub fn new(index: u64, dt_s: f64) -> Self {
        Self {
            index,
            dt_s,
            time: Time(index as f64 * dt_s),
        }
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_s)
    }
}

/// Elapsed-time clock advanced by the host render loop once per display
/// refresh.
///
/// Elapsed time never decreases: negative or non-finite deltas count as zero.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    ticks: u64,
    elapsed: Time,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> Time {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self, dt_s: f64) -> Frame {
        let dt_s = if dt_s.is_finite() { dt_s.max(0.0) } else { 0.0 };
        let frame = Frame {
            index: self.ticks,
            dt_s,
            time: self.elapsed.after(dt_s),
        };
        self.ticks += 1;
        self.elapsed = frame.time;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::{Frame, FrameClock};
    use foundation::time::Time;

    #[test]
    fn frame_time_is_deterministic() {
        let a = Frame::new(10, 1.0 / 60.0);
        let b = Frame::new(10, 1.0 / 60.0);
        assert_eq!(a, b);
        assert_eq!(a.time, Time(10.0 / 60.0));
    }

    #[test]
    fn next_advances_index_and_time() {
        let f0 = Frame::new(0, 0.5);
        let f1 = f0.next();
        assert_eq!(f1.index, 1);
        assert_eq!(f1.time, Time(0.5));
    }

    #[test]
    fn clock_accumulates_variable_deltas() {
        let mut clock = FrameClock::new();
        let f0 = clock.tick(0.25);
        let f1 = clock.tick(0.5);
        assert_eq!((f0.index, f1.index), (0, 1));
        assert_eq!(f0.time, Time(0.25));
        assert_eq!(f1.time, Time(0.75));
        assert_eq!(clock.ticks(), 2);
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut clock = FrameClock::new();
        clock.tick(1.0);
        let f = clock.tick(-0.5);
        assert_eq!(f.time, Time(1.0));
        let g = clock.tick(f64::NAN);
        assert_eq!(g.time, Time(1.0));
        assert_eq!(g.dt_s, 0.0);
    }
}
