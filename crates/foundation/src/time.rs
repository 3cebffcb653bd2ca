/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct Time(pub f64); // seconds

impl Time {
    pub const ZERO: Time = Time(0.0);

    pub fn seconds(self) -> f64 {
        self.0
    }

    /// The instant `secs` seconds after `self`.
    pub fn after(self, secs: f64) -> Self {
        Time(self.0 + secs)
    }

    /// Seconds elapsed since `earlier`, never negative.
    pub fn since(self, earlier: Time) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Time;

    #[test]
    fn after_and_since() {
        let t = Time(1.5).after(2.0);
        assert_eq!(t, Time(3.5));
        assert_eq!(t.since(Time(1.5)), 2.0);
        assert_eq!(Time(1.0).since(Time(4.0)), 0.0);
    }
}
