use std::fmt;

/// Simulated time in whole units. Starts at zero and only moves forward.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SimClock(u64);

impl SimClock {
    pub fn new() -> Self {
        SimClock(0)
    }

    pub fn now(&self) -> u64 {
        self.0
    }

    pub fn advance(&mut self, units: u64) {
        self.0 += units;
    }

    /// Whether a process arriving at `arrival` is eligible at the current time.
    pub fn has_reached(&self, arrival: u32) -> bool {
        u64::from(arrival) <= self.0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
