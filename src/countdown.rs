/// A fixed run limit measured against elapsed milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total_millis: u64,
}

impl Countdown {
    pub fn new(total_millis: u64) -> Self {
        Self { total_millis }
    }

    pub fn total_millis(&self) -> u64 {
        self.total_millis
    }

    pub fn remaining_millis(&self, elapsed_millis: u64) -> u64 {
        self.total_millis.saturating_sub(elapsed_millis)
    }

    /// Whole seconds left, rounded up: reads 0 only once finished.
    pub fn remaining_secs(&self, elapsed_millis: u64) -> u64 {
        self.remaining_millis(elapsed_millis).div_ceil(1000)
    }

    pub fn is_finished(&self, elapsed_millis: u64) -> bool {
        elapsed_millis >= self.total_millis
    }

    pub fn fraction_done(&self, elapsed_millis: u64) -> f64 {
        if self.total_millis == 0 {
            return 1.0;
        }
        (elapsed_millis as f64 / self.total_millis as f64).min(1.0)
    }
}
