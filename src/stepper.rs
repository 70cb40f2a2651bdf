use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperError {
    InvalidLength,
}

impl fmt::Display for StepperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepperError::InvalidLength => write!(f, "sequence length must be at least 1"),
        }
    }
}

impl std::error::Error for StepperError {}

/// Walks an index around a fixed-size sequence (e.g. animation frames),
/// wrapping back to 0 after the last step.
///
/// With an interval set, `try_advance` only moves once that many
/// milliseconds have passed since the last accepted move. The caller owns
/// the clock and the tick loop.
#[derive(Debug, Clone)]
pub struct CyclicStepper {
    length: usize,
    position: usize,
    interval_millis: Option<u64>,
    last_advance_time: Option<u64>,
}

impl CyclicStepper {
    pub fn new(length: usize, interval_millis: Option<u64>) -> Result<Self, StepperError> {
        if length < 1 {
            return Err(StepperError::InvalidLength);
        }
        Ok(Self {
            length,
            position: 0,
            interval_millis,
            last_advance_time: None,
        })
    }

    /// Like `new`, for lengths coming from signed arithmetic.
    pub fn from_signed(length: i64, interval_millis: Option<u64>) -> Result<Self, StepperError> {
        let length = usize::try_from(length).map_err(|_| StepperError::InvalidLength)?;
        Self::new(length, interval_millis)
    }

    /// Carries the rate gate over from a stepper this one replaces.
    pub fn with_last_advance(mut self, last_advance_time: Option<u64>) -> Self {
        self.last_advance_time = last_advance_time;
        self
    }

    pub fn advance(&mut self) -> usize {
        self.position = (self.position + 1) % self.length;
        self.position
    }

    /// Returns whether the position moved, and the position after the call.
    pub fn try_advance(&mut self, now_millis: u64) -> (bool, usize) {
        let Some(interval) = self.interval_millis else {
            return (true, self.advance());
        };

        // An unset last time counts as t=0. A clock that went backwards
        // saturates to zero elapsed.
        let elapsed = now_millis.saturating_sub(self.last_advance_time.unwrap_or(0));
        if elapsed < interval {
            return (false, self.position);
        }

        self.last_advance_time = Some(now_millis);
        (true, self.advance())
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn current(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.length
    }

    /// Always false: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last_advance_time(&self) -> Option<u64> {
        self.last_advance_time
    }

    pub fn interval_millis(&self) -> Option<u64> {
        self.interval_millis
    }
}
