/// Outcome of a single pull from a sequence producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull<T> {
    Yielded(T),
    Exhausted,
}

impl<T> Pull<T> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Pull::Exhausted)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Pull::Yielded(value) => Some(value),
            Pull::Exhausted => None,
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Pull::Yielded(value),
            None => Pull::Exhausted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The producer signalled exhaustion and the completion marker was written.
    Exhausted,
    /// The pull cap was hit first.
    CapReached,
}

/// Summary of one consumer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub pulls: usize,
    pub values_emitted: usize,
    pub stop_reason: StopReason,
}

impl RunReport {
    pub fn lines_emitted(&self) -> usize {
        match self.stop_reason {
            StopReason::Exhausted => self.values_emitted + 1,
            StopReason::CapReached => self.values_emitted,
        }
    }
}
