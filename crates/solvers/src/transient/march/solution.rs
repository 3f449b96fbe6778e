use penetra_core::{History, State};

/// Indicates how the march ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The model reported a terminal state.
    Terminated,

    /// Stopped early due to an observer action.
    StoppedByObserver,

    /// Reached the configured step ceiling.
    StepLimit,
}

/// The result of a march.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the march ended.
    pub status: Status,

    /// Logged samples, strictly increasing in time.
    pub history: History,

    /// Number of steps taken, including the one that ended the march.
    pub steps: usize,

    /// The last logged state, at full precision.
    pub last: State,
}
