use penetra_core::State;

/// Event emitted by the march driver after each accepted, non-terminal step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Step counter (1-based).
    pub step: usize,

    /// The state reached by this step.
    pub state: State,
}
