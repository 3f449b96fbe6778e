/// Event emitted by the Newton solver after each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The new iterate.
    pub x: f64,

    /// Residual at the new iterate.
    pub residual: f64,
}
