/// Control actions supported by the march driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop marching and return what has been logged so far.
    StopEarly,
}
