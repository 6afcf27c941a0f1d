/// Actions an observer can take during a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest guess.
    ///
    /// Only honored for [`Event::Step`](super::Event::Step) events.
    StopEarly,
}
