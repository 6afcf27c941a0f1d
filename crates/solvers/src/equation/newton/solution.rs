/// Indicates how a Newton solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the relative step tolerance.
    Converged,

    /// The derivative was judged too small to trust.
    IllConditioned,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The root when converged, otherwise the last guess the solver held.
    pub x: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(status: Status, x: f64, iters: usize) -> Self {
        Self { status, x, iters }
    }

    /// Returns the root if the solve converged.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        (self.status == Status::Converged).then_some(self.x)
    }

    /// Collapses the solution into a [`RootResult`].
    #[must_use]
    pub fn result(&self) -> RootResult {
        self.root().map_or(RootResult::Failed, RootResult::Converged)
    }
}

/// A root, or the fact that none was found.
///
/// Every non-converged [`Status`] maps to [`RootResult::Failed`]. Callers that
/// need the cause can inspect [`Solution::status`] or attach a trace observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootResult {
    /// The solve converged to this root.
    Converged(f64),

    /// The solve did not converge.
    Failed,
}

impl RootResult {
    /// Returns the root, if any.
    #[must_use]
    pub fn root(self) -> Option<f64> {
        match self {
            Self::Converged(root) => Some(root),
            Self::Failed => None,
        }
    }

    /// Returns true if a root was found.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(self, Self::Converged(_))
    }
}

impl From<Solution> for RootResult {
    fn from(solution: Solution) -> Self {
        solution.result()
    }
}
