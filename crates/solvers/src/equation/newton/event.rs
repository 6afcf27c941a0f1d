/// A single Newton update computed by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The guess the update started from.
    pub x: f64,

    /// Function value at `x`.
    pub residual: f64,

    /// Derivative at `x`, analytic or estimated.
    pub derivative: f64,

    /// The updated guess, `x - residual / derivative`.
    pub next: f64,
}

impl Step {
    /// Returns the signed size of the update, `next - x`.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.next - self.x
    }
}

/// Events emitted by the Newton solver.
///
/// Every solve emits zero or more [`Event::Step`] events followed by exactly
/// one terminal event, unless an observer stops the solve early.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A Newton update was computed.
    Step(Step),

    /// The derivative was too small relative to the function value.
    IllConditioned {
        /// Iteration counter (1-based).
        iter: usize,

        /// The guess where the check failed.
        x: f64,

        /// Function value at `x`.
        residual: f64,

        /// Derivative at `x`.
        derivative: f64,
    },

    /// The step satisfied the relative convergence test.
    Converged {
        /// Iteration counter (1-based).
        iter: usize,

        /// The converged root.
        root: f64,
    },

    /// The iteration budget ran out without convergence.
    MaxIters {
        /// The configured iteration limit.
        max_iters: usize,
    },
}

impl Event {
    /// Returns the iteration the event belongs to.
    ///
    /// For [`Event::MaxIters`] this is the configured limit.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Step(step) => step.iter,
            Self::IllConditioned { iter, .. } | Self::Converged { iter, .. } => *iter,
            Self::MaxIters { max_iters } => *max_iters,
        }
    }

    /// Returns true if no further events follow this one.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Step(_))
    }
}
