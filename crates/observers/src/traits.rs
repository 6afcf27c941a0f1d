//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use raphson_core::Observer;
//! use raphson_observers::traits::{CanStopEarly, HasResidual};
//! use raphson_solvers::equation::newton::{self, Config, Status};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//!
//! let solution = newton::solve(
//!     |x: f64| x * x - 2.0,
//!     |x: f64| 2.0 * x,
//!     1.0,
//!     &Config::default(),
//!     GoodEnough { tolerance: 1e-6 },
//! )?;
//!
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! # Ok::<(), newton::Error>(())
//! ```

use raphson_solvers::equation::newton;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event carries no residual.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        match self {
            newton::Event::Step(step) => step.residual,
            newton::Event::IllConditioned { residual, .. } => *residual,
            newton::Event::Converged { .. } | newton::Event::MaxIters { .. } => f64::NAN,
        }
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
