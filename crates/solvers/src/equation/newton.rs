//! Newton–Raphson root finding for scalar functions.
//!
//! # Algorithm
//!
//! Starting from an initial guess `x0`, each iteration evaluates the function
//! `y = f(x0)` and its derivative `yp`, then takes the Newton update
//!
//! ```text
//! x1 = x0 - y / yp
//! ```
//!
//! The derivative comes from a caller-supplied evaluator ([`solve`]) or from a
//! fourth-order central difference ([`solve_numerical`], see
//! [`central_difference`]).
//!
//! Each iteration checks two stopping conditions:
//!
//! - **Ill-conditioned derivative**: `|yp| <= epsilon * |y|`. The derivative
//!   is too small relative to the function value to trust, so the solve
//!   fails. This includes `yp == 0`.
//! - **Convergence**: `|x1 - x0| <= tolerance * |x1|`. The step is small
//!   relative to the new guess, so `x1` is returned as the root.
//!
//! If neither holds within [`Config::max_iters`] iterations, the solve fails.
//!
//! # When to Use
//!
//! Newton's method is appropriate when:
//! - A reasonable initial guess is available
//! - The function is smooth near the root
//! - Fast (quadratic) convergence near simple roots matters
//!
//! # Limitations
//!
//! - **Local only**: Poor guesses or ill-conditioned functions fail; failures
//!   are reported through [`Status`], never retried.
//! - **Multiple roots**: Convergence degrades to linear near roots of
//!   multiplicity greater than one, so [`Config::max_iters`] may need raising.
//! - **Roots at zero**: The convergence test scales with `|x1|`, so a root at
//!   exactly zero is only accepted when the iteration lands on `0.0` twice in a
//!   row. Otherwise the solve exhausts its iterations.
//!
//! # Observer Events
//!
//! The solver emits one [`Event::Step`] per computed update, followed by
//! exactly one terminal event:
//!
//! - [`Event::IllConditioned`] — the derivative failed the conditioning check
//! - [`Event::Converged`] — the step satisfied the convergence test
//! - [`Event::MaxIters`] — the iteration budget ran out
//!
//! Observers can return [`Action::StopEarly`] from a step event to halt
//! immediately. Actions returned for terminal events are ignored.
//!
//! # Example
//!
//! ```
//! use raphson_solvers::equation::newton::{self, Config, RootResult};
//!
//! let f = |x: f64| x * x + x - 2.0;
//! let fp = |x: f64| 2.0 * x + 1.0;
//!
//! let solution = newton::solve_unobserved(f, fp, 2.0, &Config::default())?;
//! let RootResult::Converged(root) = solution.result() else {
//!     panic!("expected a root");
//! };
//! assert!((root - 1.0).abs() < 1e-9);
//! # Ok::<(), newton::Error>(())
//! ```

mod action;
mod config;
mod difference;
mod error;
mod event;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use difference::central_difference;
pub use error::Error;
pub use event::{Event, Step};
pub use solution::{RootResult, Solution, Status};

use raphson_core::Observer;

use search::search;

/// Finds a root of `function` using a caller-supplied `derivative`.
///
/// The observer receives an [`Event`] for every step and for the terminal
/// condition. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns [`Error::NonFiniteGuess`] if `x0` is NaN or infinite.
/// Numerical failures are reported through [`Solution::status`].
pub fn solve<F, D, Obs>(
    function: F,
    derivative: D,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    search(&function, &derivative, x0, config, observer)
}

/// Finds a root of `function` using a caller-supplied `derivative`, without
/// observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::NonFiniteGuess`] if `x0` is NaN or infinite.
pub fn solve_unobserved<F, D>(
    function: F,
    derivative: D,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    solve(function, derivative, x0, config, ())
}

/// Finds a root of `function`, estimating the derivative numerically.
///
/// The derivative at each guess is a [`central_difference`] with step
/// [`Config::step_size`], costing four extra function evaluations per
/// iteration.
///
/// # Errors
///
/// Returns [`Error::NonFiniteGuess`] if `x0` is NaN or infinite.
/// Numerical failures are reported through [`Solution::status`].
pub fn solve_numerical<F, Obs>(
    function: F,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let step = config.step_size();
    let derivative = |x: f64| central_difference(&function, x, step);
    search(&function, &derivative, x0, config, observer)
}

/// Finds a root of `function` with a numerical derivative, without observer
/// support.
///
/// This is a convenience wrapper around [`solve_numerical`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns [`Error::NonFiniteGuess`] if `x0` is NaN or infinite.
pub fn solve_numerical_unobserved<F>(
    function: F,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve_numerical(function, x0, config, ())
}
