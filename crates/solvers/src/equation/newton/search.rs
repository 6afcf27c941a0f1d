use raphson_core::Observer;

use super::{Action, Config, Error, Event, Solution, Status, Step};

/// Core Newton iteration shared by the analytic and numerical entry points.
///
/// `derivative` is either the caller's evaluator or a closure over
/// [`central_difference`](super::central_difference).
pub(super) fn search<F, D, Obs>(
    function: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let residual = function(x);
        let slope = derivative(x);

        if is_ill_conditioned(residual, slope, config.epsilon()) {
            observer.observe(&Event::IllConditioned {
                iter,
                x,
                residual,
                derivative: slope,
            });
            return Ok(Solution::new(Status::IllConditioned, x, iter));
        }

        let step = Step {
            iter,
            x,
            residual,
            derivative: slope,
            next: x - residual / slope,
        };

        if let Some(Action::StopEarly) = observer.observe(&Event::Step(step)) {
            return Ok(Solution::new(Status::StoppedByObserver, step.next, iter));
        }

        if is_converged(step.x, step.next, config.tolerance()) {
            observer.observe(&Event::Converged {
                iter,
                root: step.next,
            });
            return Ok(Solution::new(Status::Converged, step.next, iter));
        }

        x = step.next;
    }

    observer.observe(&Event::MaxIters {
        max_iters: config.max_iters(),
    });
    Ok(Solution::new(Status::MaxIters, x, config.max_iters()))
}

/// The derivative is untrustworthy when it is negligible relative to the
/// function value. Covers `derivative == 0` since `epsilon * |residual| >= 0`.
fn is_ill_conditioned(residual: f64, derivative: f64, epsilon: f64) -> bool {
    derivative.abs() <= epsilon * residual.abs()
}

/// Relative step test, scaled by the new guess.
fn is_converged(x: f64, next: f64, tolerance: f64) -> bool {
    (next - x).abs() <= tolerance * next.abs()
}
