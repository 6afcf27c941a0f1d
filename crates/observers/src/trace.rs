use raphson_core::{Observer, TraceSink};
use raphson_solvers::equation::newton::{Action, Event};

/// An observer that reports how a Newton solve finished.
///
/// `Trace` emits exactly one message per solve, when the terminal event
/// arrives:
///
/// - an ill-conditioned derivative, with the offending guess
/// - convergence, with the root and the iteration count
/// - an exhausted iteration budget
///
/// Step events are silent and `Trace` never steers the solve. Attaching a
/// `Trace` is how verbose diagnostics are enabled; the unobserved entry points
/// stay quiet.
///
/// Pass `&mut Trace` to keep ownership of the sink, for example to inspect a
/// `Vec<String>` afterwards.
///
/// # Example
///
/// ```
/// use raphson_observers::Trace;
/// use raphson_solvers::equation::newton::{self, Config};
///
/// let mut trace = Trace::new(Vec::new());
/// newton::solve(f64::sin, f64::cos, 3.0, &Config::default(), &mut trace)?;
///
/// let messages = trace.into_sink();
/// assert_eq!(messages.len(), 1);
/// assert!(messages[0].starts_with("newton: converged to x = 3.14159"));
/// # Ok::<(), newton::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trace<S> {
    sink: S,
}

impl<S: TraceSink> Trace<S> {
    /// Creates a trace that forwards messages to `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the trace and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Formats the diagnostic for a terminal event, or `None` for a step.
fn describe(event: &Event) -> Option<String> {
    match event {
        Event::Step(_) => None,
        Event::IllConditioned {
            iter,
            x,
            residual,
            derivative,
        } => Some(format!(
            "newton: failed to converge at x = {x} (iteration {iter}): \
             first derivative {derivative} is nearly zero relative to f(x) = {residual}"
        )),
        Event::Converged { iter, root } => Some(format!(
            "newton: converged to x = {root} after {iter} iterations"
        )),
        Event::MaxIters { max_iters } => Some(format!(
            "newton: maximum iterations reached ({max_iters})"
        )),
    }
}

impl<S: TraceSink> Observer<Event, Action> for Trace<S> {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        if let Some(message) = describe(event) {
            self.sink.emit(&message);
        }
        None
    }
}

/// Allows `&mut Trace<S>` to be passed to solvers that take an observer by
/// value, so the sink can be inspected after the solve completes.
impl<S: TraceSink> Observer<Event, Action> for &mut Trace<S> {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}
