use std::num::NonZeroUsize;

use raphson_core::Observer;
use raphson_solvers::equation::newton::{Action, Event, Step};

/// An observer that records every Newton step.
///
/// After a solve, [`History::guesses`] returns the guess sequence
/// `x0, x1, …` and [`History::terminal`] the event that ended the solve.
/// A history built with [`History::stop_after`] also caps the number of
/// steps by requesting [`Action::StopEarly`].
#[derive(Debug, Clone, Default)]
pub struct History {
    steps: Vec<Step>,
    terminal: Option<Event>,
    max_steps: Option<NonZeroUsize>,
}

impl History {
    /// Creates an empty history that never stops the solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history that stops the solver once `max_steps`
    /// steps have been recorded.
    ///
    /// The solver only consults observers after computing a step, so at least
    /// one step is always recorded.
    #[must_use]
    pub fn stop_after(max_steps: NonZeroUsize) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..Self::default()
        }
    }

    /// Returns the recorded steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the terminal event, if the solve ended on one.
    #[must_use]
    pub fn terminal(&self) -> Option<Event> {
        self.terminal
    }

    /// Returns the guess sequence: each step's starting point followed by the
    /// final update.
    #[must_use]
    pub fn guesses(&self) -> Vec<f64> {
        let mut guesses: Vec<f64> = self.steps.iter().map(|step| step.x).collect();
        guesses.extend(self.steps.last().map(|step| step.next));
        guesses
    }
}

impl Observer<Event, Action> for History {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        let Event::Step(step) = event else {
            self.terminal = Some(*event);
            return None;
        };

        self.steps.push(*step);
        self.max_steps
            .is_some_and(|max| self.steps.len() >= max.get())
            .then_some(Action::StopEarly)
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the history can be read after the solve completes.
impl Observer<Event, Action> for &mut History {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}
