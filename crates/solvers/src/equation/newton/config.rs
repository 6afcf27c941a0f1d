use thiserror::Error;

/// Configuration for the Newton solver.
///
/// Values are validated on construction, so a `Config` in hand is always
/// usable. Start from [`Config::default`] and override individual fields with
/// the `with_*` methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
    epsilon: f64,
    step_size: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("epsilon must be finite and non-negative")]
    Epsilon,

    #[error("step_size must be finite and positive")]
    StepSize,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(20, 1e-7, f64::EPSILON, 1e-4).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated values.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` or `epsilon` is negative or non-finite,
    /// or if `step_size` is not finite and positive.
    pub fn new(
        max_iters: usize,
        tolerance: f64,
        epsilon: f64,
        step_size: f64,
    ) -> Result<Self, ConfigError> {
        if !is_non_negative(tolerance) {
            return Err(ConfigError::Tolerance);
        }
        if !is_non_negative(epsilon) {
            return Err(ConfigError::Epsilon);
        }
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::StepSize);
        }

        Ok(Self {
            max_iters,
            tolerance,
            epsilon,
            step_size,
        })
    }

    /// Returns a copy with a different iteration limit.
    ///
    /// A limit of zero is allowed; the solver then reports
    /// [`Status::MaxIters`](super::Status::MaxIters) without evaluating.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy with a different relative convergence tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if `tolerance` is negative or non-finite.
    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(self.max_iters, tolerance, self.epsilon, self.step_size)
    }

    /// Returns a copy with a different derivative conditioning guard.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Epsilon`] if `epsilon` is negative or non-finite.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self, ConfigError> {
        Self::new(self.max_iters, self.tolerance, epsilon, self.step_size)
    }

    /// Returns a copy with a different finite-difference step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::StepSize`] if `step_size` is not finite and positive.
    pub fn with_step_size(self, step_size: f64) -> Result<Self, ConfigError> {
        Self::new(self.max_iters, self.tolerance, self.epsilon, step_size)
    }

    /// Returns the maximum number of Newton iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the relative tolerance on the step size.
    ///
    /// A step converges when `|x1 - x0| <= tolerance * |x1|`.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the derivative conditioning guard.
    ///
    /// A derivative is rejected when `|yp| <= epsilon * |y|`.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the finite-difference step used by numerical derivatives.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
