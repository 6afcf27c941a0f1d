/// Errors that can occur before a Newton solve starts iterating.
///
/// Numerical failures (ill-conditioned derivatives, exhausted iterations) are
/// not errors; they are reported through [`Status`](super::Status).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("initial guess must be finite, got {x0}")]
    NonFiniteGuess { x0: f64 },
}
