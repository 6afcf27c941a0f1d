//! Solvers for equations — finding where a scalar function crosses zero.
//!
//! # Solvers
//!
//! - [`newton`] — Newton–Raphson iteration from a single initial guess, with
//!   an analytic or numerically estimated derivative

pub mod newton;
