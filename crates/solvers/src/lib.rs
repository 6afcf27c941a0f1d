//! Numerical solvers for the Raphson workspace.
//!
//! # Modules
//!
//! - [`equation`] — root finding for scalar equations
//!
//! Every solver comes in an observed and an unobserved flavor. The observed
//! flavor accepts any [`Observer`] over the solver's event and action types,
//! which is how diagnostics and early stopping are attached.
//!
//! [`Observer`]: raphson_core::Observer

pub mod equation;
