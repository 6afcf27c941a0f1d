//! Reusable observers for the Raphson solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `raphson-solvers`.
//!
//! # Observers
//!
//! - [`Trace`] — emits one human-readable diagnostic per finished solve to a
//!   [`TraceSink`]
//! - [`History`] — records every Newton step, exposing the guess sequence
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`CanStopEarly`])
//!
//! [`Observer`]: raphson_core::Observer
//! [`TraceSink`]: raphson_core::TraceSink
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod trace;

pub use history::History;
pub use trace::Trace;
