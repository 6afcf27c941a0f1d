//! Core traits for the Raphson root-finding workspace.
//!
//! This crate defines the small set of seams that solvers and observers share:
//!
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`TraceSink`] — a single-method destination for diagnostic messages

mod observer;
mod trace;

pub use observer::Observer;
pub use trace::TraceSink;
