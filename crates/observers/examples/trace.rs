//! Traces Newton solves of a simple quadratic.
//!
//! Solves `(x - 1)(x + 2) = 0` from `x = 0`, once with the analytic
//! derivative and once with a numerical one, printing the solver's
//! diagnostic trace followed by the result.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trace
//! cargo run --example trace -- -3
//! ```
//!
//! The optional argument is the initial guess (default `0`). Guesses near
//! `-0.5`, where the derivative vanishes, show the failure path.

use std::error::Error;

use raphson_observers::Trace;
use raphson_solvers::equation::newton::{self, Config, RootResult};

fn f(x: f64) -> f64 {
    (x - 1.0) * (x + 2.0)
}

fn fp(x: f64) -> f64 {
    (x - 1.0) + (x + 2.0)
}

fn main() -> Result<(), Box<dyn Error>> {
    let x0 = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()?
        .unwrap_or(0.0);

    let config = Config::default();
    let print = |message: &str| println!("  {message}");

    println!("Using the derivative:");
    let analytic = newton::solve(f, fp, x0, &config, Trace::new(print))?;
    report(analytic.result());

    println!("Using a numerical first derivative:");
    let numerical = newton::solve_numerical(f, x0, &config, Trace::new(print))?;
    report(numerical.result());

    Ok(())
}

fn report(result: RootResult) {
    match result {
        RootResult::Converged(root) => println!("  root: {root}"),
        RootResult::Failed => println!("  no root found"),
    }
}
