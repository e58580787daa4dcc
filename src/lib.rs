//! Root-finding solvers for scalar equations f(x) = 0.
//!
//! Three iterative methods share one convergence policy, iteration budget,
//! and failure taxonomy:
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a sign-changing bracket
//! - [`secant`] — derivative-free, superlinear, no bracket required
//! - [`newton`] — derivative-based, quadratic near a simple root
//!
//! Every solve is a fresh, fully synchronous computation: the crate holds no
//! global or cross-call state, so concurrent solves from independent threads
//! are safe whenever the caller's equation is reentrant. A successful solve
//! returns a [`Solution`] carrying the root and the [`Trace`] of
//! intermediate approximations; a failed solve returns an [`Error`] and no
//! partial state.
//!
//! Call a solver module directly, or go through [`solve`] with a typed
//! [`Method`]:
//!
//! ```
//! use rootfind::{solve, Config, Method};
//!
//! let equation = |x: f64| x * x - 4.0;
//! let solution = solve(
//!     &equation,
//!     Method::Bisection { a: 0.0, b: 3.0 },
//!     &Config::default(),
//! )?;
//!
//! assert!((solution.root - 2.0).abs() < 1e-5);
//! # Ok::<(), rootfind::Error>(())
//! ```

mod config;
mod equation;
mod error;
mod method;
mod solution;
mod trace;

pub mod bisection;
pub mod newton;
pub mod secant;

pub use config::{Config, ConfigError};
pub use equation::Equation;
pub use error::Error;
pub use method::{Derivative, Method};
pub use solution::Solution;
pub use trace::Trace;

/// Finds a root using the given method and its starting data.
///
/// Routes to the matching solver module, forwarding only the parameters that
/// solver needs. Numeric preconditions are checked by the solvers themselves
/// so that failures stay specific to the failing method.
///
/// # Errors
///
/// Returns whatever error the routed solver produces; see [`Error`] for the
/// full taxonomy.
pub fn solve<F>(equation: &F, method: Method<'_>, config: &Config) -> Result<Solution, Error>
where
    F: Equation + ?Sized,
{
    match method {
        Method::Bisection { a, b } => bisection::solve(equation, a, b, config),
        Method::Secant { a, b } => secant::solve(equation, a, b, config),
        Method::NewtonRaphson { a, derivative } => newton::solve(equation, a, derivative, config),
    }
}

/// Finds a root using a method selected by its wire name.
///
/// String-keyed entry point: `name` must be exactly one of
/// `"bissecao"`, `"secante"`, or `"newton_raphson"`. The name is validated
/// before any iteration occurs. `b` is required by the two-point methods and
/// ignored by Newton-Raphson; `derivative` is used only by Newton-Raphson.
///
/// # Errors
///
/// Returns [`Error::InvalidMethod`] or [`Error::MissingSecondPoint`] if the
/// request itself is malformed, otherwise whatever error the routed solver
/// produces.
pub fn solve_by_name<F>(
    equation: &F,
    name: &str,
    a: f64,
    b: Option<f64>,
    derivative: Derivative<'_>,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Equation + ?Sized,
{
    let method = Method::from_name(name, a, b, derivative)?;
    solve(equation, method, config)
}
